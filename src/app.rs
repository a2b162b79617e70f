//! Bar chart demo application.
//!
//! A column-count slider regenerates random data; the chart shows it and
//! reports selections, summarized in a text block below. With a single column
//! the chart is replaced by a progress slider driving one standalone bar.

use barchart_ui::prelude::*;

use crate::config::DemoConfig;
use crate::data::fill_chart_data;
use crate::message::Message;
use crate::theme::Theme;
use crate::ui_constants::{chart, controls, padding, text as text_size, window};

/// Summary shown under the chart.
pub fn summary_text(selected: usize, dataset: &Dataset) -> String {
    let value = dataset
        .get(selected)
        .map_or_else(|| "-".to_string(), |bar| bar.value().to_string());
    format!(
        "Selected column index: {}\nCurrent column value: {}\nAll columns value sum: {}",
        selected,
        value,
        dataset.total()
    )
}

pub struct DemoApp {
    theme: Theme,
    column_slider: SliderState,
    progress_slider: SliderState,
    dataset: Dataset,
    selected: usize,
    chart: BarChartState,
    progress_fill: FillAnimation,
    colors: ChartColors,
    max_visible: usize,
    fill_width: bool,
}

impl DemoApp {
    pub fn new(config: &DemoConfig) -> Self {
        let count = config.initial_column_count();
        Self {
            theme: Theme::from_preference(config.preferences.dark_theme),
            column_slider: SliderState::new(count as f32),
            progress_slider: SliderState::new(0.0),
            dataset: fill_chart_data(count, &mut rand::thread_rng()),
            selected: 0,
            chart: BarChartState::new(),
            progress_fill: FillAnimation::new(),
            colors: config.chart.colors,
            max_visible: config.chart.max_visible_column_count,
            fill_width: config.chart.fill_width,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Column count currently chosen on the slider.
    pub fn column_count(&self) -> usize {
        (self.column_slider.rounded().max(0) as usize)
            .clamp(controls::MIN_COLUMNS, controls::MAX_COLUMNS)
    }

    fn progress_value(&self) -> u64 {
        (self.progress_slider.rounded().max(0) as u64).min(controls::PROGRESS_MAX)
    }

    fn view_controls(&self) -> Element<Message> {
        let count_slider = slider(
            controls::MIN_COLUMNS as f32,
            controls::MAX_COLUMNS as f32,
            &self.column_slider,
        )
        .step(1.0)
        .width(Length::Fill)
        .fill_color(self.theme.accent_color())
        .on_change(Message::ColumnCountChanged);

        let count_label = text(self.column_count().to_string())
            .size(text_size::BODY)
            .color(self.theme.text_color())
            .width(controls::COUNT_LABEL_WIDTH);

        Element::new(
            row(vec![count_slider.into(), count_label.into()])
                .align_y(Alignment::Center)
                .width(Length::Fill),
        )
    }

    fn view_single_bar(&self) -> Element<Message> {
        let progress = slider(0.0, controls::PROGRESS_MAX as f32, &self.progress_slider)
            .step(1.0)
            .width(Length::Fill)
            .fill_color(self.theme.accent_color())
            .on_change(Message::ProgressChanged);

        let bar = bar_item(
            self.progress_value(),
            chart::SINGLE_BAR_LABEL,
            controls::PROGRESS_MAX,
            self.colors.unselected(),
        )
        .animated(&self.progress_fill)
        .width(chart::SINGLE_BAR_WIDTH)
        .height(chart::SINGLE_BAR_HEIGHT);

        Element::new(
            column(vec![progress.into(), bar.into()])
                .spacing(padding::SECTION)
                .width(Length::Fill)
                .align_x(Alignment::Center),
        )
    }

    fn view_chart(&self) -> Element<Message> {
        let total = self.dataset.total();
        let chart = bar_chart(
            &self.dataset,
            self.selected,
            &self.chart,
            move |_, bar, colors| bar_item(bar.value(), bar.label(), total, colors),
        )
        .on_select(Message::BarSelected)
        .colors(self.colors)
        .max_visible_columns(self.max_visible)
        .fill_width(self.fill_width)
        .width(Length::Fill)
        .height(chart::HEIGHT);

        chart.into()
    }

    fn view_summary(&self) -> Element<Message> {
        let summary = text(summary_text(self.selected, &self.dataset))
            .size(text_size::BODY)
            .color(self.theme.text_color());

        Element::new(
            column(vec![summary.into()])
                .width(Length::Fill)
                .align_x(Alignment::Center),
        )
    }
}

impl Application for DemoApp {
    type Message = Message;

    fn title(&self) -> String {
        window::TITLE.to_string()
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::ColumnCountChanged(state) => {
                let previous = self.column_count();
                self.column_slider = state;
                let count = self.column_count();
                if count != previous {
                    self.dataset = fill_chart_data(count, &mut rand::thread_rng());
                    log::info!(
                        "Column count -> {}, total {}",
                        count,
                        self.dataset.total()
                    );
                }
            }
            Message::ProgressChanged(state) => {
                self.progress_slider = state;
            }
            Message::BarSelected(index) => {
                self.selected = index;
                log::info!("selectedBar -> {}", index);
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let body = if self.dataset.len() == 1 {
            self.view_single_bar()
        } else {
            self.view_chart()
        };

        Element::new(
            column(vec![self.view_controls(), body, self.view_summary()])
                .spacing(padding::SECTION)
                .padding(Padding::new(padding::OUTER, padding::OUTER, 0.0, padding::OUTER))
                .width(Length::Fill),
        )
    }

    fn on_resize(&mut self, width: f32, height: f32) {
        log::debug!("Window resized to {}x{}", width, height);
    }
}

#[cfg(test)]
mod tests {
    use barchart_ui::SliderDragState;
    use barchart_ui::chart::Bar;

    use super::*;

    fn app_with_columns(count: usize) -> DemoApp {
        let mut config = DemoConfig::default();
        config.chart.initial_column_count = count;
        DemoApp::new(&config)
    }

    #[test]
    fn test_summary_text() {
        let ds = Dataset::new([Bar::new(235, "Start"), Bar::new(50, "Col 1"), Bar::new(35, "End")]);
        assert_eq!(
            summary_text(1, &ds),
            "Selected column index: 1\nCurrent column value: 50\nAll columns value sum: 320"
        );
    }

    #[test]
    fn test_summary_out_of_range_value() {
        let ds = Dataset::new([Bar::new(1, "a")]);
        assert!(summary_text(4, &ds).contains("Current column value: -"));
    }

    #[test]
    fn test_initial_dataset_matches_config() {
        let app = app_with_columns(5);
        assert_eq!(app.dataset().len(), 5);
        assert_eq!(app.column_count(), 5);
    }

    #[test]
    fn test_count_change_regenerates_dataset() {
        let mut app = app_with_columns(8);
        let before = app.dataset().clone();
        app.update(Message::ColumnCountChanged(SliderState {
            value: 3.0,
            drag: SliderDragState::Dragging,
        }));
        assert_eq!(app.dataset().len(), 3);
        assert_ne!(app.dataset().id(), before.id());
    }

    #[test]
    fn test_drag_end_keeps_dataset() {
        let mut app = app_with_columns(8);
        let id = app.dataset().id();
        app.update(Message::ColumnCountChanged(SliderState::new(8.0)));
        assert_eq!(app.dataset().id(), id);
    }

    #[test]
    fn test_bar_selected_updates_selection() {
        let mut app = app_with_columns(8);
        app.update(Message::BarSelected(4));
        assert_eq!(app.selected(), 4);
    }

    #[test]
    fn test_single_column_view_lays_out() {
        let app = app_with_columns(1);
        let mut root = app.view();
        let size = root.layout(Size::new(800.0, 600.0));
        assert_eq!(size.width, 800.0);
    }
}
