//! Dark and light themes for the demo.

use barchart_ui::Color;

/// Theme choice - dark or light mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub choice: ThemeChoice,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            choice: ThemeChoice::Dark,
        }
    }

    pub fn light() -> Self {
        Self {
            choice: ThemeChoice::Light,
        }
    }

    pub fn from_preference(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    /// Window background.
    pub fn background_color(&self) -> Color {
        match self.choice {
            ThemeChoice::Dark => Color::rgb(0.15, 0.15, 0.15),
            ThemeChoice::Light => Color::rgb(0.95, 0.95, 0.95),
        }
    }

    pub fn text_color(&self) -> Color {
        match self.choice {
            ThemeChoice::Dark => Color::rgb(0.9, 0.9, 0.9),
            ThemeChoice::Light => Color::rgb(0.1, 0.1, 0.1),
        }
    }

    /// Slider fill, same for both themes.
    pub fn accent_color(&self) -> Color {
        Color::rgb(0.3, 0.6, 0.9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_preference() {
        assert_eq!(Theme::from_preference(true).choice, ThemeChoice::Dark);
        assert_eq!(Theme::from_preference(false).choice, ThemeChoice::Light);
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for theme in [Theme::dark(), Theme::light()] {
            let bg = theme.background_color();
            let fg = theme.text_color();
            assert!((bg.r - fg.r).abs() > 0.5);
        }
    }
}
