/// Demo entry point
fn main() {
    use barchart::ui_constants::window;
    use barchart::{DemoApp, DemoConfig};
    use barchart_ui::{Settings, run};

    // Logging is not up yet; the runner installs it from the loaded settings
    let config = DemoConfig::load().unwrap_or_else(|e| {
        eprintln!("Config error, using defaults: {}", e);
        DemoConfig::default()
    });

    let app = DemoApp::new(&config);
    let settings = Settings {
        window_title: Some(window::TITLE.to_string()),
        window_size: (config.window.width, config.window.height),
        min_window_size: Some(window::MIN_SIZE),
        resizable: true,
        log_level: config.preferences.log_level.to_level_filter(),
        clear_color: app.theme().background_color(),
    };

    if let Err(e) = run(app, settings) {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}
