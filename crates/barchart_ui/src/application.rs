use std::sync::Arc;

use web_time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowId};

use crate::constants::SCROLL_LINE_PIXELS;
use crate::element::Element;
use crate::error::UiError;
use crate::event::{Event, Modifiers, MouseButton};
use crate::layout::{Bounds, Size};
use crate::renderer::{Color, Renderer};
use crate::surface::Surface;
use crate::widget::EventResult;

/// Core application trait, in the Elm style: state, messages, and a view built
/// fresh from the state whenever it is needed.
pub trait Application {
    /// Messages produced by widgets and handled in [`update`](Application::update).
    type Message: 'static;

    /// Window title.
    fn title(&self) -> String;

    /// Apply a message to the application state.
    fn update(&mut self, message: Self::Message);

    /// Build the widget tree for the current state.
    fn view(&self) -> Element<Self::Message>;

    /// Called when the window's logical size changes.
    fn on_resize(&mut self, _width: f32, _height: f32) {}
}

/// Settings for running an application.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Window title (overrides Application::title when set)
    pub window_title: Option<String>,
    /// Initial window size in logical pixels
    pub window_size: (u32, u32),
    /// Minimum window size in logical pixels
    pub min_window_size: Option<(u32, u32)>,
    pub resizable: bool,
    /// Log filter applied when the runner initializes logging
    pub log_level: log::LevelFilter,
    /// Background color behind all widgets
    pub clear_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: None,
            window_size: (800, 600),
            min_window_size: None,
            resizable: true,
            log_level: log::LevelFilter::Info,
            clear_color: Color::rgb(0.1, 0.1, 0.12),
        }
    }
}

/// Create a window, initialize the GPU and run the event loop until the window closes.
pub fn run<A: Application + 'static>(app: A, settings: Settings) -> Result<(), UiError> {
    init_logging(settings.log_level);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut runner = Runner::new(app, settings);
    event_loop.run_app(&mut runner)?;

    match runner.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn init_logging(level: log::LevelFilter) {
    // A host may already have installed a logger; keep it
    if env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .is_err()
    {
        log::debug!("Logger already initialized");
    }
}

/// Window, surface and input bookkeeping around the application.
struct Runner<A: Application> {
    app: A,
    settings: Settings,
    window: Option<Arc<Window>>,
    surface: Option<Surface>,
    cursor: (f32, f32),
    modifiers: Modifiers,
    error: Option<UiError>,
}

impl<A: Application> Runner<A> {
    fn new(app: A, settings: Settings) -> Self {
        Self {
            app,
            settings,
            window: None,
            surface: None,
            cursor: (0.0, 0.0),
            modifiers: Modifiers::default(),
            error: None,
        }
    }

    fn scale_factor(&self) -> f32 {
        self.window
            .as_ref()
            .map_or(1.0, |w| w.scale_factor() as f32)
    }

    fn logical_size(&self) -> Size {
        match &self.window {
            Some(window) => {
                let size: LogicalSize<f32> = window.inner_size().to_logical(window.scale_factor());
                Size::new(size.width, size.height)
            }
            None => Size::ZERO,
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: UiError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    /// Build and lay out a fresh view for the current window size.
    fn build_view(&self) -> (Element<A::Message>, Bounds) {
        let size = self.logical_size();
        let mut root = self.app.view();
        root.layout(size);
        (root, Bounds::from_size(size))
    }

    /// Deliver an input event to a freshly built tree and apply any message.
    fn dispatch(&mut self, event: Event) {
        let (mut root, bounds) = self.build_view();
        match root.on_event(&event, bounds) {
            EventResult::Message(message) => {
                self.app.update(message);
                self.request_redraw();
            }
            EventResult::Redraw => self.request_redraw(),
            EventResult::None => {}
        }
    }

    /// Tick, then draw. Keeps requesting frames while anything animates.
    fn redraw(&mut self) -> Result<(), UiError> {
        let (mut root, bounds) = self.build_view();

        let mut again = false;
        match root.on_event(&Event::Tick { now: Instant::now() }, bounds) {
            EventResult::Message(message) => {
                self.app.update(message);
                (root, _) = self.build_view();
                again = true;
            }
            EventResult::Redraw => again = true,
            EventResult::None => {}
        }

        let mut renderer = Renderer::new();
        root.draw(&mut renderer, bounds);

        let scale = self.scale_factor();
        if let Some(surface) = self.surface.as_mut() {
            surface.present(&renderer, scale)?;
        }

        if again {
            self.request_redraw();
        }
        Ok(())
    }
}

impl<A: Application> ApplicationHandler for Runner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let title = self
            .settings
            .window_title
            .clone()
            .unwrap_or_else(|| self.app.title());
        let (width, height) = self.settings.window_size;
        let mut attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(self.settings.resizable);
        if let Some((min_w, min_h)) = self.settings.min_window_size {
            attributes = attributes.with_min_inner_size(LogicalSize::new(min_w, min_h));
        }

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        match pollster::block_on(Surface::new(window.clone(), self.settings.clear_color)) {
            Ok(surface) => self.surface = Some(surface),
            Err(e) => return self.fail(event_loop, e.into()),
        }

        log::info!("Window created");
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.resize(width, height);
                }
                let size = self.logical_size();
                self.app.on_resize(size.width, size.height);
                self.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e);
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                let state: ModifiersState = modifiers.state();
                self.modifiers = Modifiers {
                    shift: state.shift_key(),
                    ctrl: state.control_key(),
                    alt: state.alt_key(),
                    meta: state.super_key(),
                };
            }
            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.scale_factor();
                self.cursor = (position.x as f32 / scale, position.y as f32 / scale);
                self.dispatch(Event::MouseMove {
                    position: self.cursor,
                    modifiers: self.modifiers,
                });
            }
            WindowEvent::CursorLeft { .. } => self.dispatch(Event::CursorLeft),
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    winit::event::MouseButton::Middle => MouseButton::Middle,
                    winit::event::MouseButton::Other(n) => MouseButton::Other(n),
                    _ => return,
                };
                let event = match state {
                    ElementState::Pressed => Event::MousePress {
                        button,
                        position: self.cursor,
                        modifiers: self.modifiers,
                    },
                    ElementState::Released => Event::MouseRelease {
                        button,
                        position: self.cursor,
                        modifiers: self.modifiers,
                    },
                };
                self.dispatch(event);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(x, y) => {
                        (x * SCROLL_LINE_PIXELS, y * SCROLL_LINE_PIXELS)
                    }
                    MouseScrollDelta::PixelDelta(pos) => {
                        let scale = self.scale_factor();
                        (pos.x as f32 / scale, pos.y as f32 / scale)
                    }
                };
                self.dispatch(Event::MouseScroll {
                    delta,
                    position: self.cursor,
                    modifiers: self.modifiers,
                });
            }
            _ => {}
        }
    }
}
