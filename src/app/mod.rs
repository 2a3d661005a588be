// SPDX-License-Identifier: MPL-2.0
//! Demo shell: a window hosting one banner.
//!
//! The `App` wires the presenter to iced. A frame tick advances both the
//! timer source and the animated sink; pointer events go through
//! [`gesture::PointerGesture`] and reach the presenter as taps and pan
//! samples; window resizes stand in for rotations.

pub mod artwork;
pub mod gesture;
mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::banner::{BannerContent, DeadlineTimers, Presenter};
use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::domain::banner::{DisplayDuration, HostMetrics};
use crate::ui::banner::{self as banner_ui, AnimatedFrame};
use crate::ui::design_tokens::{spacing, typography};
use gesture::{PointerGesture, PressRegion, Recognized};
use iced::widget::{button, text, Column, Container, Row, Stack, Text};
use iced::{alignment, window, Element, Length, Point, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

const DEFAULT_TITLE: &str = "Hello from Herald";
const REPORT_FILE: &str = "diagnostics-report.json";

/// Root application state.
pub struct App {
    config: Config,
    presenter: Presenter<DeadlineTimers, AnimatedFrame>,
    diagnostics: DiagnosticsCollector,
    gesture: PointerGesture,
    cursor: Point,
    window_width: f32,
    status_bar_hidden: bool,
    template: BannerContent,
    taps: Arc<AtomicUsize>,
    dismissals: Arc<AtomicUsize>,
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.presenter.phase())
            .field("window_width", &self.window_width)
            .field("status_bar_hidden", &self.status_bar_hidden)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and shows the first banner.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();

        let mut app = Self::from_parts(flags, config, Instant::now());
        if app.status.is_none() && config_warning.is_some() {
            app.status = Some(String::from("Configuration unreadable, using defaults"));
        }
        app.show_banner(Instant::now());

        (app, Task::none())
    }

    /// Builds the application without touching the filesystem for config.
    fn from_parts(flags: Flags, config: Config, now: Instant) -> Self {
        let diagnostics = DiagnosticsCollector::default();
        let mut presenter = Presenter::with_settings(
            DeadlineTimers::starting_at(now),
            AnimatedFrame::starting_at(now),
            config.banner_settings(),
        );
        presenter.set_diagnostics(diagnostics.handle());

        let taps = Arc::new(AtomicUsize::new(0));
        let duration = flags
            .duration_secs
            .map_or_else(|| config.default_content_duration(), DisplayDuration::from_secs_f64);

        let tap_counter = Arc::clone(&taps);
        let mut template = BannerContent::new(flags.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()))
            .display_duration(duration)
            .on_tap(move || {
                tap_counter.fetch_add(1, Ordering::SeqCst);
            });
        if let Some(subtitle) = flags.subtitle {
            template = template.subtitle(subtitle);
        }

        let mut status = None;
        if let Some(path) = flags.image {
            match artwork::load_banner_image(&path) {
                Ok(image) => template = template.image(image),
                Err(err) => status = Some(err.to_string()),
            }
        }

        let status_bar_hidden =
            flags.status_bar_hidden || config.display.status_bar_hidden.unwrap_or(false);

        Self {
            config,
            presenter,
            diagnostics,
            gesture: PointerGesture::new(),
            cursor: Point::ORIGIN,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            status_bar_hidden,
            template,
            taps,
            dismissals: Arc::new(AtomicUsize::new(0)),
            status,
        }
    }

    fn title(&self) -> String {
        String::from("Herald")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let banner_active = self.presenter.is_active() || self.presenter.sink().is_animating();
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(banner_active),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => self.sync_clock(now),
            Message::CursorMoved(position) => {
                self.cursor = position;
                if let Some(recognized) = self.gesture.move_to(position.y) {
                    self.route(recognized);
                }
            }
            Message::ButtonPressed => {
                let y = self.cursor.y;
                let sink = self.presenter.sink();
                let region = PressRegion::classify(sink.contains(y), sink.in_gesture_strip(y));
                self.gesture.press(y, region);
            }
            Message::ButtonReleased => {
                if let Some(recognized) = self.gesture.release(self.cursor.y) {
                    self.route(recognized);
                }
            }
            Message::CursorLeft => {
                if let Some(recognized) = self.gesture.cancel() {
                    self.route(recognized);
                }
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                self.presenter.orientation_changed(self.host());
            }
            Message::ShowBanner => self.show_banner(Instant::now()),
            Message::DismissBanner => self.presenter.dismiss(),
            Message::ToggleStatusBar => {
                self.status_bar_hidden = !self.status_bar_hidden;
                self.presenter.orientation_changed(self.host());
            }
            Message::ExportDiagnostics => self.export_diagnostics(),
        }
        self.diagnostics.process_pending();
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let counters = Text::new(format!(
            "Taps: {}    Dismissals: {}",
            self.taps.load(Ordering::SeqCst),
            self.dismissals.load(Ordering::SeqCst)
        ))
        .size(typography::BODY);

        let status_bar = if self.status_bar_hidden {
            "Status bar: hidden"
        } else {
            "Status bar: visible"
        };

        let controls = Row::new()
            .spacing(spacing::XS)
            .push(button(text("Show")).on_press(Message::ShowBanner))
            .push(button(text("Dismiss")).on_press(Message::DismissBanner))
            .push(button(text("Status bar")).on_press(Message::ToggleStatusBar))
            .push(button(text("Export")).on_press(Message::ExportDiagnostics));

        let mut panel = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(counters)
            .push(Text::new(status_bar).size(typography::BODY))
            .push(controls);
        if let Some(status) = &self.status {
            panel = panel.push(Text::new(status.as_str()).size(typography::BODY));
        }

        let body = Container::new(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(body)
            .push(banner_ui::view(self.presenter.sink()))
            .into()
    }

    fn host(&self) -> HostMetrics {
        HostMetrics::new(self.window_width, self.status_bar_hidden)
    }

    /// Brings the timer source and the animation clock to `now`.
    fn sync_clock(&mut self, now: Instant) {
        self.presenter.sink_mut().advance(now);
        self.presenter.tick(now);
    }

    fn show_banner(&mut self, now: Instant) {
        self.sync_clock(now);
        let dismissals = Arc::clone(&self.dismissals);
        self.presenter.present(
            self.template.clone(),
            self.host(),
            Some(Box::new(move || {
                dismissals.fetch_add(1, Ordering::SeqCst);
            })),
        );
    }

    fn route(&mut self, recognized: Recognized) {
        match recognized {
            Recognized::Tap => self.presenter.handle_tap(),
            Recognized::Pan(sample) => self.presenter.handle_pan(sample),
        }
    }

    fn export_diagnostics(&mut self) {
        self.diagnostics.process_pending();
        let Some(path) = self.report_path() else {
            self.status = Some(String::from("No config directory available"));
            return;
        };
        self.status = Some(match self.diagnostics.write_report(&path) {
            Ok(()) => format!("Diagnostics written to {}", path.display()),
            Err(err) => err.to_string(),
        });
    }

    /// Where the diagnostics report goes.
    #[must_use]
    pub fn report_path(&self) -> Option<PathBuf> {
        paths::get_app_config_dir().map(|dir| dir.join(REPORT_FILE))
    }

    /// Loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
