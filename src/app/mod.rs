// SPDX-License-Identifier: MPL-2.0
//! Demo host: a small messenger window that shows chat heads for incoming
//! messages.
//!
//! The `App` struct owns the presentation controller, the message directory
//! it resolves notifications against and the diagnostics collector, and
//! translates iced messages into controller inputs.

mod message;
mod navigator;
mod sample;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use navigator::Navigator;

use crate::config;
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::presentation::{Controller, Directory, PresentationSettings, RawNotification};
use crate::ui::chat_head;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = config::DEFAULT_CONTAINER_WIDTH;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Root iced application state.
pub struct App {
    controller: Controller<Navigator>,
    directory: Directory,
    notifications: Vec<RawNotification>,
    next_notification: usize,
    diagnostics: DiagnosticsCollector,
    export_path: Option<PathBuf>,
    /// Last user-facing status line.
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.controller.state())
            .field("next_notification", &self.next_notification)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be `Fn`; flags are consumed once.
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
    fn new(flags: Flags) -> (Self, Task<Message>) {
        config::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();

        let settings = PresentationSettings::from_config(&config)
            .with_container_width(WINDOW_DEFAULT_WIDTH);
        let diagnostics =
            DiagnosticsCollector::new(BufferCapacity::new(config.diagnostics.buffer_capacity));
        let controller =
            Controller::new(settings, Navigator::default()).with_diagnostics(diagnostics.handle());
        let directory = sample::directory();

        let app = App {
            controller,
            notifications: directory.notifications(),
            directory,
            next_notification: 0,
            diagnostics,
            export_path: flags.export_diagnostics,
            status: config_warning,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self
            .controller
            .delegate()
            .open_conversation()
            .and_then(|id| self.directory.conversation_name(id))
        {
            Some(name) => format!("{name} - Chat Heads"),
            None => "Chat Heads".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.controller.state()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                self.controller.tick(now);
            }
            Message::SimulateIncoming => self.simulate_incoming(Instant::now()),
            Message::OpenConversation(id) => {
                self.controller.delegate_mut().open(id);
            }
            Message::CloseConversation => {
                self.controller.delegate_mut().close();
            }
            Message::DeleteConversation(id) => {
                if self.controller.delegate().open_conversation() == Some(&id) {
                    self.controller.delegate_mut().close();
                }
                self.directory.remove_conversation(&id);
            }
            Message::ChatHead(event) => self.handle_chat_head(event, Instant::now()),
            Message::WindowResized(size) => {
                self.controller.set_container_width(size.width);
            }
            Message::ExportDiagnostics => self.export_diagnostics(),
        }
        self.diagnostics.process_pending();
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            controller: &self.controller,
            directory: &self.directory,
            status: self.status.as_deref(),
            can_export: self.export_path.is_some(),
        })
    }

    /// Feeds the next sample notification to the controller, cycling through
    /// the list.
    fn simulate_incoming(&mut self, now: Instant) {
        if self.notifications.is_empty() {
            return;
        }
        let notification = &self.notifications[self.next_notification % self.notifications.len()];
        self.next_notification += 1;

        let accepted =
            self.controller
                .try_display_notification(notification, &self.directory, now);
        self.status = Some(if accepted {
            format!("Showing {}", notification.message_id)
        } else {
            format!("Dropped {}", notification.message_id)
        });
    }

    fn handle_chat_head(&mut self, event: chat_head::Event, now: Instant) {
        match event {
            chat_head::Event::Gesture(banner, gesture) => {
                self.controller.report_gesture(banner, gesture, now);
            }
            chat_head::Event::Tap(banner) => {
                if !self.controller.tap(banner, now) {
                    return;
                }
                let Some(selected) = self.controller.delegate_mut().take_selection() else {
                    return;
                };
                if let Some(conversation) = self.directory.conversation_of(&selected).cloned() {
                    self.controller.delegate_mut().open(conversation);
                }
            }
        }
    }

    fn export_diagnostics(&mut self) {
        let Some(path) = self.export_path.clone() else {
            return;
        };
        self.diagnostics.process_pending();
        let result = self
            .diagnostics
            .export_json()
            .map_err(|err| err.to_string())
            .and_then(|json| std::fs::write(&path, json).map_err(|err| err.to_string()));
        match result {
            Ok(()) => self.status = Some(format!("Diagnostics written to {}", path.display())),
            Err(err) => {
                eprintln!("Failed to export diagnostics to {}: {err}", path.display());
                self.status = Some("Diagnostics export failed".to_string());
            }
        }
    }
}
