// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the workbench to the outside world: it owns the
//! loaded configuration, the HTTP client, the input storage and the text
//! editor widget state, and turns workbench effects into Iced tasks.

mod message;
pub mod paths;
pub mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::build::BuildClient;
use crate::config::{self, Config};
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::ui::workbench;
use iced::widget::text_editor;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const APP_TITLE: &str = "Decision Tree Builder";
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    config: Config,
    workbench: workbench::State,
    /// Widget state of the training data editor.
    editor: text_editor::Content,
    /// `None` when the HTTP client could not be created.
    client: Option<BuildClient>,
    storage: Box<dyn Storage>,
    clipboard: Option<arboard::Clipboard>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("server", &self.config.server.base_url())
            .field("loading", &self.workbench.is_loading())
            .field("has_image", &self.workbench.image().is_some())
            .finish()
    }
}

/// Builds the window settings.
///
/// Closing is intercepted so the input can be saved first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and saved input, then creates the workbench.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(url) = flags.server_url {
            config.server.base_url = Some(url);
        }

        let (file_storage, storage_warning) = FileStorage::open();
        let storage: Box<dyn Storage> = match file_storage {
            Some(storage) => {
                tracing::debug!(path = %storage.path().display(), "using file storage");
                Box::new(storage)
            }
            None => Box::new(MemoryStorage::default()),
        };

        let client = match BuildClient::new(&config.server) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::warn!("failed to create HTTP client: {err}");
                None
            }
        };

        let input = persistence::restore(storage.as_ref());
        let editor = text_editor::Content::with_text(&input.training_data);
        let mut workbench = workbench::State::new(input);

        for warning in [config_warning, storage_warning].into_iter().flatten() {
            workbench.warn(warning);
        }

        tracing::info!(server = %config.server.build_url(), "application started");

        let app = App {
            config,
            workbench,
            editor,
            client,
            storage,
            clipboard: None,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.workbench.notifications().has_notification(),
            ),
            subscription::create_autosave_subscription(
                self.config.persistence.autosave_interval(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Workbench(workbench::Message::EditorAction(action)) => {
                let is_edit = action.is_edit();
                self.editor.perform(action);
                if is_edit {
                    let text = self.editor.text();
                    self.dispatch(workbench::Message::TrainingDataChanged(text))
                } else {
                    Task::none()
                }
            }
            Message::Workbench(message) => self.dispatch(message),
            Message::WindowCloseRequested(id) => {
                if let Err(err) = persistence::save(self.storage.as_mut(), &self.workbench.input())
                {
                    tracing::warn!("failed to save input on exit: {err}");
                }
                window::close(id)
            }
        }
    }

    fn dispatch(&mut self, message: workbench::Message) -> Task<Message> {
        let effects = self.workbench.update(message);
        let mut ctx = update::EffectContext {
            client: self.client.as_ref(),
            storage: self.storage.as_mut(),
            editor: &mut self.editor,
            clipboard: &mut self.clipboard,
        };
        update::perform(&mut ctx, effects)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            workbench: &self.workbench,
            editor: &self.editor,
            server_url: self.config.server.base_url(),
        })
    }
}
