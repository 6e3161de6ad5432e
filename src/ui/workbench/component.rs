// SPDX-License-Identifier: MPL-2.0
//! Workbench state machine.
//!
//! Owns the user input, the table preview, the build log, the current tree
//! image with its viewport, and the toast slot. [`State::update`] applies a
//! [`Message`] and returns the side effects the application must run; no
//! I/O happens here.

use super::example::{EXAMPLE_PARAMETERS, EXAMPLE_TRAINING_DATA};
use super::shortcuts::Shortcut;
use crate::app::persistence::InputState;
use crate::build::{BuildOutcome, BuildRequest, TreeImage, TreeMetrics};
use crate::error::BuildError;
use crate::export;
use crate::ui::log_panel::{LogPanel, LogSeverity};
use crate::ui::notifications::{self, Notification, NotificationMessage};
use crate::ui::preview::Preview;
use crate::ui::state::ViewportState;
use iced::widget::text_editor;
use iced::Point;
use std::path::PathBuf;

pub const MSG_INITIALIZED: &str = "Application initialized successfully.";
pub const MSG_BUILD_EMPTY_TOAST: &str = "Please fill in the parameters and dataset first.";
pub const MSG_BUILD_SENDING: &str = "Sending data to the server...";
pub const MSG_BUILD_LOADING: &str = "Building the decision tree...";
pub const MSG_BUILD_IN_PROGRESS: &str = "A build is already in progress.";
pub const MSG_BUILD_UPDATED: &str = "Tree visualization updated successfully.";
pub const MSG_BUILD_SUCCESS_TOAST: &str = "Decision tree built successfully!";
pub const MSG_LOGS_CLEARED_LOG: &str = "Logs cleared.";
pub const MSG_LOGS_CLEARED_TOAST: &str = "Build logs cleared";
pub const MSG_LOGS_COPIED: &str = "Logs copied to clipboard";
pub const MSG_LOGS_COPY_FAILED: &str = "Failed to copy logs";
pub const MSG_LOGS_DOWNLOADED: &str = "Logs downloaded successfully";
pub const MSG_LOGS_DOWNLOAD_FAILED: &str = "Failed to download logs";
pub const MSG_EXAMPLE_LOADED_LOG: &str = "Example data loaded.";
pub const MSG_EXAMPLE_LOADED_TOAST: &str = "Example data loaded successfully";
pub const MSG_IMAGE_DOWNLOADED: &str = "Tree image downloaded!";
pub const MSG_IMAGE_UNAVAILABLE: &str = "Tree visualization is not available for download.";
pub const MSG_IMAGE_DOWNLOAD_FAILED: &str = "Failed to download tree image";

/// Identifies one build attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildId(u64);

/// Every input the workbench reacts to.
#[derive(Debug, Clone)]
pub enum Message {
    ParametersChanged(String),
    /// Raw edit of the training data widget. The application applies it to
    /// the editor content and reports the result as `TrainingDataChanged`.
    EditorAction(text_editor::Action),
    TrainingDataChanged(String),
    BuildRequested,
    BuildFinished {
        id: BuildId,
        result: Result<BuildOutcome, BuildError>,
    },
    LoadExample,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Left press over the drawn tree image, in window coordinates.
    ImagePressed(Point),
    PointerMoved(Point),
    PointerReleased,
    /// The pointer left the window.
    PointerLeft,
    Shortcut(Shortcut),
    ClearLogs,
    CopyLogs,
    /// Clipboard write finished; the error is the clipboard's message.
    LogsCopied(Result<(), String>),
    DownloadLogs,
    /// Log file written; `None` when the user cancelled the dialog.
    LogsSaved(Result<Option<PathBuf>, String>),
    DownloadImage,
    /// Image file written; `None` when the user cancelled the dialog.
    ImageSaved(Result<Option<PathBuf>, String>),
    AutosaveTick,
    Notification(NotificationMessage),
}

/// Side effects requested by [`State::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Post `request` to the build service and report back with `id`.
    SendBuild { id: BuildId, request: BuildRequest },
    CopyToClipboard(String),
    SaveLogFile { file_name: String, contents: String },
    SaveImage { file_name: String, bytes: Vec<u8> },
    PersistInput(InputState),
    /// The training data changed programmatically; refresh the editor widget.
    ReplaceTrainingData(String),
    /// New log entries were added; scroll the log to the newest one.
    ScrollLogsToEnd,
}

/// Application state of the workbench screen.
#[derive(Debug, Default)]
pub struct State {
    parameters: String,
    training_data: String,
    preview: Preview,
    logs: LogPanel,
    logs_changed: bool,
    notifications: notifications::Manager,
    viewport: ViewportState,
    image: Option<TreeImage>,
    metrics: Option<TreeMetrics>,
    pending_build: Option<BuildId>,
    next_build_id: u64,
}

impl State {
    /// Creates the workbench with restored input and the startup log entry.
    #[must_use]
    pub fn new(input: InputState) -> Self {
        let mut state = Self {
            preview: Preview::parse(&input.parameters, &input.training_data),
            parameters: input.parameters,
            training_data: input.training_data,
            ..Self::default()
        };
        state.log(MSG_INITIALIZED, LogSeverity::Success);
        state.logs_changed = false;
        state
    }

    /// Applies `message` and returns the effects to run.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = match message {
            Message::ParametersChanged(text) => {
                self.parameters = text;
                self.refresh_preview();
                Vec::new()
            }
            Message::EditorAction(_) => Vec::new(),
            Message::TrainingDataChanged(text) => {
                self.training_data = text;
                self.refresh_preview();
                Vec::new()
            }
            Message::BuildRequested => self.submit_build(),
            Message::BuildFinished { id, result } => self.finish_build(id, result),
            Message::LoadExample => self.load_example(),
            Message::ZoomIn => {
                self.viewport.zoom_in();
                Vec::new()
            }
            Message::ZoomOut => {
                self.viewport.zoom_out();
                Vec::new()
            }
            Message::ResetZoom => {
                self.viewport.reset();
                Vec::new()
            }
            Message::ImagePressed(position) => {
                if self.image.is_some() {
                    self.viewport.press(position);
                }
                Vec::new()
            }
            Message::PointerMoved(position) => {
                self.viewport.move_to(position);
                Vec::new()
            }
            Message::PointerReleased | Message::PointerLeft => {
                self.viewport.release();
                Vec::new()
            }
            Message::Shortcut(shortcut) => self.apply_shortcut(shortcut),
            Message::ClearLogs => {
                self.clear_logs();
                Vec::new()
            }
            Message::CopyLogs => vec![Effect::CopyToClipboard(self.logs.export_text())],
            Message::LogsCopied(result) => {
                match result {
                    Ok(()) => self.notify(Notification::success(MSG_LOGS_COPIED)),
                    Err(err) => {
                        tracing::warn!("failed to copy logs: {err}");
                        self.notify(Notification::error(MSG_LOGS_COPY_FAILED));
                    }
                }
                Vec::new()
            }
            Message::DownloadLogs => vec![Effect::SaveLogFile {
                file_name: export::log_file_name(chrono::Local::now().date_naive()),
                contents: self.logs.export_text(),
            }],
            Message::LogsSaved(result) => {
                self.report_save(result, MSG_LOGS_DOWNLOADED, MSG_LOGS_DOWNLOAD_FAILED);
                Vec::new()
            }
            Message::DownloadImage => self.download_image(),
            Message::ImageSaved(result) => {
                self.report_save(result, MSG_IMAGE_DOWNLOADED, MSG_IMAGE_DOWNLOAD_FAILED);
                Vec::new()
            }
            Message::AutosaveTick => vec![Effect::PersistInput(self.input())],
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Vec::new()
            }
        };

        if std::mem::take(&mut self.logs_changed) {
            effects.push(Effect::ScrollLogsToEnd);
        }
        effects
    }

    /// Validates the input and starts a build.
    ///
    /// Ignored with an info toast while another build is in flight.
    fn submit_build(&mut self) -> Vec<Effect> {
        if self.pending_build.is_some() {
            self.notify(Notification::info(MSG_BUILD_IN_PROGRESS));
            return Vec::new();
        }

        let request = match self.build_request() {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!("build rejected: {err}");
                self.log(format!("Build failed: {}", err.message()), LogSeverity::Error);
                self.notify(Notification::error(MSG_BUILD_EMPTY_TOAST));
                return Vec::new();
            }
        };

        self.next_build_id += 1;
        let id = BuildId(self.next_build_id);
        self.pending_build = Some(id);
        self.log(MSG_BUILD_SENDING, LogSeverity::Info);
        tracing::info!(build = id.0, "build started");

        vec![Effect::SendBuild { id, request }]
    }

    /// Request for the current input. Both fields must hold more than
    /// whitespace.
    fn build_request(&self) -> Result<BuildRequest, BuildError> {
        if self.parameters.trim().is_empty() || self.training_data.trim().is_empty() {
            return Err(BuildError::Validation);
        }
        Ok(BuildRequest {
            parameters: self.parameters.clone(),
            data: self.training_data.clone(),
        })
    }

    /// Settles build `id`. Completions of builds other than the pending one
    /// are dropped.
    fn finish_build(
        &mut self,
        id: BuildId,
        result: Result<BuildOutcome, BuildError>,
    ) -> Vec<Effect> {
        if self.pending_build != Some(id) {
            tracing::debug!(build = id.0, "dropping stale build completion");
            return Vec::new();
        }
        self.pending_build = None;

        match result {
            Ok(outcome) => {
                tracing::info!(build = id.0, "build finished");
                for line in outcome.logs {
                    self.log(line, LogSeverity::Info);
                }
                if let Some(metrics) = &outcome.metrics {
                    self.log(metrics.summary(), LogSeverity::Info);
                }
                self.image = Some(outcome.image);
                self.metrics = outcome.metrics;
                self.viewport.reset();
                self.log(MSG_BUILD_UPDATED, LogSeverity::Success);
                self.notify(Notification::success(MSG_BUILD_SUCCESS_TOAST));
            }
            Err(err) => {
                tracing::warn!(build = id.0, "build failed: {err}");
                self.log(
                    format!("Critical error while building tree: {}", err.message()),
                    LogSeverity::Error,
                );
                self.notify(Notification::error(format!("Error: {}", err.message())));
            }
        }
        Vec::new()
    }

    /// Empties the log, leaving a single entry that says so.
    fn clear_logs(&mut self) {
        self.logs.clear();
        self.log(MSG_LOGS_CLEARED_LOG, LogSeverity::Info);
        self.notify(Notification::info(MSG_LOGS_CLEARED_TOAST));
    }

    /// Replaces both fields with the weather dataset.
    fn load_example(&mut self) -> Vec<Effect> {
        self.parameters = EXAMPLE_PARAMETERS.to_string();
        self.training_data = EXAMPLE_TRAINING_DATA.to_string();
        self.refresh_preview();
        self.log(MSG_EXAMPLE_LOADED_LOG, LogSeverity::Info);
        self.notify(Notification::success(MSG_EXAMPLE_LOADED_TOAST));
        vec![Effect::ReplaceTrainingData(self.training_data.clone())]
    }

    /// Shows a warning toast, e.g. for an unreadable settings file.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.notify(Notification::warning(message));
    }

    fn apply_shortcut(&mut self, shortcut: Shortcut) -> Vec<Effect> {
        match shortcut {
            Shortcut::Build => self.submit_build(),
            Shortcut::LoadExample => self.load_example(),
            Shortcut::ZoomIn => {
                self.viewport.zoom_in();
                Vec::new()
            }
            Shortcut::ZoomOut => {
                self.viewport.zoom_out();
                Vec::new()
            }
            Shortcut::ResetZoom => {
                self.viewport.reset();
                Vec::new()
            }
        }
    }

    fn download_image(&mut self) -> Vec<Effect> {
        match &self.image {
            Some(image) => vec![Effect::SaveImage {
                file_name: export::IMAGE_FILE_NAME.to_string(),
                bytes: image.bytes().to_vec(),
            }],
            None => {
                self.notify(Notification::error(MSG_IMAGE_UNAVAILABLE));
                Vec::new()
            }
        }
    }

    fn report_save(
        &mut self,
        result: Result<Option<PathBuf>, String>,
        success: &str,
        failure: &str,
    ) {
        match result {
            Ok(Some(path)) => {
                tracing::info!(path = %path.display(), "file saved");
                self.notify(Notification::success(success));
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("failed to save file: {err}");
                self.notify(Notification::error(failure));
            }
        }
    }

    fn refresh_preview(&mut self) {
        self.preview = Preview::parse(&self.parameters, &self.training_data);
    }

    fn log(&mut self, message: impl Into<String>, severity: LogSeverity) {
        self.logs.append(message, severity);
        self.logs_changed = true;
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    // Accessors

    #[must_use]
    pub fn parameters(&self) -> &str {
        &self.parameters
    }

    #[must_use]
    pub fn training_data(&self) -> &str {
        &self.training_data
    }

    /// Current input as persisted.
    #[must_use]
    pub fn input(&self) -> InputState {
        InputState {
            parameters: self.parameters.clone(),
            training_data: self.training_data.clone(),
        }
    }

    #[must_use]
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    #[must_use]
    pub fn logs(&self) -> &LogPanel {
        &self.logs
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn image(&self) -> Option<&TreeImage> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn metrics(&self) -> Option<&TreeMetrics> {
        self.metrics.as_ref()
    }

    /// Whether a build is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending_build.is_some()
    }

    /// Text of the loading banner while a build is in flight.
    #[must_use]
    pub fn loading_message(&self) -> Option<&'static str> {
        self.pending_build.map(|_| MSG_BUILD_LOADING)
    }
}
