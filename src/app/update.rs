// SPDX-License-Identifier: MPL-2.0
//! Execution of workbench side effects.
//!
//! The workbench only describes what should happen; this module turns each
//! [`Effect`] into an Iced [`Task`] or performs it in place when it is cheap
//! and synchronous.

use super::persistence;
use super::Message;
use crate::build::BuildClient;
use crate::error::{BuildError, Error};
use crate::export;
use crate::storage::Storage;
use crate::ui::log_panel::LOG_SCROLLABLE_ID;
use crate::ui::workbench::{self, Effect};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, text_editor, Id};
use iced::Task;
use std::path::PathBuf;

type SaveResult = Result<Option<PathBuf>, String>;

/// Mutable application resources touched by effects.
pub struct EffectContext<'a> {
    pub client: Option<&'a BuildClient>,
    pub storage: &'a mut dyn Storage,
    pub editor: &'a mut text_editor::Content,
    pub clipboard: &'a mut Option<arboard::Clipboard>,
}

/// Runs `effects` in order and batches the resulting tasks.
pub fn perform(ctx: &mut EffectContext<'_>, effects: Vec<Effect>) -> Task<Message> {
    let mut tasks = Vec::with_capacity(effects.len());
    for effect in effects {
        tasks.push(perform_one(ctx, effect));
    }
    Task::batch(tasks)
}

fn perform_one(ctx: &mut EffectContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::SendBuild { id, request } => {
            let on_finished =
                move |result| Message::Workbench(workbench::Message::BuildFinished { id, result });
            match ctx.client {
                Some(client) => {
                    let client = client.clone();
                    Task::perform(async move { client.submit(&request).await }, on_finished)
                }
                None => Task::done(on_finished(Err(BuildError::Transport(
                    "HTTP client unavailable".to_string(),
                )))),
            }
        }
        Effect::CopyToClipboard(text) => {
            let result = copy_to_clipboard(ctx.clipboard, text).map_err(|err| err.to_string());
            Task::done(Message::Workbench(workbench::Message::LogsCopied(result)))
        }
        Effect::SaveLogFile {
            file_name,
            contents,
        } => save_with_dialog(
            file_name,
            "Text file",
            "txt",
            contents.into_bytes(),
            workbench::Message::LogsSaved,
        ),
        Effect::SaveImage { file_name, bytes } => save_with_dialog(
            file_name,
            "PNG image",
            "png",
            bytes,
            workbench::Message::ImageSaved,
        ),
        Effect::PersistInput(input) => {
            if let Err(err) = persistence::save(ctx.storage, &input) {
                tracing::warn!("failed to save input: {err}");
            }
            Task::none()
        }
        Effect::ReplaceTrainingData(text) => {
            *ctx.editor = text_editor::Content::with_text(&text);
            Task::none()
        }
        Effect::ScrollLogsToEnd => {
            operation::snap_to(Id::new(LOG_SCROLLABLE_ID), RelativeOffset { x: 0.0, y: 1.0 })
        }
    }
}

/// Writes `text` to the system clipboard.
///
/// The clipboard handle is kept alive afterwards; on some platforms the
/// contents vanish when the owning handle is dropped.
fn copy_to_clipboard(
    clipboard: &mut Option<arboard::Clipboard>,
    text: String,
) -> Result<(), Error> {
    if clipboard.is_none() {
        *clipboard = Some(arboard::Clipboard::new()?);
    }
    if let Some(clipboard) = clipboard {
        clipboard.set_text(text)?;
    }
    Ok(())
}

/// Asks for a destination with a save dialog, then writes `bytes` there.
///
/// Cancelling the dialog yields `Ok(None)`.
fn save_with_dialog(
    file_name: String,
    filter_name: &'static str,
    extension: &'static str,
    bytes: Vec<u8>,
    on_done: fn(SaveResult) -> workbench::Message,
) -> Task<Message> {
    Task::perform(
        async move {
            let dialog = rfd::AsyncFileDialog::new()
                .set_file_name(&file_name)
                .set_directory(export::default_export_directory())
                .add_filter(filter_name, &[extension]);

            let Some(handle) = dialog.save_file().await else {
                return Ok(None);
            };
            let path = handle.path().to_path_buf();

            tokio::task::spawn_blocking(move || {
                export::write_atomic(&path, &bytes)
                    .map(|()| Some(path))
                    .map_err(|err| Error::from(err).to_string())
            })
            .await
            .map_err(|err| err.to_string())?
        },
        move |result| Message::Workbench(on_done(result)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::persistence::{InputState, PARAMETERS_KEY, TRAINING_DATA_KEY};
    use crate::storage::MemoryStorage;

    #[test]
    fn persist_effect_writes_both_keys() {
        let mut storage = MemoryStorage::default();
        let mut editor = text_editor::Content::new();
        let mut clipboard = None;
        let mut ctx = EffectContext {
            client: None,
            storage: &mut storage,
            editor: &mut editor,
            clipboard: &mut clipboard,
        };

        let _ = perform(
            &mut ctx,
            vec![Effect::PersistInput(InputState {
                parameters: "A,B".into(),
                training_data: "1,2".into(),
            })],
        );

        assert_eq!(storage.get_item(PARAMETERS_KEY).as_deref(), Some("A,B"));
        assert_eq!(storage.get_item(TRAINING_DATA_KEY).as_deref(), Some("1,2"));
    }
}
