// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::workbench::{self, ViewEnv};
use iced::widget::{text_editor, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub workbench: &'a workbench::State,
    pub editor: &'a text_editor::Content,
    pub server_url: &'a str,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = workbench::view(
        ctx.workbench,
        ViewEnv {
            editor: ctx.editor,
            server_url: ctx.server_url,
        },
    )
    .map(Message::Workbench);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
