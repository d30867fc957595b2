// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo host.
//!
//! A conversation list on the left, the open conversation on the right, and
//! the chat head overlay stacked on top of both.

use super::{Message, Navigator};
use crate::domain::chat_head::ConversationId;
use crate::presentation::{Controller, Directory};
use crate::ui::chat_head::ChatHeadOverlay;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::alignment::Vertical;
use iced::widget::{button, container, rule, text, Canvas, Column, Row, Scrollable, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub controller: &'a Controller<Navigator>,
    pub directory: &'a Directory,
    pub status: Option<&'a str>,
    pub can_export: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = Row::new()
        .push(sidebar(&ctx))
        .push(conversation_pane(&ctx))
        .width(Length::Fill)
        .height(Length::Fill);

    let controller = ctx.controller;
    let overlay = ChatHeadOverlay::new(
        controller.banner(),
        controller.settings().insets.top,
        controller.banner_width(),
        Message::ChatHead,
    );

    Stack::new()
        .push(base)
        .push(Canvas::new(overlay).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn sidebar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let open = ctx.controller.delegate().open_conversation();

    let mut list = Column::new().spacing(spacing::XXS);
    for (id, name) in ctx.directory.conversations() {
        list = list.push(conversation_button(id, name, open == Some(id)));
    }

    let simulate = button(text("Simulate incoming").size(typography::BODY))
        .on_press(Message::SimulateIncoming)
        .padding(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(button::primary);

    let mut footer = Column::new().spacing(spacing::XS).push(simulate);
    if ctx.can_export {
        footer = footer.push(
            button(text("Export diagnostics").size(typography::BODY))
                .on_press(Message::ExportDiagnostics)
                .padding(spacing::XS)
                .width(Length::Fill)
                .style(button::secondary),
        );
    }
    footer = footer.push(
        text(format!("State: {}", ctx.controller.state())).size(typography::CAPTION),
    );
    if let Some(status) = ctx.status {
        footer = footer.push(text(status).size(typography::CAPTION));
    }

    let layout = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .push(text("Conversations").size(typography::TITLE_MD))
        .push(rule::horizontal(1))
        .push(Scrollable::new(list).height(Length::Fill))
        .push(footer);

    container(layout)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .into()
}

fn conversation_button<'a>(id: &ConversationId, name: &'a str, active: bool) -> Element<'a, Message> {
    button(text(name).size(typography::BODY))
        .on_press(Message::OpenConversation(id.clone()))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(if active {
            button::primary
        } else {
            button::secondary
        })
        .into()
}

fn conversation_pane<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let open = ctx.controller.delegate().open_conversation();
    let content: Element<'a, Message> = match open.and_then(|id| ctx.directory.conversation_name(id).map(|name| (id, name))) {
        Some((id, name)) => Column::new()
            .spacing(spacing::SM)
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(text(name).size(typography::TITLE_MD).width(Length::Fill))
                    .push(
                        button(text("Close").size(typography::BODY))
                            .on_press(Message::CloseConversation)
                            .style(button::secondary),
                    )
                    .push(
                        button(text("Delete").size(typography::BODY))
                            .on_press(Message::DeleteConversation(id.clone()))
                            .style(button::danger),
                    ),
            )
            .push(rule::horizontal(1))
            .push(
                text("Chat heads for this conversation are suppressed while it is open.")
                    .size(typography::CAPTION),
            )
            .into(),
        None => text("Select a conversation, or simulate an incoming message.")
            .size(typography::BODY)
            .into(),
    };

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
