// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo host.

use crate::domain::chat_head::ConversationId;
use crate::ui::chat_head;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation frame while a chat head is on screen.
    Tick(Instant),
    /// Deliver the next sample notification.
    SimulateIncoming,
    OpenConversation(ConversationId),
    CloseConversation,
    /// Delete a conversation so pending notifications for it stop resolving.
    DeleteConversation(ConversationId),
    /// Pointer input captured by the chat head overlay.
    ChatHead(chat_head::Event),
    WindowResized(Size),
    ExportDiagnostics,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CHAT_HEADS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Where to write the diagnostics report.
    pub export_diagnostics: Option<PathBuf>,
}
