// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`chat_head`] - Canvas overlay and pointer recognizer for the chat head
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod chat_head;
pub mod design_tokens;
