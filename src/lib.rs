// SPDX-License-Identifier: MPL-2.0
//! `chat_heads` presents incoming-message banners ("chat heads") that slide
//! in, dismiss themselves after a delay and can be flung away with a drag.
//!
//! The presentation core in [`presentation`] is independent of any GUI
//! toolkit and driven entirely by explicit timestamps. [`ui`] and [`app`]
//! wire it into an iced window.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod presentation;
pub mod ui;
