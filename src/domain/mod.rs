// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value types with no dependency on the presentation
//! framework.
//!
//! # Modules
//!
//! - [`chat_head`]: Content descriptors, presentation states and tuning
//!   newtypes ([`DismissDelay`](chat_head::DismissDelay),
//!   [`GestureThreshold`](chat_head::GestureThreshold),
//!   [`DampingFactor`](chat_head::DampingFactor), [`FlingWindow`](chat_head::FlingWindow))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))

pub mod chat_head;
pub mod diagnostics;
