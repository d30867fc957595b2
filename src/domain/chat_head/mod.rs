// SPDX-License-Identifier: MPL-2.0
//! Chat head domain types.
//!
//! Value objects describing an incoming-message banner and its presentation
//! state, independent of any presentation framework.

pub mod content;
pub mod newtypes;
pub mod state;

pub use content::{
    AccountContext, AccountId, ContentDescriptor, ContentId, ConversationId, ConversationKind,
    MessageKind, UserId,
};
pub use newtypes::{DampingFactor, DismissDelay, FlingWindow, GestureThreshold};
pub use state::PresentationState;
