// SPDX-License-Identifier: MPL-2.0
//! Navigation collaborator for the demo host.

use crate::domain::chat_head::{ContentDescriptor, ContentId, ConversationId};
use crate::presentation::Delegate;

/// Tracks the open conversation and the last chat head selection.
#[derive(Debug, Default)]
pub struct Navigator {
    open: Option<ConversationId>,
    selected: Option<ContentId>,
}

impl Navigator {
    #[must_use]
    pub fn open_conversation(&self) -> Option<&ConversationId> {
        self.open.as_ref()
    }

    pub fn open(&mut self, id: ConversationId) {
        self.open = Some(id);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Takes the selection reported since the last call.
    pub fn take_selection(&mut self) -> Option<ContentId> {
        self.selected.take()
    }
}

impl Delegate for Navigator {
    /// Messages for the conversation already on screen get no chat head.
    fn should_display(&mut self, content: &ContentDescriptor) -> bool {
        self.open.as_ref() != Some(content.conversation_id())
    }

    fn did_select(&mut self, content_id: &ContentId) {
        self.selected = Some(content_id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_conversation_is_suppressed() {
        let mut navigator = Navigator::default();
        let content = ContentDescriptor::new("m", "c-1", "Design", "u", "Ada");
        assert!(navigator.should_display(&content));

        navigator.open(ConversationId::new("c-1"));
        assert!(!navigator.should_display(&content));

        navigator.open(ConversationId::new("c-2"));
        assert!(navigator.should_display(&content));
    }

    #[test]
    fn selection_is_taken_once() {
        let mut navigator = Navigator::default();
        navigator.did_select(&ContentId::new("m-1"));
        assert_eq!(navigator.take_selection(), Some(ContentId::new("m-1")));
        assert_eq!(navigator.take_selection(), None);
    }
}
