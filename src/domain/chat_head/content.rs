// SPDX-License-Identifier: MPL-2.0
//! Content descriptor for a single chat head.
//!
//! A `ContentDescriptor` is everything the overlay needs to know about one
//! incoming message: who sent it, which conversation it belongs to, what
//! kind of message it is and a short display summary. It is produced by a
//! content resolver and never mutated afterwards.

use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from any string-like value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Opaque identifier of the message a chat head previews.
    ContentId
);
string_id!(
    /// Opaque identifier of a conversation.
    ConversationId
);
string_id!(
    /// Opaque identifier of a signed-in account.
    AccountId
);
string_id!(
    /// Opaque identifier of a user (message sender).
    UserId
);

/// Whether a conversation has exactly one other participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationKind {
    OneToOne,
    #[default]
    Group,
}

/// Kind of message being previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    #[default]
    Text,
    Image,
    /// A "ping" sent to get the recipient's attention.
    Knock,
    Video,
    Audio,
    File,
    Location,
}

impl MessageKind {
    /// Fixed preview text for non-text messages. `None` for text messages,
    /// whose preview is the message summary itself.
    #[must_use]
    pub fn preview_text(self) -> Option<&'static str> {
        match self {
            MessageKind::Text => None,
            MessageKind::Image => Some("shared a photo"),
            MessageKind::Knock => Some("pinged"),
            MessageKind::Video => Some("sent a video"),
            MessageKind::Audio => Some("sent an audio message"),
            MessageKind::File => Some("shared a file"),
            MessageKind::Location => Some("shared a location"),
        }
    }
}

/// The account a message was received on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountContext {
    /// Team name when the account belongs to a team.
    pub team_name: Option<String>,
    /// Whether this is the account currently selected in the app.
    pub is_active: bool,
}

impl AccountContext {
    /// Context for the currently selected personal account.
    #[must_use]
    pub fn active() -> Self {
        Self {
            team_name: None,
            is_active: true,
        }
    }
}

/// Immutable description of one incoming message preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDescriptor {
    id: ContentId,
    conversation_id: ConversationId,
    conversation_name: String,
    conversation_kind: ConversationKind,
    sender_id: UserId,
    sender_name: String,
    kind: MessageKind,
    summary: String,
    account: AccountContext,
    is_ephemeral: bool,
}

impl ContentDescriptor {
    /// Creates a text message descriptor in a group conversation on the
    /// active account. Use the `with_*` methods to adjust the rest.
    pub fn new(
        id: impl Into<ContentId>,
        conversation_id: impl Into<ConversationId>,
        conversation_name: impl Into<String>,
        sender_id: impl Into<UserId>,
        sender_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            conversation_id: conversation_id.into(),
            conversation_name: conversation_name.into(),
            conversation_kind: ConversationKind::default(),
            sender_id: sender_id.into(),
            sender_name: sender_name.into(),
            kind: MessageKind::default(),
            summary: String::new(),
            account: AccountContext::active(),
            is_ephemeral: false,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    #[must_use]
    pub fn with_conversation_kind(mut self, kind: ConversationKind) -> Self {
        self.conversation_kind = kind;
        self
    }

    #[must_use]
    pub fn with_account(mut self, account: AccountContext) -> Self {
        self.account = account;
        self
    }

    /// Marks the message as self-deleting; its text is rendered obscured.
    #[must_use]
    pub fn ephemeral(mut self, is_ephemeral: bool) -> Self {
        self.is_ephemeral = is_ephemeral;
        self
    }

    #[must_use]
    pub fn id(&self) -> &ContentId {
        &self.id
    }

    #[must_use]
    pub fn conversation_id(&self) -> &ConversationId {
        &self.conversation_id
    }

    #[must_use]
    pub fn conversation_name(&self) -> &str {
        &self.conversation_name
    }

    #[must_use]
    pub fn conversation_kind(&self) -> ConversationKind {
        self.conversation_kind
    }

    #[must_use]
    pub fn sender_id(&self) -> &UserId {
        &self.sender_id
    }

    #[must_use]
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    #[must_use]
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn account(&self) -> &AccountContext {
        &self.account
    }

    #[must_use]
    pub fn is_ephemeral(&self) -> bool {
        self.is_ephemeral
    }

    /// Banner title.
    ///
    /// Messages received on a background team account are labelled with the
    /// team so the user can tell which account they arrived on.
    #[must_use]
    pub fn title(&self) -> String {
        match (&self.account.team_name, self.account.is_active) {
            (Some(team), false) => match self.conversation_kind {
                ConversationKind::OneToOne => format!("in {team}"),
                ConversationKind::Group => format!("{} in {team}", self.conversation_name),
            },
            _ => self.conversation_name.clone(),
        }
    }

    /// Banner subtitle: the message text, prefixed with the sender name
    /// unless the title already makes the sender obvious.
    #[must_use]
    pub fn subtitle(&self) -> String {
        let text = self.message_text();
        if self.account.is_active && self.conversation_kind == ConversationKind::OneToOne {
            text.to_string()
        } else {
            format!("{}: {text}", self.sender_name)
        }
    }

    /// Preview text for the message body.
    #[must_use]
    pub fn message_text(&self) -> &str {
        self.kind.preview_text().unwrap_or(&self.summary)
    }

    /// Up to two uppercase initials of the sender, for the avatar placeholder.
    #[must_use]
    pub fn sender_initials(&self) -> String {
        self.sender_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> ContentDescriptor {
        ContentDescriptor::new("msg-1", "conv-1", "Design Team", "user-1", "ada lovelace")
            .with_summary("Lunch?")
    }

    #[test]
    fn title_is_conversation_name_on_active_account() {
        assert_eq!(descriptor().title(), "Design Team");
    }

    #[test]
    fn title_names_team_for_background_account() {
        let account = AccountContext {
            team_name: Some("Acme".into()),
            is_active: false,
        };
        let group = descriptor().with_account(account.clone());
        assert_eq!(group.title(), "Design Team in Acme");

        let one_to_one = descriptor()
            .with_account(account)
            .with_conversation_kind(ConversationKind::OneToOne);
        assert_eq!(one_to_one.title(), "in Acme");
    }

    #[test]
    fn subtitle_omits_sender_in_active_one_to_one() {
        let content = descriptor().with_conversation_kind(ConversationKind::OneToOne);
        assert_eq!(content.subtitle(), "Lunch?");
    }

    #[test]
    fn subtitle_prefixes_sender_in_groups() {
        assert_eq!(descriptor().subtitle(), "ada lovelace: Lunch?");
    }

    #[test]
    fn non_text_kinds_use_fixed_preview() {
        let content = descriptor().with_kind(MessageKind::Knock);
        assert_eq!(content.message_text(), "pinged");
        assert_eq!(content.subtitle(), "ada lovelace: pinged");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(descriptor().sender_initials(), "AL");
        let single = ContentDescriptor::new("m", "c", "C", "u", "bob");
        assert_eq!(single.sender_initials(), "B");
    }

    #[test]
    fn ids_display_their_value() {
        assert_eq!(ContentId::new("abc").to_string(), "abc");
        assert_eq!(ContentId::from("abc").as_str(), "abc");
    }
}
