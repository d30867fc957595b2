// SPDX-License-Identifier: MPL-2.0
//! Content resolution: turning a platform notification into a descriptor.
//!
//! Resolution is a collaborator of the controller, never something it does
//! by reaching into global session state. `Directory` is a simple in-memory
//! implementation used by the demo host and tests.

use crate::domain::chat_head::{
    AccountContext, AccountId, ContentDescriptor, ContentId, ConversationId, ConversationKind,
    MessageKind, UserId,
};
use std::collections::HashMap;

/// Payload of a platform notification about a new message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawNotification {
    pub account_id: AccountId,
    pub conversation_id: ConversationId,
    pub message_id: ContentId,
}

impl RawNotification {
    pub fn new(
        account_id: impl Into<AccountId>,
        conversation_id: impl Into<ConversationId>,
        message_id: impl Into<ContentId>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            conversation_id: conversation_id.into(),
            message_id: message_id.into(),
        }
    }
}

/// Resolves notifications into displayable content.
pub trait ContentResolver {
    /// Returns `None` when the notification no longer refers to anything
    /// displayable (conversation deleted, sender unknown, ...).
    fn resolve(&self, notification: &RawNotification) -> Option<ContentDescriptor>;
}

#[derive(Debug, Clone)]
struct Account {
    team_name: Option<String>,
}

#[derive(Debug, Clone)]
struct Conversation {
    account_id: AccountId,
    name: String,
    kind: ConversationKind,
}

#[derive(Debug, Clone)]
struct StoredMessage {
    conversation_id: ConversationId,
    sender_id: UserId,
    kind: MessageKind,
    text: String,
    is_ephemeral: bool,
}

/// In-memory store of accounts, users, conversations and messages.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    accounts: HashMap<AccountId, Account>,
    selected_account: Option<AccountId>,
    users: HashMap<UserId, String>,
    conversations: HashMap<ConversationId, Conversation>,
    messages: HashMap<ContentId, StoredMessage>,
}

impl Directory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_account(&mut self, id: impl Into<AccountId>, team_name: Option<&str>) {
        self.accounts.insert(
            id.into(),
            Account {
                team_name: team_name.map(str::to_owned),
            },
        );
    }

    /// Marks `id` as the account the user is currently looking at. Messages
    /// from every other account are labelled with their team.
    pub fn select_account(&mut self, id: impl Into<AccountId>) {
        self.selected_account = Some(id.into());
    }

    pub fn add_user(&mut self, id: impl Into<UserId>, display_name: impl Into<String>) {
        self.users.insert(id.into(), display_name.into());
    }

    pub fn add_conversation(
        &mut self,
        account_id: impl Into<AccountId>,
        id: impl Into<ConversationId>,
        name: impl Into<String>,
        kind: ConversationKind,
    ) {
        self.conversations.insert(
            id.into(),
            Conversation {
                account_id: account_id.into(),
                name: name.into(),
                kind,
            },
        );
    }

    /// Removes a conversation; notifications about it stop resolving.
    pub fn remove_conversation(&mut self, id: &ConversationId) {
        self.conversations.remove(id);
    }

    pub fn add_message(
        &mut self,
        conversation_id: impl Into<ConversationId>,
        id: impl Into<ContentId>,
        sender_id: impl Into<UserId>,
        kind: MessageKind,
        text: impl Into<String>,
    ) {
        self.messages.insert(
            id.into(),
            StoredMessage {
                conversation_id: conversation_id.into(),
                sender_id: sender_id.into(),
                kind,
                text: text.into(),
                is_ephemeral: false,
            },
        );
    }

    /// Marks a stored message as self-deleting.
    pub fn set_ephemeral(&mut self, id: &ContentId, is_ephemeral: bool) {
        if let Some(message) = self.messages.get_mut(id) {
            message.is_ephemeral = is_ephemeral;
        }
    }

    /// Notification payloads for every stored message, in id order.
    pub fn notifications(&self) -> Vec<RawNotification> {
        let mut notes: Vec<RawNotification> = self
            .messages
            .iter()
            .filter_map(|(id, message)| {
                let conversation = self.conversations.get(&message.conversation_id)?;
                Some(RawNotification {
                    account_id: conversation.account_id.clone(),
                    conversation_id: message.conversation_id.clone(),
                    message_id: id.clone(),
                })
            })
            .collect();
        notes.sort_by(|a, b| a.message_id.cmp(&b.message_id));
        notes
    }

    /// Display name of a conversation, if known.
    #[must_use]
    pub fn conversation_name(&self, id: &ConversationId) -> Option<&str> {
        self.conversations.get(id).map(|c| c.name.as_str())
    }

    /// Conversation a stored message belongs to.
    #[must_use]
    pub fn conversation_of(&self, message_id: &ContentId) -> Option<&ConversationId> {
        self.messages
            .get(message_id)
            .map(|message| &message.conversation_id)
    }

    /// Every conversation as `(id, name)`, sorted by name.
    pub fn conversations(&self) -> Vec<(&ConversationId, &str)> {
        let mut list: Vec<_> = self
            .conversations
            .iter()
            .map(|(id, conversation)| (id, conversation.name.as_str()))
            .collect();
        list.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));
        list
    }
}

impl ContentResolver for Directory {
    fn resolve(&self, notification: &RawNotification) -> Option<ContentDescriptor> {
        let account = self.accounts.get(&notification.account_id)?;
        let conversation = self.conversations.get(&notification.conversation_id)?;
        if conversation.account_id != notification.account_id {
            return None;
        }
        let message = self.messages.get(&notification.message_id)?;
        if message.conversation_id != notification.conversation_id {
            return None;
        }
        let sender_name = self.users.get(&message.sender_id)?;

        let context = AccountContext {
            team_name: account.team_name.clone(),
            is_active: self.selected_account.as_ref() == Some(&notification.account_id),
        };

        Some(
            ContentDescriptor::new(
                notification.message_id.clone(),
                notification.conversation_id.clone(),
                conversation.name.clone(),
                message.sender_id.clone(),
                sender_name.clone(),
            )
            .with_conversation_kind(conversation.kind)
            .with_kind(message.kind)
            .with_summary(message.text.clone())
            .with_account(context)
            .ephemeral(message.is_ephemeral),
        )
    }
}
