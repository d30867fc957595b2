// SPDX-License-Identifier: MPL-2.0
//! Seed data for the demo host.

use crate::domain::chat_head::{ContentId, ConversationKind, MessageKind};
use crate::presentation::Directory;

/// Builds a directory with two accounts, a handful of conversations and one
/// message of each kind.
#[must_use]
pub fn directory() -> Directory {
    let mut directory = Directory::new();
    directory.add_account("personal", None);
    directory.add_account("work", Some("Acme"));
    directory.select_account("personal");

    directory.add_user("u-ada", "Ada Lovelace");
    directory.add_user("u-grace", "Grace Hopper");
    directory.add_user("u-alan", "Alan Turing");

    directory.add_conversation("personal", "c-ada", "Ada Lovelace", ConversationKind::OneToOne);
    directory.add_conversation("personal", "c-design", "Design Review", ConversationKind::Group);
    directory.add_conversation("work", "c-standup", "Standup", ConversationKind::Group);

    directory.add_message(
        "c-ada",
        "m-01",
        "u-ada",
        MessageKind::Text,
        "Did you get a chance to look at the engine notes?",
    );
    directory.add_message("c-design", "m-02", "u-grace", MessageKind::Image, "");
    directory.add_message("c-standup", "m-03", "u-alan", MessageKind::Text, "Running late, start without me");
    directory.add_message("c-design", "m-04", "u-ada", MessageKind::Knock, "");
    directory.add_message("c-ada", "m-05", "u-ada", MessageKind::Text, "This one will self-destruct");
    directory.set_ephemeral(&ContentId::new("m-05"), true);
    directory.add_message("c-standup", "m-06", "u-grace", MessageKind::File, "");
    directory.add_message("c-design", "m-07", "u-alan", MessageKind::Location, "");
    directory
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ContentResolver;

    #[test]
    fn every_seeded_notification_resolves() {
        let directory = directory();
        let notifications = directory.notifications();
        assert_eq!(notifications.len(), 7);
        for notification in &notifications {
            assert!(directory.resolve(notification).is_some(), "{notification:?}");
        }
    }
}
