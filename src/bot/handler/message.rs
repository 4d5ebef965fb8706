use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::{model::interaction::InteractionKey, service::interaction::InteractionService};

/// Engagement a received message counts as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageEvent {
    /// Plain message without attachments.
    Text,
    /// Message carrying at least one attachment. Counted instead of, not in addition
    /// to, a plain message.
    Attachment,
}

impl MessageEvent {
    /// Classifies a message, returning `None` for messages that are not tracked.
    ///
    /// Bot authors and direct messages are ignored.
    pub fn classify(message: &Message) -> Option<Self> {
        if message.author.bot || message.guild_id.is_none() {
            return None;
        }

        if message.attachments.is_empty() {
            Some(Self::Text)
        } else {
            Some(Self::Attachment)
        }
    }
}

/// Handle message creation in a channel
pub async fn handle_message(db: &DatabaseConnection, _ctx: Context, message: Message) {
    let Some(event) = MessageEvent::classify(&message) else {
        return;
    };
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let key = InteractionKey::new(message.author.id.to_string(), guild_id.to_string());
    let service = InteractionService::new(db);

    match event {
        MessageEvent::Text => service.record_message(&key).await,
        MessageEvent::Attachment => service.record_attachment(&key).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::message::create_test_message;

    #[test]
    fn plain_guild_message_is_text() {
        let message = create_test_message(Some(123), false, 0);

        assert_eq!(MessageEvent::classify(&message), Some(MessageEvent::Text));
    }

    #[test]
    fn message_with_attachments_is_attachment_only() {
        let message = create_test_message(Some(123), false, 2);

        assert_eq!(
            MessageEvent::classify(&message),
            Some(MessageEvent::Attachment)
        );
    }

    #[test]
    fn ignores_bot_authors() {
        let message = create_test_message(Some(123), true, 0);

        assert_eq!(MessageEvent::classify(&message), None);
    }

    #[test]
    fn ignores_direct_messages() {
        let message = create_test_message(None, false, 1);

        assert_eq!(MessageEvent::classify(&message), None);
    }
}
