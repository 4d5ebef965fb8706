//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

/// Creates a test Serenity Message.
///
/// # Arguments
/// - `guild_id` - Guild the message was sent in, `None` for a direct message
/// - `author_is_bot` - Whether the author account is a bot
/// - `attachments` - Number of attachments to include
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(guild_id: Option<u64>, author_is_bot: bool, attachments: usize) -> Message {
    let attachments: Vec<serde_json::Value> = (0..attachments)
        .map(|index| {
            let id = 300000000000000000u64 + index as u64;
            serde_json::json!({
                "id": id.to_string(),
                "filename": format!("file{}.png", index),
                "size": 1024,
                "url": format!("https://cdn.discordapp.com/attachments/1/{}/file{}.png", id, index),
                "proxy_url": format!("https://media.discordapp.net/attachments/1/{}/file{}.png", id, index),
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": "200000000000000000",
        "channel_id": "100000000000000001",
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": {
            "id": "100000000000000002",
            "username": "tester",
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": author_is_bot,
        },
        "content": "hello",
        "timestamp": "2024-11-22T12:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": attachments,
        "embeds": [],
        "pinned": false,
        "type": 0,
    }))
    .expect("Failed to create test message")
}
