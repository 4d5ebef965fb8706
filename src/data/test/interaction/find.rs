use super::*;

/// Tests looking up a key with no recorded events.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InteractionRepository::new(db);
    let result = repo.find(&InteractionKey::new("100", "200")).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests converting a stored row into the domain model.
///
/// Expected: Ok(Some) with every field carried over
#[tokio::test]
async fn returns_stored_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let joined_at = Utc.with_ymd_and_hms(2024, 11, 22, 12, 0, 0).unwrap();
    let row = UserInteractionFactory::new(db)
        .message_count(250)
        .reaction_count(120)
        .attachment_count(4.5)
        .total_time_in_voice(90)
        .in_voice_since(joined_at)
        .build()
        .await?;

    let repo = InteractionRepository::new(db);
    let record = repo
        .find(&InteractionKey::new(row.user_id.clone(), row.guild_id.clone()))
        .await?;

    assert_eq!(record, Some(UserInteraction::from_entity(row)));

    Ok(())
}
