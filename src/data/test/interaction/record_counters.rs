use super::*;

/// Tests the first message for a new key.
///
/// Verifies that the row is created on first use with every sibling counter zeroed
/// rather than absent.
///
/// Expected: Ok with message_count 1 and all other counters 0/false
#[tokio::test]
async fn first_message_initializes_siblings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InteractionRepository::new(db);
    let key = InteractionKey::new("100", "200");
    let now = Utc.with_ymd_and_hms(2024, 11, 22, 12, 0, 0).unwrap();

    repo.record_message(&key, now).await?;

    let record = repo.find(&key).await?.unwrap();
    assert_eq!(record.message_count, 1);
    assert_eq!(record.reaction_count, 0);
    assert_eq!(record.attachment_count, 0.0);
    assert_eq!(record.total_time_in_voice, 0);
    assert!(!record.is_in_voice);
    assert!(record.last_voice_join.is_none());
    assert_eq!(record.last_interaction, now);

    Ok(())
}

/// Tests repeated messages for the same key.
///
/// Expected: Ok with message_count 3 and last_interaction set to the latest event
#[tokio::test]
async fn increments_existing_message_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InteractionRepository::new(db);
    let key = InteractionKey::new("100", "200");
    let start = Utc.with_ymd_and_hms(2024, 11, 22, 12, 0, 0).unwrap();

    for offset in 0..3 {
        repo.record_message(&key, start + Duration::minutes(offset))
            .await?;
    }

    let record = repo.find(&key).await?.unwrap();
    assert_eq!(record.message_count, 3);
    assert_eq!(record.last_interaction, start + Duration::minutes(2));

    Ok(())
}

/// Tests concurrent message events for the same key.
///
/// Verifies that increments are applied as deltas in the database so no update is
/// lost when events race, including the race to create the row.
///
/// Expected: Ok with message_count equal to the number of events
#[tokio::test]
async fn concurrent_messages_are_not_lost() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let key = InteractionKey::new("100", "200");
    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..25 {
        let db = db.clone();
        let key = key.clone();
        tasks.spawn(async move {
            InteractionRepository::new(&db)
                .record_message(&key, Utc::now())
                .await
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap()?;
    }

    let record = InteractionRepository::new(&db).find(&key).await?.unwrap();
    assert_eq!(record.message_count, 25);

    Ok(())
}

/// Tests attachment weighting.
///
/// Expected: Ok with attachment_count 3.0 after two events and message_count untouched
#[tokio::test]
async fn attachment_adds_weighted_increment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InteractionRepository::new(db);
    let key = InteractionKey::new("100", "200");

    repo.record_attachment(&key, Utc::now()).await?;
    let record = repo.find(&key).await?.unwrap();
    assert_eq!(record.attachment_count, 1.5);

    repo.record_attachment(&key, Utc::now()).await?;
    let record = repo.find(&key).await?.unwrap();
    assert_eq!(record.attachment_count, 3.0);
    assert_eq!(record.message_count, 0);

    Ok(())
}

/// Tests that a reaction only touches its own counter on an existing row.
///
/// Expected: Ok with reaction_count incremented and other counters preserved
#[tokio::test]
async fn reaction_preserves_other_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserInteractionFactory::new(db)
        .user_id("100")
        .guild_id("200")
        .message_count(10)
        .reaction_count(4)
        .total_time_in_voice(30)
        .build()
        .await?;

    let repo = InteractionRepository::new(db);
    let key = InteractionKey::new("100", "200");
    repo.record_reaction(&key, Utc::now()).await?;

    let record = repo.find(&key).await?.unwrap();
    assert_eq!(record.reaction_count, 5);
    assert_eq!(record.message_count, 10);
    assert_eq!(record.total_time_in_voice, 30);

    Ok(())
}

/// Tests that counters are kept per guild.
///
/// Expected: Ok with two independent rows for the same user
#[tokio::test]
async fn keys_are_scoped_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InteractionRepository::new(db);
    let first = InteractionKey::new("100", "200");
    let second = InteractionKey::new("100", "201");

    repo.record_message(&first, Utc::now()).await?;
    repo.record_message(&first, Utc::now()).await?;
    repo.record_reaction(&second, Utc::now()).await?;

    let first_record = repo.find(&first).await?.unwrap();
    let second_record = repo.find(&second).await?.unwrap();
    assert_eq!(first_record.message_count, 2);
    assert_eq!(first_record.reaction_count, 0);
    assert_eq!(second_record.message_count, 0);
    assert_eq!(second_record.reaction_count, 1);

    Ok(())
}
