use super::*;

/// Tests a full voice session.
///
/// Verifies that a 90 second session credits one whole minute and closes the session.
///
/// Expected: Ok(Some(1)) with total_time_in_voice 1 and is_in_voice false
#[tokio::test]
async fn join_then_leave_credits_whole_minutes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InteractionRepository::new(db);
    let key = InteractionKey::new("100", "200");
    let joined_at = Utc.with_ymd_and_hms(2024, 11, 22, 12, 0, 0).unwrap();

    repo.record_voice_join(&key, joined_at).await?;

    let record = repo.find(&key).await?.unwrap();
    assert!(record.is_in_voice);
    assert_eq!(record.last_voice_join, Some(joined_at));
    assert_eq!(record.message_count, 0);

    let left_at = joined_at + Duration::seconds(90);
    let credited = repo.record_voice_leave(&key, left_at).await?;

    assert_eq!(credited, Some(1));
    let record = repo.find(&key).await?.unwrap();
    assert_eq!(record.total_time_in_voice, 1);
    assert!(!record.is_in_voice);
    assert!(record.last_voice_join.is_none());
    assert_eq!(record.last_interaction, left_at);

    Ok(())
}

/// Tests a session shorter than a minute.
///
/// Expected: Ok(Some(0)) with the session closed and no time credited
#[tokio::test]
async fn leave_within_same_minute_adds_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InteractionRepository::new(db);
    let key = InteractionKey::new("100", "200");
    let joined_at = Utc.with_ymd_and_hms(2024, 11, 22, 12, 0, 0).unwrap();

    repo.record_voice_join(&key, joined_at).await?;
    let credited = repo
        .record_voice_leave(&key, joined_at + Duration::seconds(59))
        .await?;

    assert_eq!(credited, Some(0));
    let record = repo.find(&key).await?.unwrap();
    assert_eq!(record.total_time_in_voice, 0);
    assert!(!record.is_in_voice);

    Ok(())
}

/// Tests a leave event for a key that was never recorded.
///
/// Expected: Ok(None) and no row created
#[tokio::test]
async fn leave_without_record_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InteractionRepository::new(db);
    let key = InteractionKey::new("100", "200");

    let credited = repo.record_voice_leave(&key, Utc::now()).await?;

    assert_eq!(credited, None);
    assert!(repo.find(&key).await?.is_none());

    Ok(())
}

/// Tests a leave event for a user who is not in voice.
///
/// Expected: Ok(None) with total_time_in_voice unchanged
#[tokio::test]
async fn leave_while_not_in_voice_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserInteractionFactory::new(db)
        .user_id("100")
        .guild_id("200")
        .total_time_in_voice(42)
        .build()
        .await?;

    let repo = InteractionRepository::new(db);
    let key = InteractionKey::new("100", "200");
    let credited = repo.record_voice_leave(&key, Utc::now()).await?;

    assert_eq!(credited, None);
    let record = repo.find(&key).await?.unwrap();
    assert_eq!(record.total_time_in_voice, 42);

    Ok(())
}

/// Tests a duplicated leave event.
///
/// Verifies that only the first leave credits the session.
///
/// Expected: first leave Ok(Some(5)), second leave Ok(None), total 5
#[tokio::test]
async fn duplicate_leave_credits_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let joined_at = Utc.with_ymd_and_hms(2024, 11, 22, 12, 0, 0).unwrap();
    UserInteractionFactory::new(db)
        .user_id("100")
        .guild_id("200")
        .in_voice_since(joined_at)
        .build()
        .await?;

    let repo = InteractionRepository::new(db);
    let key = InteractionKey::new("100", "200");
    let left_at = joined_at + Duration::minutes(5);

    assert_eq!(repo.record_voice_leave(&key, left_at).await?, Some(5));
    assert_eq!(repo.record_voice_leave(&key, left_at).await?, None);

    let record = repo.find(&key).await?.unwrap();
    assert_eq!(record.total_time_in_voice, 5);

    Ok(())
}

/// Tests a leave timestamp earlier than the join.
///
/// Expected: Ok(Some(0)) with the session closed
#[tokio::test]
async fn leave_before_join_clamps_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InteractionRepository::new(db);
    let key = InteractionKey::new("100", "200");
    let joined_at = Utc.with_ymd_and_hms(2024, 11, 22, 12, 0, 0).unwrap();

    repo.record_voice_join(&key, joined_at).await?;
    let credited = repo
        .record_voice_leave(&key, joined_at - Duration::minutes(3))
        .await?;

    assert_eq!(credited, Some(0));
    let record = repo.find(&key).await?.unwrap();
    assert_eq!(record.total_time_in_voice, 0);

    Ok(())
}

/// Tests that joining preserves counters accumulated before.
///
/// Expected: Ok with message_count and total_time_in_voice preserved
#[tokio::test]
async fn join_preserves_existing_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInteraction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserInteractionFactory::new(db)
        .user_id("100")
        .guild_id("200")
        .message_count(7)
        .total_time_in_voice(12)
        .build()
        .await?;

    let repo = InteractionRepository::new(db);
    let key = InteractionKey::new("100", "200");
    let joined_at = Utc.with_ymd_and_hms(2024, 11, 22, 12, 0, 0).unwrap();
    repo.record_voice_join(&key, joined_at).await?;
    repo.record_voice_leave(&key, joined_at + Duration::minutes(10))
        .await?;

    let record = repo.find(&key).await?.unwrap();
    assert_eq!(record.message_count, 7);
    assert_eq!(record.total_time_in_voice, 22);

    Ok(())
}
