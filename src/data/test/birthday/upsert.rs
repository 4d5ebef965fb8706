use super::*;

/// Tests registering a birthday for a new user.
///
/// Expected: Ok with the day and month stored
#[tokio::test]
async fn creates_new_birthday() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBirthday)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BirthdayRepository::new(db);
    let birthday = repo
        .upsert(UpsertBirthdayParam {
            user_id: "123456789".to_string(),
            day: 24,
            month: 12,
        })
        .await?;

    assert_eq!(birthday.user_id, "123456789");
    assert_eq!(birthday.day, 24);
    assert_eq!(birthday.month, 12);
    assert_eq!(birthday.created_at, birthday.updated_at);

    Ok(())
}

/// Tests registering again for the same user.
///
/// Verifies that the second registration replaces the first instead of adding a
/// duplicate, and that the creation time is kept.
///
/// Expected: Ok with a single row holding the new date
#[tokio::test]
async fn replaces_existing_birthday() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBirthday)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = UserBirthdayFactory::new(db)
        .user_id("123456789")
        .day(1)
        .month(5)
        .build()
        .await?;

    let repo = BirthdayRepository::new(db);
    let updated = repo
        .upsert(UpsertBirthdayParam {
            user_id: "123456789".to_string(),
            day: 15,
            month: 8,
        })
        .await?;

    assert_eq!(updated.day, 15);
    assert_eq!(updated.month, 8);
    assert_eq!(updated.created_at, original.created_at);

    let count = entity::prelude::UserBirthday::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
