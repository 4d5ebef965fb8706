use super::*;

/// Tests finding birthdays on a specific date.
///
/// Expected: Ok with only the birthdays matching both day and month
#[tokio::test]
async fn find_by_day_matches_day_and_month() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBirthday)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = create_birthday(db, 24, 12).await?;
    let second = create_birthday(db, 24, 12).await?;
    create_birthday(db, 24, 11).await?;
    create_birthday(db, 25, 12).await?;

    let repo = BirthdayRepository::new(db);
    let birthdays = repo.find_by_day(24, 12).await?;

    let mut user_ids: Vec<String> = birthdays.into_iter().map(|b| b.user_id).collect();
    user_ids.sort();
    let mut expected = vec![first.user_id, second.user_id];
    expected.sort();
    assert_eq!(user_ids, expected);

    Ok(())
}

/// Tests listing a month's birthdays.
///
/// Expected: Ok with the month's birthdays ordered by day
#[tokio::test]
async fn find_by_month_orders_by_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBirthday)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_birthday(db, 30, 3).await?;
    create_birthday(db, 2, 3).await?;
    create_birthday(db, 15, 3).await?;
    create_birthday(db, 1, 4).await?;

    let repo = BirthdayRepository::new(db);
    let birthdays = repo.find_by_month(3).await?;

    let days: Vec<i32> = birthdays.iter().map(|b| b.day).collect();
    assert_eq!(days, vec![2, 15, 30]);

    Ok(())
}

/// Tests listing a month with no registrations.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn find_by_month_returns_empty_when_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBirthday)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_birthday(db, 10, 1).await?;

    let repo = BirthdayRepository::new(db);
    let birthdays = repo.find_by_month(6).await?;

    assert!(birthdays.is_empty());

    Ok(())
}

/// Tests looking up a single user's birthday.
///
/// Expected: Ok(Some) for a registered user and Ok(None) otherwise
#[tokio::test]
async fn find_by_user_returns_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBirthday)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = create_birthday(db, 7, 7).await?;

    let repo = BirthdayRepository::new(db);
    let found = repo.find_by_user(&row.user_id).await?;
    let missing = repo.find_by_user("999").await?;

    assert_eq!(found.map(|b| (b.day, b.month)), Some((7, 7)));
    assert!(missing.is_none());

    Ok(())
}
