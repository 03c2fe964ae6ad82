use super::*;

/// Tests that warnings increment independently of messages.
///
/// Expected: Ok with warning_count 3 and message_count untouched
#[tokio::test]
async fn increments_only_warning_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserProfileRepository::new(db);
    repo.increment_message_count(1, 2).await?;
    repo.increment_warning_count(1, 2).await?;
    repo.increment_warning_count(1, 2).await?;
    let profile = repo.increment_warning_count(1, 2).await?;

    assert_eq!(profile.warning_count, 3);
    assert_eq!(profile.message_count, 1);

    Ok(())
}

/// Tests that a first warning creates the profile.
///
/// Expected: Ok with warning_count 1
#[tokio::test]
async fn first_warning_creates_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db).await?;

    let repo = UserProfileRepository::new(db);
    let profile = repo.increment_warning_count(77, 88).await?;

    assert_eq!(profile.warning_count, 1);
    assert_eq!(profile.message_count, 0);

    let count = entity::prelude::UserProfile::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
