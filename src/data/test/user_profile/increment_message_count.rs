use super::*;

/// Tests that the first message creates the profile.
///
/// Also creates the parent guild row when the guild was never bootstrapped.
///
/// Expected: Ok with message_count 1 and warning_count 0
#[tokio::test]
async fn first_message_creates_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserProfileRepository::new(db);
    let profile = repo.increment_message_count(10, 20).await?;

    assert_eq!(profile.message_count, 1);
    assert_eq!(profile.warning_count, 0);

    let guilds = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(guilds, 1);

    Ok(())
}

/// Tests that N increments add exactly N.
///
/// Expected: final count equals initial count plus N, one row
#[tokio::test]
async fn repeated_increments_accumulate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("10")
        .build()
        .await?;
    factory::user_profile::UserProfileFactory::new(db, "10")
        .user_id("20")
        .message_count(5)
        .warning_count(2)
        .build()
        .await?;

    let repo = UserProfileRepository::new(db);
    let mut last = 5;
    for _ in 0..7 {
        let profile = repo.increment_message_count(10, 20).await?;
        assert!(profile.message_count > last);
        last = profile.message_count;
    }

    let profile = repo.find(10, 20).await?.unwrap();
    assert_eq!(profile.message_count, 12);
    assert_eq!(profile.warning_count, 2);

    let count = entity::prelude::UserProfile::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
