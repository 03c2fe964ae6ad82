use super::*;

/// Tests finding an existing profile.
///
/// Expected: Ok(Some) with stored counters
#[tokio::test]
async fn finds_existing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("1")
        .build()
        .await?;
    factory::user_profile::UserProfileFactory::new(db, "1")
        .user_id("2")
        .message_count(40)
        .warning_count(3)
        .build()
        .await?;

    let repo = UserProfileRepository::new(db);
    let profile = repo.find(1, 2).await?.unwrap();

    assert_eq!(profile.guild_id, 1);
    assert_eq!(profile.user_id, 2);
    assert_eq!(profile.message_count, 40);
    assert_eq!(profile.warning_count, 3);

    Ok(())
}

/// Tests that profiles are scoped per guild.
///
/// Expected: Ok(None) for the same user in another guild
#[tokio::test]
async fn profile_is_scoped_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("1")
        .build()
        .await?;
    factory::user_profile::UserProfileFactory::new(db, "1")
        .user_id("2")
        .build()
        .await?;

    let repo = UserProfileRepository::new(db);

    assert!(repo.find(3, 2).await?.is_none());

    Ok(())
}
