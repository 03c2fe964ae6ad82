use super::*;

/// Tests bootstrapping a guild that has no configuration.
///
/// Expected: Ok(true) and a row at documented defaults
#[tokio::test]
async fn inserts_defaults_for_new_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let inserted = repo.create_if_missing(100).await?;

    assert!(inserted);
    let config = repo.find_by_guild_id(100).await?.unwrap();
    assert!(!config.welcome_enabled);
    assert_eq!(config.welcome_channel_id, None);
    assert_eq!(config.welcome_message, DEFAULT_WELCOME_MESSAGE);
    assert_eq!(config.polls_channel_id, None);
    assert_eq!(config.polls_message, DEFAULT_POLLS_MESSAGE);
    assert_eq!(config.language, Language::En);

    Ok(())
}

/// Tests that bootstrapping leaves an existing configuration untouched.
///
/// Expected: Ok(false), existing values preserved, still one row
#[tokio::test]
async fn keeps_existing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("100")
        .welcome_enabled(true)
        .welcome_message("Hi %MEMBER%")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let inserted = repo.create_if_missing(100).await?;

    assert!(!inserted);
    let config = repo.find_by_guild_id(100).await?.unwrap();
    assert!(config.welcome_enabled);
    assert_eq!(config.welcome_message, "Hi %MEMBER%");

    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
