use super::*;

/// Tests finding an existing guild configuration.
///
/// Verifies that stored string snowflakes are parsed into the domain model.
///
/// Expected: Ok(Some) with parsed IDs
#[tokio::test]
async fn finds_existing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("123456789")
        .welcome_enabled(true)
        .welcome_channel_id(Some("555"))
        .language("es")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.find_by_guild_id(123456789).await?.unwrap();

    assert_eq!(config.guild_id, 123456789);
    assert!(config.welcome_enabled);
    assert_eq!(config.welcome_channel_id, Some(555));
    assert_eq!(config.polls_channel_id, None);
    assert_eq!(config.language, Language::Es);

    Ok(())
}

/// Tests that looking up an unknown guild does not create a row.
///
/// Expected: Ok(None) and the table stays empty
#[tokio::test]
async fn returns_none_without_creating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let result = repo.find_by_guild_id(42).await?;

    assert!(result.is_none());
    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that a corrupt stored snowflake surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_invalid_stored_channel_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("7")
        .polls_channel_id(Some("not-a-snowflake"))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let result = repo.find_by_guild_id(7).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

/// Tests that an unknown stored language falls back to English.
///
/// Expected: Ok with Language::En
#[tokio::test]
async fn unknown_language_falls_back_to_english() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("8")
        .language("fr")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.find_by_guild_id(8).await?.unwrap();

    assert_eq!(config.language, Language::En);

    Ok(())
}
