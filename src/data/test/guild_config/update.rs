use super::*;

/// Tests that the first settings write creates the row.
///
/// Verifies the written field is set and every other field is at its default.
///
/// Expected: Ok with one row
#[tokio::test]
async fn first_write_creates_row_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo
        .update(555, GuildConfigUpdate::WelcomeEnabled(true))
        .await?;

    assert_eq!(config.guild_id, 555);
    assert!(config.welcome_enabled);
    assert_eq!(config.welcome_channel_id, None);
    assert_eq!(config.welcome_message, DEFAULT_WELCOME_MESSAGE);
    assert_eq!(config.polls_message, DEFAULT_POLLS_MESSAGE);
    assert_eq!(config.language, Language::En);

    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that a write only mutates the targeted field.
///
/// Expected: Ok with other overrides unchanged
#[tokio::test]
async fn write_only_touches_target_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("555")
        .welcome_enabled(true)
        .welcome_channel_id(Some("10"))
        .welcome_message("Hello %MEMBER%")
        .polls_channel_id(Some("20"))
        .language("es")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo
        .update(555, GuildConfigUpdate::PollsMessage("Vote!".to_string()))
        .await?;

    assert_eq!(config.polls_message, "Vote!");
    assert!(config.welcome_enabled);
    assert_eq!(config.welcome_channel_id, Some(10));
    assert_eq!(config.welcome_message, "Hello %MEMBER%");
    assert_eq!(config.polls_channel_id, Some(20));
    assert_eq!(config.language, Language::Es);

    Ok(())
}

/// Tests round-tripping every kind of settings write.
///
/// Expected: each written value is read back unchanged
#[tokio::test]
async fn round_trips_each_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.update(9, GuildConfigUpdate::WelcomeChannel(11)).await?;
    repo.update(9, GuildConfigUpdate::WelcomeMessage("Hey %MEMBER%".to_string()))
        .await?;
    repo.update(9, GuildConfigUpdate::PollsChannel(12)).await?;
    repo.update(9, GuildConfigUpdate::Language(Language::Es))
        .await?;
    repo.update(9, GuildConfigUpdate::WelcomeEnabled(false))
        .await?;

    let config = repo.find_by_guild_id(9).await?.unwrap();

    assert_eq!(config.welcome_channel_id, Some(11));
    assert_eq!(config.welcome_message, "Hey %MEMBER%");
    assert_eq!(config.polls_channel_id, Some(12));
    assert_eq!(config.language, Language::Es);
    assert!(!config.welcome_enabled);

    Ok(())
}
