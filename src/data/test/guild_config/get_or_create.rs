use super::*;

/// Tests that get_or_create creates a missing row exactly once.
///
/// Expected: Ok with defaults, a single row after repeated calls
#[tokio::test]
async fn creates_once_then_returns_existing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let first = repo.get_or_create(321).await?;
    let second = repo.get_or_create(321).await?;

    assert_eq!(first, second);
    assert_eq!(first.guild_id, 321);
    assert_eq!(first.language, Language::En);

    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that get_or_create returns stored overrides.
///
/// Expected: Ok with the stored polls channel
#[tokio::test]
async fn returns_existing_overrides() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_guild_config(db).await?;
    let guild_id: u64 = existing.guild_id.parse().unwrap();
    let repo = GuildConfigRepository::new(db);
    repo.update(guild_id, GuildConfigUpdate::PollsChannel(999))
        .await?;

    let config = repo.get_or_create(guild_id).await?;

    assert_eq!(config.polls_channel_id, Some(999));

    Ok(())
}
