pub use super::guild_config::Entity as GuildConfig;
pub use super::user_profile::Entity as UserProfile;
