mod guild_config;
mod user_profile;
