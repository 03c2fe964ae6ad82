use crate::{
    data::guild_config::GuildConfigRepository,
    model::guild_config::{
        GuildConfigUpdate, Language, DEFAULT_POLLS_MESSAGE, DEFAULT_WELCOME_MESSAGE,
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_if_missing;
mod find_by_guild_id;
mod get_or_create;
mod update;
