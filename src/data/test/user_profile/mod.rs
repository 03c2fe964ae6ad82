use crate::data::user_profile::UserProfileRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find;
mod increment_message_count;
mod increment_warning_count;
