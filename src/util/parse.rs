use std::num::NonZeroU64;

use sea_orm::DbErr;

/// Parses a Discord snowflake stored as a String.
///
/// Snowflakes are persisted as strings so they survive databases without unsigned 64-bit
/// integers. A value that fails to parse means the row was written by something else.
/// Zero is rejected since no snowflake is zero and serenity's id constructors panic on it.
///
/// # Arguments
/// - `value` - The stored String to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed snowflake
/// - `Err(DbErr::Custom)` - The stored value is not a valid snowflake
pub fn parse_u64_from_string(value: &str) -> Result<u64, DbErr> {
    value
        .parse::<NonZeroU64>()
        .map(NonZeroU64::get)
        .map_err(|e| DbErr::Custom(format!("Failed to parse ID from String '{value}': {e}")))
}
