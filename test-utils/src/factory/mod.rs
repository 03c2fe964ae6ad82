//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let config = factory::create_guild_config(&db).await?;
//!
//! let profile = factory::user_profile::UserProfileFactory::new(&db, &config.guild_id)
//!     .warning_count(3)
//!     .build()
//!     .await?;
//! ```

pub mod guild_config;
pub mod helpers;
pub mod user_profile;

pub use guild_config::create_guild_config;
pub use user_profile::create_user_profile;
