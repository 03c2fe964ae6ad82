//! ProgAndBot Test Utils
//!
//! Shared testing utilities for the bot's repository and service tests. The crate offers
//! a builder for test contexts backed by in-memory SQLite databases, factories for
//! inserting rows with sensible defaults, and JSON-backed factories for Serenity objects.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_guild_config() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_bot_tables().build().await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod serenity;
