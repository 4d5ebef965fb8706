//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let interaction = factory::create_user_interaction(&db).await?;
//!
//!     // Customize with the builder
//!     let in_voice = factory::user_interaction::UserInteractionFactory::new(&db)
//!         .user_id("123")
//!         .guild_id("456")
//!         .in_voice_since(chrono::Utc::now())
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user_interaction` - Create engagement counter rows
//! - `user_birthday` - Create birthday rows
//! - `helpers` - Shared ID generation

pub mod helpers;
pub mod user_birthday;
pub mod user_interaction;

pub use user_birthday::create_birthday;
pub use user_interaction::create_user_interaction;
