//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's gateway would deliver to the bot's event handlers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::message::create_test_message;
//!
//! // A guild message with two attachments from a human author
//! let message = create_test_message(Some(123456789), false, 2);
//! ```
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects

pub mod message;

pub use message::create_test_message;
