//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of conversion and scoring logic.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let row = fixture::user_interaction::entity_builder()
//!     .message_count(250)
//!     .build();
//! ```

pub mod user_interaction;
