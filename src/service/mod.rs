//! Service layer for business logic and orchestration.
//!
//! Services sit between the Discord-facing bot layer and the repositories. They decide
//! which failures reach the caller: interaction tracking logs and swallows every storage
//! error, while command-facing services return `AppError` so a reply can be composed.

pub mod birthday;
pub mod interaction;
pub mod points;
pub mod welcome;
