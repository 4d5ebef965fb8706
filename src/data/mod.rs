//! Database repository layer.
//!
//! Repositories wrap a borrowed `DatabaseConnection` and convert SeaORM entity models into
//! domain models at this boundary. They return `DbErr` untouched; deciding whether a failure
//! is surfaced or swallowed belongs to the service layer.

pub mod birthday;
pub mod interaction;

#[cfg(test)]
mod test;
