//! Domain models shared by the data, service and bot layers.

pub mod birthday;
pub mod interaction;
pub mod score;
