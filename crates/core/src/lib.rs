//! Domain types and pure logic for the Mood Quotes service.
//!
//! This crate has no database or HTTP dependencies. Persistence is reached
//! through the store traits in [`rotation`], implemented by `moodquotes-db`.

pub mod error;
pub mod mood;
pub mod rotation;
pub mod types;
