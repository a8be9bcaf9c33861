//! Row types and request/response DTOs.

pub mod author;
pub mod exposure;
pub mod quote;
