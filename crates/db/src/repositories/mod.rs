//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod author_repo;
pub mod exposure_repo;
pub mod quote_repo;

pub use author_repo::AuthorRepo;
pub use exposure_repo::ExposureRepo;
pub use quote_repo::QuoteRepo;
