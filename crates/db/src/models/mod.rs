//! Entity models and DTOs.
//!
//! Each entity has a `FromRow` struct mirroring its table plus
//! `Create*`/`Update*` DTOs for the write paths.

pub mod correspondent;
pub mod event;
pub mod query;
pub mod reportage;
