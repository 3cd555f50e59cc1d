//! Domain-level building blocks shared by the repository and API layers.
//!
//! This crate has zero internal dependencies so both `reportage-db` and
//! `reportage-api` (and any future CLI tooling) can use it.

pub mod error;
pub mod pagination;
pub mod search;
pub mod types;
