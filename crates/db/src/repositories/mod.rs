//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod correspondent_repo;
pub mod event_repo;
pub mod query_repo;
pub mod reportage_repo;

pub use correspondent_repo::CorrespondentRepo;
pub use event_repo::EventRepo;
pub use query_repo::QueryRepo;
pub use reportage_repo::ReportageRepo;
