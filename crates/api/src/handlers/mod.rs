//! HTTP handlers, one module per resource.

pub mod correspondent;
pub mod event;
pub mod queries;
pub mod reportage;
