//! HTTP handlers. Each one extracts ids and payload, calls a repository and
//! wraps the outcome in an [`Envelope`](crate::response::Envelope).

pub mod list;
pub mod project;
pub mod task;
