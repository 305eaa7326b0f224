//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Nested entities are
//! always addressed through their full ancestor chain; a chain that does not
//! resolve (wrong owner, missing or soft-deleted ancestor) yields `None` or
//! `false`, exactly as if the entity did not exist.

pub mod list_repo;
pub mod project_repo;
pub mod task_repo;

pub use list_repo::ListRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
