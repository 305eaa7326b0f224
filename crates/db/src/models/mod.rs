//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct embedding the shared [`audit::Audit`] columns
//! - `Deserialize` + `Validate` create/update DTOs with their required-field declarations

pub mod audit;
pub mod list;
pub mod project;
pub mod task;
