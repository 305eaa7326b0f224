//! Identity and audit columns shared by every table.

use serde::Serialize;
use sqlx::FromRow;
use tasker_core::types::{DbId, Timestamp};

/// `id`, `created_at`, `updated_at` and the soft-delete marker.
///
/// Entities embed this with `#[serde(flatten)]`, so the columns serialize
/// alongside the entity's own fields rather than as a nested object.
/// `deleted_at` is omitted from the output while unset.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Audit {
    pub id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
}
