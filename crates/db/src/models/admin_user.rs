//! Admin credential records.

use serde::Serialize;
use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

/// A row from the `admin_users` table.
///
/// Passwords are stored as Argon2id PHC strings, never in plaintext.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminUser {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Timestamp,
}
