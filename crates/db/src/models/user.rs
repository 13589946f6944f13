//! User row model.

use redpen_core::error::CoreError;
use redpen_core::roles::Role;
use redpen_core::types::{DbId, Timestamp};
use redpen_core::user::User;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash; convert to `UserSummary` before responding.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
}

impl TryFrom<UserRow> for User {
    type Error = CoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: Role = row
            .role
            .parse()
            .map_err(|e| CoreError::Internal(format!("Corrupt user {}: {e}", row.id)))?;
        Ok(User {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            role,
            created_at: row.created_at,
        })
    }
}
