//! Actor roles.
//!
//! The string forms must match the `chk_users_role` constraint in
//! `20260301000001_create_users_table.sql`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

pub const ROLE_AUTHOR: &str = "AUTHOR";
pub const ROLE_REVIEWER: &str = "REVIEWER";
pub const ROLE_ADMIN: &str = "ADMIN";

/// The role of an authenticated actor. Roles are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Author,
    Reviewer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Author => ROLE_AUTHOR,
            Self::Reviewer => ROLE_REVIEWER,
            Self::Admin => ROLE_ADMIN,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_AUTHOR => Ok(Self::Author),
            ROLE_REVIEWER => Ok(Self::Reviewer),
            ROLE_ADMIN => Ok(Self::Admin),
            other => Err(CoreError::Validation(format!(
                "Invalid role '{other}'. Must be one of: {ROLE_AUTHOR}, {ROLE_REVIEWER}, {ROLE_ADMIN}"
            ))),
        }
    }
}

/// The authenticated caller of a lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: DbId,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: DbId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Fail with `Forbidden` unless the actor holds `role`.
    pub fn require(&self, role: Role) -> Result<(), CoreError> {
        if self.role == role {
            Ok(())
        } else {
            Err(CoreError::Forbidden(format!("{role} role required")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_role() {
        for role in [Role::Author, Role::Reviewer, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn serde_uses_upper_case_names() {
        let json = serde_json::to_string(&Role::Reviewer).unwrap();
        assert_eq!(json, "\"REVIEWER\"");
    }

    #[test]
    fn require_rejects_other_roles() {
        let actor = Actor::new(7, Role::Reviewer);
        assert!(actor.require(Role::Reviewer).is_ok());
        assert!(matches!(
            actor.require(Role::Admin),
            Err(CoreError::Forbidden(_))
        ));
    }
}
