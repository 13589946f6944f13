//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `ADMIN` role.
//! - [`rbac::RequireAuthor`] -- Requires the `AUTHOR` role.
//! - [`rbac::RequireReviewer`] -- Requires the `REVIEWER` role.

pub mod auth;
pub mod rbac;
