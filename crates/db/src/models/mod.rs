//! Row structs for the `articles` and `users` tables.
//!
//! Each row stores enums as their wire strings and converts into the
//! corresponding `redpen_core` type with `TryFrom`, failing with
//! `CoreError::Internal` on a value the CHECK constraints should have
//! prevented.

pub mod article;
pub mod user;
