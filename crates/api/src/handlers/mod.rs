pub mod admin;
pub mod auth;
pub mod author;
pub mod changes;
pub mod feed;
pub mod reviewer;
