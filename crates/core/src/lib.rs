pub mod article;
pub mod diff;
pub mod error;
pub mod ledger;
pub mod lifecycle;
pub mod reconstruct;
pub mod roles;
pub mod store;
pub mod tokenizer;
pub mod types;
pub mod user;
pub mod workflow;
