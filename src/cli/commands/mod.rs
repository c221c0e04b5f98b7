//! Command implementations for `rb`.

pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod render;
pub mod show;
pub mod version;
