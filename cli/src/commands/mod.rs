pub mod completions;
pub mod config;
pub mod filters;
pub mod group;
pub mod init;
pub mod recipe;
