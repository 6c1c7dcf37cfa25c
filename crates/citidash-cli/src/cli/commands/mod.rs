//! CLI command handlers.

pub mod check;
pub mod config;
pub mod dashboard;
pub mod extract;
pub mod pages;
