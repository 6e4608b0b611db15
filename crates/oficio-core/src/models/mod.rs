//! Data models for extracted records, letter requests and configuration.

pub mod config;
pub mod letter;
pub mod record;
