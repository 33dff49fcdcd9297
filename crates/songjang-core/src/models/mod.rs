//! Data models for order records and configuration.

pub mod config;
pub mod order;
