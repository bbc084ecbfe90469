//! Core infrastructure

pub mod config;

pub use config::{Config, ConfigFallback};
