//! Tape Sprocket Designer Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;

pub use config::{Config, APP_DIR_NAME, CONFIG_FILE_NAME};
