//! Runtime configuration loaded from environment variables.
//!
//! The admin credential pair deliberately lives here, at the operator's
//! trusted boundary, instead of being compiled into the core library.

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file backing the key-value store.
    pub data_path: String,
    /// Administrator username (default `admin`).
    pub admin_username: String,
    /// Administrator password; required, no default.
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            data_path: std::env::var("DATA_PATH")
                .unwrap_or_else(|_| "./showcase-data.json".to_string()),
            admin_username: std::env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| "admin".to_string()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .context("ADMIN_PASSWORD environment variable is required")?,
        })
    }
}
