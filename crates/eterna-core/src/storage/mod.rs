//! Persistence: the key-value store behind [`AppState`], and the TOML config.
//!
//! Values are flat JSON blobs under a handful of fixed keys. The store is
//! a collaborator: [`Database`] keeps them in SQLite, [`MemoryStore`] in a
//! map for tests and throwaway sessions.

mod config;
pub mod database;
mod memory;
mod state;

pub use config::{Config, GamesConfig, MeditationConfig};
pub use database::Database;
pub use memory::MemoryStore;
pub use state::{keys, AppState, GameScores};

use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Get/set of JSON blobs by key.
pub trait KvStore {
    fn kv_get(&self, key: &str) -> Result<Option<String>>;
    fn kv_set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Returns the data directory, creating it if needed.
///
/// `ETERNA_DATA_DIR` wins when set. Otherwise `~/.config/eterna[-dev]/`,
/// where `ETERNA_ENV=dev` selects the development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("ETERNA_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("ETERNA_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("eterna-dev")
            } else {
                base_dir.join("eterna")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
