//! ZoneKit Settings Crate
//!
//! Handles the store configuration file and file-backed zone persistence.

pub mod config;
pub mod error;
pub mod file_store;

pub use config::{ConfigFormat, EditorSettings, StoreConfig, StoreSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use file_store::FileZoneStore;
