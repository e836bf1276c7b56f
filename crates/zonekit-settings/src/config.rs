//! Store configuration file.
//!
//! One file per store holds the store's location and delivery defaults,
//! editor preferences, and the persisted zone records. Zones are kept in
//! the raw layout existing deployments already write; they are only
//! normalized when read through [`StoreConfig::zone_report`].

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zonekit_core::{
    normalize_zones, DeliveryPolicy, DeliveryZone, LatLng, RawZone, ZoneLoadReport,
    DEFAULT_CIRCLE_STEPS, MAX_RADIUS_M,
};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Serialization format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Store location and checkout defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Store display name
    pub name: String,
    /// Where new zones are centred
    pub location: LatLng,
    /// Fee charged when checkout is not limited by any zone
    pub default_delivery_fee: f64,
    /// Accept addresses outside every active zone at the default fee
    pub accept_orders_outside_zones: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            name: "My Store".to_string(),
            location: LatLng::new(0.0, 0.0),
            default_delivery_fee: 0.0,
            accept_orders_outside_zones: false,
        }
    }
}

/// Zone editor preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Radius new circular zones start with, in metres
    pub default_radius_m: u32,
    /// Vertices used when exporting circles as polygons
    pub circle_steps: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_radius_m: 1000,
            circle_steps: DEFAULT_CIRCLE_STEPS,
        }
    }
}

/// Complete store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoreConfig {
    /// Last time the zone set was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub store: StoreSettings,
    pub editor: EditorSettings,
    /// Persisted zone records in priority order
    pub zones: Vec<RawZone>,
}

impl StoreConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform location of the default configuration file.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })?;
        Ok(dir.join("zonekit").join("store.json"))
    }

    /// Parse config text in the given format and validate it.
    pub fn parse(content: &str, format: ConfigFormat) -> SettingsResult<Self> {
        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate and render config text in the given format.
    pub fn render(&self, format: ConfigFormat) -> SettingsResult<String> {
        self.validate()?;
        Ok(match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;
        let config = Self::parse(&content, format)?;
        tracing::info!(
            "Loaded store config from {} ({} zone records)",
            path.display(),
            config.zones.len()
        );
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let content = self.render(ConfigFormat::from_path(path)?)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Saved store config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    ///
    /// Zone records are not checked here; malformed ones are skipped when
    /// the zones are normalized.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "store.name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if !self.store.location.is_valid() {
            return Err(ConfigError::ValueOutOfRange {
                key: "store.location".to_string(),
                value: self.store.location.to_string(),
            }
            .into());
        }

        let fee = self.store.default_delivery_fee;
        if !fee.is_finite() || fee < 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "store.default_delivery_fee".to_string(),
                value: fee.to_string(),
            }
            .into());
        }

        let radius = self.editor.default_radius_m;
        if radius == 0 || radius > MAX_RADIUS_M {
            return Err(ConfigError::ValueOutOfRange {
                key: "editor.default_radius_m".to_string(),
                value: radius.to_string(),
            }
            .into());
        }

        if self.editor.circle_steps < 3 {
            return Err(SettingsError::InvalidSetting {
                key: "editor.circle_steps".to_string(),
                reason: "must be at least 3".to_string(),
            });
        }

        Ok(())
    }

    /// Normalized zones plus the records that had to be skipped.
    pub fn zone_report(&self) -> ZoneLoadReport {
        normalize_zones(&self.zones)
    }

    /// Replaces the persisted zones and stamps the update time.
    pub fn set_zones(&mut self, zones: &[DeliveryZone]) {
        self.zones = zones.iter().map(RawZone::from).collect();
        self.updated_at = Some(Utc::now());
    }

    /// Checkout policy for this store.
    pub fn policy(&self) -> DeliveryPolicy {
        DeliveryPolicy {
            default_delivery_fee: self.store.default_delivery_fee,
            accept_orders_outside_zones: self.store.accept_orders_outside_zones,
        }
    }
}
