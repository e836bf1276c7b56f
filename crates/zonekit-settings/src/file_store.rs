//! Zone persistence backed by the store configuration file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use zonekit_core::{DeliveryZone, PersistenceError, RawZone, ZoneConfigStore};

use crate::config::{ConfigFormat, StoreConfig};
use crate::error::SettingsResult;

/// [`ZoneConfigStore`] that reads and rewrites the `zones` section of a
/// store configuration file, leaving the other sections intact.
///
/// A missing file loads as an empty zone set and is created on first save.
#[derive(Debug, Clone)]
pub struct FileZoneStore {
    path: PathBuf,
    format: ConfigFormat,
}

impl FileZoneStore {
    pub fn new(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        let format = ConfigFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_config(&self) -> SettingsResult<Option<StoreConfig>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(StoreConfig::parse(&content, self.format)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_config(&self, config: &StoreConfig) -> SettingsResult<()> {
        let content = config.render(self.format)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        // Atomic replace through a sibling temp file.
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ZoneConfigStore for FileZoneStore {
    async fn load_zones(&self) -> Result<Vec<RawZone>, PersistenceError> {
        let zones = self
            .read_config()
            .await?
            .map(|config| config.zones)
            .unwrap_or_default();
        tracing::debug!("Read {} zone records from {}", zones.len(), self.path.display());
        Ok(zones)
    }

    async fn save_zones(&self, zones: &[DeliveryZone]) -> Result<(), PersistenceError> {
        let mut config = self
            .read_config()
            .await
            .map_err(|e| {
                tracing::warn!("Reading {} before save failed: {}", self.path.display(), e);
                PersistenceError::SaveFailed {
                    reason: e.to_string(),
                }
            })?
            .unwrap_or_default();
        config.set_zones(zones);
        self.write_config(&config).await.map_err(|e| {
            tracing::warn!("Writing zones to {} failed: {}", self.path.display(), e);
            PersistenceError::SaveFailed {
                reason: e.to_string(),
            }
        })?;
        tracing::info!("Wrote {} zones to {}", zones.len(), self.path.display());
        Ok(())
    }
}
