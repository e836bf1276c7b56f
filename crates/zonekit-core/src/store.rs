//! Store-configuration service interface
//!
//! The zone editor never writes to storage itself; it hands the full zone
//! set to an implementation of [`ZoneConfigStore`].

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::data::{DeliveryZone, RawZone};
use crate::error::PersistenceError;

/// External store-configuration service holding a store's zones.
#[async_trait]
pub trait ZoneConfigStore: Send + Sync {
    /// Reads the persisted zone records, possibly in legacy layout.
    async fn load_zones(&self) -> Result<Vec<RawZone>, PersistenceError>;

    /// Replaces the persisted zone set with `zones`.
    async fn save_zones(&self, zones: &[DeliveryZone]) -> Result<(), PersistenceError>;
}

/// Process-local store, used by tests and as a scratch backend.
#[derive(Debug, Default)]
pub struct InMemoryZoneStore {
    zones: RwLock<Vec<RawZone>>,
    saves: RwLock<usize>,
}

impl InMemoryZoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with persisted records.
    pub fn with_records(records: Vec<RawZone>) -> Self {
        Self {
            zones: RwLock::new(records),
            saves: RwLock::new(0),
        }
    }

    /// Snapshot of the persisted records.
    pub fn records(&self) -> Vec<RawZone> {
        self.zones.read().clone()
    }

    /// Number of completed saves.
    pub fn save_count(&self) -> usize {
        *self.saves.read()
    }
}

#[async_trait]
impl ZoneConfigStore for InMemoryZoneStore {
    async fn load_zones(&self) -> Result<Vec<RawZone>, PersistenceError> {
        Ok(self.zones.read().clone())
    }

    async fn save_zones(&self, zones: &[DeliveryZone]) -> Result<(), PersistenceError> {
        *self.zones.write() = zones.iter().map(RawZone::from).collect();
        *self.saves.write() += 1;
        Ok(())
    }
}
