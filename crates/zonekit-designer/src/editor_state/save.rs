//! Handing the zone set to the store-configuration service.
//!
//! While a save is in flight, editor operations return
//! [`EditorError::SaveInFlight`]. Cancelling an edit and continuing or
//! ending a drag already under way stay available; they only touch the
//! draft. A failed save leaves the zone set untouched for a retry.

use chrono::{DateTime, Utc};
use serde::Serialize;
use zonekit_core::{DeliveryZone, EditorError, PersistenceError, ZoneConfigStore};

use super::ZoneEditor;

/// The zone set captured at the start of a save.
#[derive(Debug, Clone)]
pub struct SaveSnapshot {
    pub zones: Vec<DeliveryZone>,
    pub revision: u64,
}

/// Confirmation of a completed save.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReceipt {
    pub zone_count: usize,
    pub revision: u64,
    pub saved_at: DateTime<Utc>,
}

impl ZoneEditor {
    /// Captures the committed zone set and disables edits until
    /// [`ZoneEditor::complete_save`] is called.
    ///
    /// Open drafts are not part of the snapshot.
    pub fn begin_save(&mut self) -> Result<SaveSnapshot, EditorError> {
        self.ensure_editable()?;
        self.save_in_flight = true;
        tracing::debug!(
            "Saving {} zones at revision {}",
            self.zones.len(),
            self.revision
        );
        Ok(SaveSnapshot {
            zones: self.zones.clone(),
            revision: self.revision,
        })
    }

    /// Re-enables edits and records the outcome of the external save.
    pub fn complete_save(
        &mut self,
        snapshot: &SaveSnapshot,
        result: Result<(), PersistenceError>,
    ) -> Result<SaveReceipt, EditorError> {
        self.save_in_flight = false;
        match result {
            Ok(()) => {
                self.saved_revision = snapshot.revision;
                tracing::info!(
                    "Saved {} zones at revision {}",
                    snapshot.zones.len(),
                    snapshot.revision
                );
                Ok(SaveReceipt {
                    zone_count: snapshot.zones.len(),
                    revision: snapshot.revision,
                    saved_at: Utc::now(),
                })
            }
            Err(err) => {
                tracing::warn!("Saving zones failed, keeping local changes: {}", err);
                Err(err.into())
            }
        }
    }

    /// Saves the committed zone set to `store`.
    pub async fn save_to(
        &mut self,
        store: &dyn ZoneConfigStore,
    ) -> Result<SaveReceipt, EditorError> {
        let snapshot = self.begin_save()?;
        let result = store.save_zones(&snapshot.zones).await;
        self.complete_save(&snapshot, result)
    }
}
