//! Zone editor state machine.
//!
//! Owns the zone set while the editor is open, tracks which zone (if any)
//! is being edited, and holds that zone's draft. Rendering is a pure
//! function of this state (see [`crate::renderer`]).
//!
//! ```text
//! Idle ──select──▶ Editing ──pointer down on edge──▶ Dragging
//!  ▲  ╲                │ ▲                              │
//!  │   ╲───────────────┼─┼──── pointer down on edge ────┤
//!  │                   │ └────────── pointer up ─────────┘
//!  └── save / cancel ──┘
//! ```

mod drag;
mod save;

pub use drag::DragUpdate;
pub use save::{SaveReceipt, SaveSnapshot};

use std::fmt;

use zonekit_core::{
    canonical_ring, normalize_zones, open_ring, palette_color, DeliveryZone, EditorError, LatLng,
    MalformedZoneError, PersistenceError, ZoneConfigStore, ZoneId, ZoneShape, ZoneType,
};

use crate::draft::{ZoneDraft, ZoneUpdate};
use crate::renderer::MapSurface;

/// Default radius for new circular zones, in metres.
pub const DEFAULT_RADIUS_M: u32 = 1000;

/// Half-width in degrees of the square a new polygon zone starts as.
const NEW_POLYGON_HALF_SIZE_DEG: f64 = 0.005;

/// Interaction mode of the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState {
    /// No zone selected.
    Idle,
    /// A zone is selected and its form fields are being edited.
    Editing { zone_id: ZoneId },
    /// The pointer is resizing a radius zone around `pivot`.
    Dragging { zone_id: ZoneId, pivot: LatLng },
}

impl InteractionState {
    /// Zone currently in `Editing` or `Dragging`.
    pub fn active_zone_id(&self) -> Option<&ZoneId> {
        match self {
            Self::Idle => None,
            Self::Editing { zone_id } | Self::Dragging { zone_id, .. } => Some(zone_id),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Editing { .. } => write!(f, "editing"),
            Self::Dragging { .. } => write!(f, "dragging"),
        }
    }
}

/// Delivery-zone editor for one store.
#[derive(Debug, Clone)]
pub struct ZoneEditor {
    zones: Vec<DeliveryZone>,
    state: InteractionState,
    draft: Option<ZoneDraft>,
    store_location: LatLng,
    default_radius_m: u32,
    revision: u64,
    saved_revision: u64,
    save_in_flight: bool,
}

impl ZoneEditor {
    /// Creates an editor with no zones for a store at `store_location`.
    pub fn new(store_location: LatLng) -> Self {
        Self::with_zones(store_location, Vec::new())
    }

    /// Creates an editor over an already-normalized zone set.
    pub fn with_zones(store_location: LatLng, zones: Vec<DeliveryZone>) -> Self {
        Self {
            zones,
            state: InteractionState::Idle,
            draft: None,
            store_location,
            default_radius_m: DEFAULT_RADIUS_M,
            revision: 0,
            saved_revision: 0,
            save_in_flight: false,
        }
    }

    /// Sets the radius new circular zones start with.
    pub fn with_default_radius(mut self, radius_m: u32) -> Self {
        self.default_radius_m = radius_m.min(zonekit_core::MAX_RADIUS_M);
        self
    }

    /// Loads the store's zones, skipping malformed records.
    ///
    /// Skipped records are returned so the caller can surface a warning;
    /// the rest of the configuration stays usable.
    pub async fn load_from(
        store_location: LatLng,
        store: &dyn ZoneConfigStore,
    ) -> Result<(Self, Vec<MalformedZoneError>), PersistenceError> {
        let raws = store.load_zones().await?;
        let report = normalize_zones(&raws);
        tracing::info!(
            "Zone editor loaded {} zones ({} skipped)",
            report.zones.len(),
            report.rejected.len()
        );
        Ok((Self::with_zones(store_location, report.zones), report.rejected))
    }

    /// Committed zones in priority order.
    pub fn zones(&self) -> &[DeliveryZone] {
        &self.zones
    }

    pub fn zone(&self, id: &ZoneId) -> Option<&DeliveryZone> {
        self.zones.iter().find(|z| &z.id == id)
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Draft of the zone being edited, if any.
    pub fn draft(&self) -> Option<&ZoneDraft> {
        self.draft.as_ref()
    }

    pub fn store_location(&self) -> LatLng {
        self.store_location
    }

    /// Bumped on every change to the committed zone set.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Committed changes exist that have not been saved.
    pub fn is_dirty(&self) -> bool {
        self.revision != self.saved_revision
    }

    pub fn is_save_in_flight(&self) -> bool {
        self.save_in_flight
    }

    /// Begins a new zone of the given shape. The zone set is not touched
    /// until [`ZoneEditor::commit_create`].
    pub fn start_create(&self, zone_type: ZoneType) -> ZoneDraft {
        let c = self.store_location;
        let shape = match zone_type {
            ZoneType::Radius => ZoneShape::Radius {
                center: c,
                radius: self.default_radius_m,
            },
            ZoneType::Polygon => {
                let d = NEW_POLYGON_HALF_SIZE_DEG;
                ZoneShape::Polygon {
                    coordinates: vec![
                        LatLng::new(c.lat + d, c.lng - d),
                        LatLng::new(c.lat + d, c.lng + d),
                        LatLng::new(c.lat - d, c.lng + d),
                        LatLng::new(c.lat - d, c.lng - d),
                    ],
                }
            }
        };
        tracing::debug!("Started {} zone draft", zone_type);
        ZoneDraft::new(shape)
    }

    /// Validates `draft` and appends it as a new zone.
    ///
    /// The zone gets a fresh id and the next palette colour. On validation
    /// failure the zone set is unchanged.
    pub fn commit_create(&mut self, draft: ZoneDraft) -> Result<&DeliveryZone, EditorError> {
        self.ensure_editable()?;
        draft.validate()?;

        let id = ZoneId::generate();
        let color = palette_color(self.zones.len()).to_string();
        let zone = draft.into_zone(id, color);
        tracing::info!("Created {} zone {} ({})", zone.zone_type(), zone.id, zone.name);

        self.zones.push(zone);
        self.touch();
        let index = self.zones.len() - 1;
        Ok(&self.zones[index])
    }

    /// Selects a zone for editing.
    ///
    /// Pending changes of any other zone being edited are discarded; edits
    /// are never merged across zones. Selecting the zone already being
    /// edited keeps its draft.
    pub fn select_for_edit(&mut self, id: &ZoneId) -> Result<(), EditorError> {
        self.ensure_editable()?;
        let zone = self.find(id)?;

        if self.state.active_zone_id() == Some(id) {
            if self.state.is_dragging() {
                self.state = InteractionState::Editing { zone_id: id.clone() };
            }
            return Ok(());
        }

        let draft = ZoneDraft::from_zone(zone);
        if let Some(previous) = self.state.active_zone_id() {
            tracing::debug!("Discarding pending edits of zone {}", previous);
        }
        self.draft = Some(draft);
        self.state = InteractionState::Editing { zone_id: id.clone() };
        tracing::debug!("Editing zone {}", id);
        Ok(())
    }

    /// Applies form changes to the draft without committing them.
    pub fn update_draft(&mut self, id: &ZoneId, update: &ZoneUpdate) -> Result<(), EditorError> {
        self.ensure_editable()?;
        self.active_draft_mut(id)?.apply(update);
        Ok(())
    }

    /// Replaces the draft ring of a polygon zone after vertex edits on the map.
    pub fn edit_polygon_ring(&mut self, id: &ZoneId, ring: Vec<LatLng>) -> Result<(), EditorError> {
        self.ensure_editable()?;
        let draft = self.active_draft_mut(id)?;
        match &mut draft.shape {
            ZoneShape::Polygon { coordinates } => {
                *coordinates = open_ring(ring);
                Ok(())
            }
            ZoneShape::Radius { .. } => Err(EditorError::ShapeMismatch {
                zone_id: id.to_string(),
                expected: ZoneType::Polygon.to_string(),
            }),
        }
    }

    /// Applies `update`, validates, and replaces the committed zone.
    ///
    /// Polygon rings are re-read from `surface` because their vertices are
    /// edited directly on the map. On validation failure the editor stays in
    /// `Editing` with the draft kept for correction.
    pub fn commit_edit(
        &mut self,
        id: &ZoneId,
        update: &ZoneUpdate,
        surface: &dyn MapSurface,
    ) -> Result<&DeliveryZone, EditorError> {
        self.ensure_editable()?;
        if self.state.is_dragging() {
            return Err(EditorError::InvalidStateTransition {
                current: self.state.to_string(),
                requested: "idle".to_string(),
            });
        }

        let draft = self.active_draft_mut(id)?;
        draft.apply(update);
        if let ZoneShape::Polygon { coordinates } = &mut draft.shape {
            if let Some(ring) = surface.polygon_ring(id) {
                *coordinates = canonical_ring(ring);
            }
        }
        draft.validate()?;

        let index = self.index_of(id)?;
        let color = self.zones[index].color.clone();
        let draft = self
            .draft
            .take()
            .ok_or_else(|| EditorError::NotEditing {
                zone_id: id.to_string(),
            })?;
        self.zones[index] = draft.into_zone(id.clone(), color);
        self.state = InteractionState::Idle;
        self.touch();
        tracing::info!("Committed edits to zone {}", id);
        Ok(&self.zones[index])
    }

    /// Discards the draft and restores the zone's last committed values.
    pub fn cancel_edit(&mut self, id: &ZoneId) -> Result<(), EditorError> {
        if self.state.active_zone_id() != Some(id) {
            return Err(EditorError::NotEditing {
                zone_id: id.to_string(),
            });
        }
        self.draft = None;
        self.state = InteractionState::Idle;
        tracing::debug!("Cancelled edits to zone {}", id);
        Ok(())
    }

    /// Removes a zone, leaving edit mode first if it was being edited.
    pub fn remove_zone(&mut self, id: &ZoneId) -> Result<DeliveryZone, EditorError> {
        self.ensure_editable()?;
        let index = self.index_of(id)?;
        if self.state.active_zone_id() == Some(id) {
            self.draft = None;
            self.state = InteractionState::Idle;
        }
        let removed = self.zones.remove(index);
        self.touch();
        tracing::info!("Removed zone {} ({})", removed.id, removed.name);
        Ok(removed)
    }

    /// Moves a zone to `new_index` in the priority order.
    ///
    /// Resolution is first-match-wins, so this is how owners decide which
    /// of several overlapping zones applies. Indices past the end move the
    /// zone to the end.
    pub fn move_zone(&mut self, id: &ZoneId, new_index: usize) -> Result<(), EditorError> {
        self.ensure_editable()?;
        let index = self.index_of(id)?;
        let zone = self.zones.remove(index);
        let new_index = new_index.min(self.zones.len());
        self.zones.insert(new_index, zone);
        if index != new_index {
            self.touch();
            tracing::debug!("Moved zone {} from {} to {}", id, index, new_index);
        }
        Ok(())
    }

    /// Toggles whether a zone takes part in resolution.
    pub fn set_zone_active(&mut self, id: &ZoneId, active: bool) -> Result<(), EditorError> {
        self.ensure_editable()?;
        let index = self.index_of(id)?;
        if self.zones[index].is_active != active {
            self.zones[index].is_active = active;
            self.touch();
        }
        if let Some(draft) = self.draft.as_mut().filter(|d| d.id.as_ref() == Some(id)) {
            draft.is_active = active;
        }
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), EditorError> {
        if self.save_in_flight {
            return Err(EditorError::SaveInFlight);
        }
        Ok(())
    }

    fn find(&self, id: &ZoneId) -> Result<&DeliveryZone, EditorError> {
        self.zone(id).ok_or_else(|| EditorError::ZoneNotFound {
            zone_id: id.to_string(),
        })
    }

    fn index_of(&self, id: &ZoneId) -> Result<usize, EditorError> {
        self.zones
            .iter()
            .position(|z| &z.id == id)
            .ok_or_else(|| EditorError::ZoneNotFound {
                zone_id: id.to_string(),
            })
    }

    fn active_draft_mut(&mut self, id: &ZoneId) -> Result<&mut ZoneDraft, EditorError> {
        if self.state.active_zone_id() != Some(id) {
            return Err(EditorError::NotEditing {
                zone_id: id.to_string(),
            });
        }
        self.draft.as_mut().ok_or_else(|| EditorError::NotEditing {
            zone_id: id.to_string(),
        })
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
