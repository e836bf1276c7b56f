//! Map events from the rendering adapter.
//!
//! The adapter forwards raw pointer and vertex events here and redraws with
//! [`crate::renderer::render`] afterwards. Rings arrive in the mapping
//! library's `[lng, lat]` order and are converted once on entry.

use serde::{Deserialize, Serialize};
use zonekit_core::{canonical_ring, EditorError, LatLng, ZoneId};

use crate::editor_state::{DragUpdate, ZoneEditor};

/// What the pointer landed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerTarget {
    /// Inside a zone overlay.
    Body(ZoneId),
    /// On the resize handle of a radius zone.
    Edge(ZoneId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MapEvent {
    #[serde(rename_all = "camelCase")]
    PointerDown {
        target: Option<PointerTarget>,
        at: LatLng,
    },
    PointerMove {
        at: LatLng,
    },
    PointerUp {
        at: LatLng,
    },
    /// The user moved, added or removed polygon vertices.
    #[serde(rename_all = "camelCase")]
    VertexEdited {
        zone_id: ZoneId,
        ring: Vec<[f64; 2]>,
    },
}

/// Effect of a handled [`MapEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum MapEventOutcome {
    /// Nothing changed.
    Ignored,
    Selected { zone_id: ZoneId },
    DragStarted { zone_id: ZoneId },
    DragUpdated(DragUpdate),
    /// Final radius of the drag, in metres.
    DragEnded { radius: u32 },
    RingUpdated { zone_id: ZoneId },
}

impl ZoneEditor {
    /// Routes one map event into the editor operations.
    ///
    /// Pointer moves and releases outside a drag are ignored. A release
    /// applies its position before leaving the drag so the last movement is
    /// never lost.
    pub fn handle_map_event(&mut self, event: MapEvent) -> Result<MapEventOutcome, EditorError> {
        match event {
            MapEvent::PointerDown { target: None, .. } => Ok(MapEventOutcome::Ignored),
            MapEvent::PointerDown {
                target: Some(PointerTarget::Body(zone_id)),
                ..
            } => {
                self.select_for_edit(&zone_id)?;
                Ok(MapEventOutcome::Selected { zone_id })
            }
            MapEvent::PointerDown {
                target: Some(PointerTarget::Edge(zone_id)),
                at,
            } => {
                self.begin_drag(&zone_id, at)?;
                Ok(MapEventOutcome::DragStarted { zone_id })
            }
            MapEvent::PointerMove { at } => {
                if !self.state().is_dragging() {
                    return Ok(MapEventOutcome::Ignored);
                }
                Ok(MapEventOutcome::DragUpdated(self.update_drag(at)?))
            }
            MapEvent::PointerUp { at } => {
                if !self.state().is_dragging() {
                    return Ok(MapEventOutcome::Ignored);
                }
                let update = self.update_drag(at)?;
                self.end_drag()?;
                Ok(MapEventOutcome::DragEnded {
                    radius: update.radius,
                })
            }
            MapEvent::VertexEdited { zone_id, ring } => {
                self.edit_polygon_ring(&zone_id, canonical_ring(ring))?;
                Ok(MapEventOutcome::RingUpdated { zone_id })
            }
        }
    }
}
