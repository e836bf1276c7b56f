//! Drag-to-resize for radius zones.

use serde::Serialize;
use zonekit_core::{
    haversine_distance, EditorError, LatLng, ZoneId, ZoneShape, ZoneType, MAX_RADIUS_M,
};

use super::{InteractionState, ZoneEditor};

/// Radius produced by one pointer-move during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DragUpdate {
    /// Radius now held by the draft, in metres.
    pub radius: u32,
    /// The pointer implied a radius beyond the allowed range.
    pub clamped: bool,
}

impl ZoneEditor {
    /// Starts resizing a radius zone.
    ///
    /// Valid from `Idle` or `Editing`. Starting on a zone other than the
    /// one being edited discards that zone's pending changes first.
    pub fn begin_drag(&mut self, id: &ZoneId, pointer: LatLng) -> Result<(), EditorError> {
        self.ensure_editable()?;
        if self.state.is_dragging() {
            return Err(EditorError::InvalidStateTransition {
                current: self.state.to_string(),
                requested: "dragging".to_string(),
            });
        }
        if self.find(id)?.zone_type() != ZoneType::Radius {
            return Err(EditorError::ShapeMismatch {
                zone_id: id.to_string(),
                expected: ZoneType::Radius.to_string(),
            });
        }

        self.select_for_edit(id)?;
        let pivot = match self.draft.as_ref().map(|d| &d.shape) {
            Some(ZoneShape::Radius { center, .. }) => *center,
            _ => {
                return Err(EditorError::NotEditing {
                    zone_id: id.to_string(),
                })
            }
        };

        self.state = InteractionState::Dragging {
            zone_id: id.clone(),
            pivot,
        };
        tracing::debug!("Dragging zone {} from pointer {} around {}", id, pointer, pivot);
        Ok(())
    }

    /// Recomputes the draft radius from the pointer position.
    ///
    /// Applied on every pointer-move. Radii outside `0..=50_000` m are
    /// clamped, never rejected, to keep the interaction fluid.
    pub fn update_drag(&mut self, pointer: LatLng) -> Result<DragUpdate, EditorError> {
        let InteractionState::Dragging { zone_id, pivot } = &self.state else {
            return Err(EditorError::InvalidStateTransition {
                current: self.state.to_string(),
                requested: "dragging".to_string(),
            });
        };

        let meters = (haversine_distance(*pivot, pointer) * 1000.0).round();
        let clamped = !(0.0..=f64::from(MAX_RADIUS_M)).contains(&meters);
        let radius = meters.clamp(0.0, f64::from(MAX_RADIUS_M)) as u32;
        if clamped {
            tracing::debug!(
                "Drag radius {} m for zone {} clamped to {} m",
                meters,
                zone_id,
                radius
            );
        }

        if let Some(ZoneShape::Radius { radius: r, .. }) = self.draft.as_mut().map(|d| &mut d.shape)
        {
            *r = radius;
        }
        Ok(DragUpdate { radius, clamped })
    }

    /// Stops resizing. The new radius stays in the draft until committed.
    pub fn end_drag(&mut self) -> Result<(), EditorError> {
        let InteractionState::Dragging { zone_id, .. } = &self.state else {
            return Err(EditorError::InvalidStateTransition {
                current: self.state.to_string(),
                requested: "editing".to_string(),
            });
        };
        let zone_id = zone_id.clone();
        tracing::debug!("Finished dragging zone {}", zone_id);
        self.state = InteractionState::Editing { zone_id };
        Ok(())
    }
}
