//! Map overlay commands for the zone editor.
//!
//! The map adapter redraws from scratch after every editor change: the
//! overlay list is a pure function of the committed zones and the
//! interaction state, so there is no adapter-side state to drift. Positions
//! leave this module in the mapping library's `[lng, lat]` order.

use serde::Serialize;
use zonekit_core::{LatLng, ZoneId, ZoneShape};

use crate::draft::ZoneDraft;
use crate::editor_state::ZoneEditor;

const FILL_OPACITY_ACTIVE: f32 = 0.25;
const FILL_OPACITY_INACTIVE: f32 = 0.08;
const FILL_OPACITY_SELECTED: f32 = 0.4;
const STROKE_WEIGHT: f32 = 2.0;
const STROKE_WEIGHT_SELECTED: f32 = 3.0;
const DRAFT_COLOR: &str = "#64748b";

/// Read-back access to the map for shapes edited by direct manipulation.
pub trait MapSurface {
    /// Current vertices of a polygon overlay, in `[lng, lat]` order.
    fn polygon_ring(&self, zone_id: &ZoneId) -> Option<Vec<[f64; 2]>>;
}

/// A surface with no overlays; drafts keep the rings the editor already holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedSurface;

impl MapSurface for DetachedSurface {
    fn polygon_ring(&self, _zone_id: &ZoneId) -> Option<Vec<[f64; 2]>> {
        None
    }
}

/// How an overlay is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayStyle {
    pub color: String,
    pub fill_opacity: f32,
    pub stroke_weight: f32,
    /// The zone is selected for editing.
    pub highlighted: bool,
    /// Handles are shown (radius edge or polygon vertices).
    pub editable: bool,
    /// The radius edge is being dragged.
    pub dragging: bool,
}

/// One overlay to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawCommand {
    #[serde(rename_all = "camelCase")]
    Circle {
        zone_id: Option<ZoneId>,
        center: [f64; 2],
        radius_m: u32,
        style: OverlayStyle,
    },
    #[serde(rename_all = "camelCase")]
    Polygon {
        zone_id: Option<ZoneId>,
        /// Open ring; the mapping library closes it.
        ring: Vec<[f64; 2]>,
        style: OverlayStyle,
    },
}

impl DrawCommand {
    pub fn zone_id(&self) -> Option<&ZoneId> {
        match self {
            Self::Circle { zone_id, .. } | Self::Polygon { zone_id, .. } => zone_id.as_ref(),
        }
    }

    pub fn style(&self) -> &OverlayStyle {
        match self {
            Self::Circle { style, .. } | Self::Polygon { style, .. } => style,
        }
    }
}

fn shape_command(zone_id: Option<ZoneId>, shape: &ZoneShape, style: OverlayStyle) -> DrawCommand {
    match shape {
        ZoneShape::Radius { center, radius } => DrawCommand::Circle {
            zone_id,
            center: center.to_lng_lat(),
            radius_m: *radius,
            style,
        },
        ZoneShape::Polygon { coordinates } => DrawCommand::Polygon {
            zone_id,
            ring: coordinates.iter().map(LatLng::to_lng_lat).collect(),
            style,
        },
    }
}

/// Overlays for every zone in priority order.
///
/// The zone being edited is drawn from its draft, so form changes and
/// drags show up before they are committed.
pub fn render(editor: &ZoneEditor) -> Vec<DrawCommand> {
    let active = editor.state().active_zone_id();
    let dragging = editor.state().is_dragging();

    editor
        .zones()
        .iter()
        .map(|zone| {
            let selected = active == Some(&zone.id);
            let (shape, is_active) = match editor.draft().filter(|_| selected) {
                Some(draft) => (&draft.shape, draft.is_active),
                None => (&zone.shape, zone.is_active),
            };
            let style = OverlayStyle {
                color: zone.color.clone(),
                fill_opacity: if selected {
                    FILL_OPACITY_SELECTED
                } else if is_active {
                    FILL_OPACITY_ACTIVE
                } else {
                    FILL_OPACITY_INACTIVE
                },
                stroke_weight: if selected {
                    STROKE_WEIGHT_SELECTED
                } else {
                    STROKE_WEIGHT
                },
                highlighted: selected,
                editable: selected,
                dragging: selected && dragging,
            };
            shape_command(Some(zone.id.clone()), shape, style)
        })
        .collect()
}

/// Overlay for a zone that is being created and has no id yet.
pub fn render_draft(draft: &ZoneDraft) -> DrawCommand {
    let style = OverlayStyle {
        color: DRAFT_COLOR.to_string(),
        fill_opacity: FILL_OPACITY_SELECTED,
        stroke_weight: STROKE_WEIGHT_SELECTED,
        highlighted: true,
        editable: true,
        dragging: false,
    };
    shape_command(draft.id.clone(), &draft.shape, style)
}
