//! # ZoneKit Designer
//!
//! Interactive editing of a store's delivery zones. The editor owns the
//! zone set while it is open and moves between three modes:
//!
//! - **Idle**: nothing selected.
//! - **Editing**: one zone's draft is open for form edits.
//! - **Dragging**: a radius zone is being resized from the map.
//!
//! Only one zone is ever edited at a time. Changes stay in the draft until
//! committed, and committed changes reach the store through the async save
//! handoff.
//!
//! ## Architecture
//!
//! ```text
//! MapEvent ──▶ ZoneEditor (state machine + draft) ──▶ render() ──▶ DrawCommand
//!                    │
//!                    └── save_to(ZoneConfigStore)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zonekit_core::{LatLng, ZoneType};
//! use zonekit_designer::{render, ZoneEditor};
//!
//! let mut editor = ZoneEditor::new(LatLng::new(-15.78, -47.93));
//! let draft = editor
//!     .start_create(ZoneType::Radius)
//!     .with_name("Centro")
//!     .with_delivery_fee(5.0);
//! editor.commit_create(draft)?;
//!
//! for command in render(&editor) {
//!     // hand to the map
//! }
//! ```

pub mod commands;
pub mod draft;
pub mod editor_state;
pub mod renderer;

pub use commands::{MapEvent, MapEventOutcome, PointerTarget};
pub use draft::{ZoneDraft, ZoneUpdate};
pub use editor_state::{
    DragUpdate, InteractionState, SaveReceipt, SaveSnapshot, ZoneEditor, DEFAULT_RADIUS_M,
};
pub use renderer::{render, render_draft, DetachedSurface, DrawCommand, MapSurface, OverlayStyle};
