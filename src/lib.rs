//! # ZoneKit
//!
//! Delivery-zone authoring and checkout-time resolution for storefronts.
//!
//! ## Architecture
//!
//! ZoneKit is organized as a workspace with multiple crates:
//!
//! 1. **zonekit-core** - Zone model, normalization, geometry, resolution
//! 2. **zonekit-designer** - Zone editor state machine and map overlays
//! 3. **zonekit-settings** - Store configuration file and file-backed zone store
//! 4. **zonekit** - Command-line binary that integrates all crates
//!
//! ## Features
//!
//! - **Zone shapes**: circles (centre + radius) and free polygons
//! - **Legacy data**: both coordinate layouts found in stored configurations
//! - **Checkout**: first-match-wins resolution over active zones
//! - **Editing**: one zone at a time, drag-to-resize, validated commits

pub mod cli;

pub use zonekit_designer as designer;
pub use zonekit_settings as settings;

pub use zonekit_core::{
    resolve_zone, DeliveryPolicy, DeliveryQuote, DeliveryZone, EditorError, LatLng, ZoneId,
    ZoneResolution, ZoneShape, ZoneType,
};
pub use zonekit_designer::{render, DrawCommand, MapEvent, ZoneEditor};
pub use zonekit_settings::{FileZoneStore, StoreConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Opens an editor over a store's configured zones.
///
/// Malformed zone records are skipped with a warning.
pub fn open_editor(config: &StoreConfig) -> ZoneEditor {
    let report = config.zone_report();
    for rejected in &report.rejected {
        tracing::warn!("{}", rejected);
    }
    ZoneEditor::with_zones(config.store.location, report.zones)
        .with_default_radius(config.editor.default_radius_m)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout to command results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
