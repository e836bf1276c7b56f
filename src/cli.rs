//! Command-line entry points.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use zonekit_core::{resolve_zone, zones_to_feature_collection, DeliveryQuote, LatLng, ZoneResolution};
use zonekit_designer::ZoneEditor;
use zonekit_settings::{FileZoneStore, StoreConfig};

#[derive(Debug, Parser)]
#[command(name = "zonekit", version)]
#[command(about = "Delivery zones for storefronts")]
#[command(after_help = "Environment:\n  RUST_LOG   Log filter (logs go to stderr)")]
pub struct Cli {
    /// Store configuration file (.json or .toml); defaults to <config dir>/zonekit/store.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Resolve an address against the store's zones
    Resolve {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
    /// Print the zones as a GeoJSON FeatureCollection
    Export,
    /// Report zone records that cannot be loaded
    Check,
}

impl Cli {
    /// The configured store file, or the platform default.
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(StoreConfig::default_path()?),
        }
    }
}

/// Result of a command: text for stdout and whether it succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveOutput {
    resolution: ZoneResolution,
    quote: DeliveryQuote,
}

pub async fn run(cli: Cli) -> anyhow::Result<CommandOutput> {
    let config = cli.config_path()?;
    match cli.command {
        Command::Resolve { lat, lng } => resolve(&config, LatLng::new(lat, lng)),
        Command::Export => export(&config),
        Command::Check => check(config).await,
    }
}

fn load_config(path: &Path) -> anyhow::Result<StoreConfig> {
    StoreConfig::load_from_file(path)
        .with_context(|| format!("failed to load store config {}", path.display()))
}

fn resolve(path: &Path, point: LatLng) -> anyhow::Result<CommandOutput> {
    if !point.is_valid() {
        bail!("coordinates out of range: {point}");
    }
    let config = load_config(path)?;
    let zones = config.zone_report().zones;

    let output = ResolveOutput {
        resolution: resolve_zone(point, &zones),
        quote: config.policy().quote(point, &zones),
    };
    tracing::info!("Resolved {} against {} zones", point, zones.len());
    Ok(CommandOutput {
        success: output.quote.is_deliverable(),
        text: serde_json::to_string_pretty(&output)?,
    })
}

fn export(path: &Path) -> anyhow::Result<CommandOutput> {
    let config = load_config(path)?;
    let zones = config.zone_report().zones;
    let collection = zones_to_feature_collection(&zones, config.editor.circle_steps);
    Ok(CommandOutput {
        text: serde_json::to_string_pretty(&collection)?,
        success: true,
    })
}

async fn check(path: PathBuf) -> anyhow::Result<CommandOutput> {
    let config = load_config(&path)?;
    let store = FileZoneStore::new(path)?;
    let (editor, rejected) = ZoneEditor::load_from(config.store.location, &store).await?;

    let mut lines = vec![format!(
        "{}: {} zones loaded, {} active, {} skipped",
        config.store.name,
        editor.zone_count(),
        editor.zones().iter().filter(|z| z.is_active).count(),
        rejected.len()
    )];
    lines.extend(rejected.iter().map(|err| format!("  skipped: {err}")));

    Ok(CommandOutput {
        text: lines.join("\n"),
        success: rejected.is_empty(),
    })
}
