//! The `generate` and `from-snapshot` commands

use crate::output::write_modules;
use anyhow::Context;
use hubgen_core::CatalogSnapshot;
use hubgen_fetch::{AcquireConfig, Acquirer, HttpCatalogApi};
use std::fs;
use std::path::Path;
use tracing::info;

/// Fetch the remote catalog and emit the four client modules.
pub async fn run(
    token: &str,
    base_url: &str,
    output: &Path,
    max_in_flight: usize,
    snapshot_path: Option<&Path>,
) -> anyhow::Result<()> {
    let api = HttpCatalogApi::new(base_url, token)?;
    let acquirer = Acquirer::with_config(
        api,
        AcquireConfig {
            max_in_flight,
            ..AcquireConfig::default()
        },
    );

    let snapshot = acquirer.acquire().await?;
    if let Some(path) = snapshot_path {
        fs::write(path, serde_json::to_string_pretty(&snapshot)?)
            .with_context(|| format!("failed to write snapshot to {path:?}"))?;
        info!(path = %path.display(), "catalog snapshot saved");
    }

    write_modules(&snapshot, output)
}

/// Emit the client modules from a previously saved snapshot, without
/// touching the network. Useful for diffable regeneration in CI.
pub fn run_offline(input: &Path, output: &Path) -> anyhow::Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("failed to read snapshot {input:?}"))?;
    let snapshot: CatalogSnapshot =
        serde_json::from_str(&raw).context("snapshot file is not a valid catalog snapshot")?;

    write_modules(&snapshot, output)
}
