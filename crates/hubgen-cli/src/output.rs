//! Writes generated modules to disk

use anyhow::Context;
use hubgen_codegen::generate;
use hubgen_core::CatalogSnapshot;
use std::fs;
use std::path::Path;
use tracing::info;

/// Generate the four client modules and write them under `output`.
pub fn write_modules(snapshot: &CatalogSnapshot, output: &Path) -> anyhow::Result<()> {
    let files = generate(snapshot)?;

    fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory {output:?}"))?;
    for file in &files {
        let path = output.join(&file.file_name);
        fs::write(&path, &file.source)
            .with_context(|| format!("failed to write {path:?}"))?;
        info!(path = %path.display(), bytes = file.source.len(), "module written");
    }
    Ok(())
}

#[cfg(test)]
#[path = "output/output_tests.rs"]
mod output_tests;
