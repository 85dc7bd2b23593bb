//! Module emitter: assembles the four generated source modules.
//!
//! The modules cross-reference each other by resolved name (devices reference
//! capabilities, locations reference devices), so they are generated in a
//! fixed order (capabilities, devices, scenes, locations) with the naming
//! context carrying the reference tables forward. Every nested collection is
//! emitted in a deterministic sort order: two runs over unchanged source data
//! produce byte-identical text.

use crate::context::NamingContext;
use hubgen_core::{CatalogSnapshot, HubgenResult};
use serde::Serialize;
use tracing::info;

mod capabilities;
mod devices;
mod locations;
mod scenes;

/// One emitted source module
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub source: String,
}

/// Generate the four interdependent modules from a resolved snapshot.
pub fn generate(snapshot: &CatalogSnapshot) -> HubgenResult<Vec<GeneratedFile>> {
    snapshot.verify_complete()?;
    let mut context = NamingContext::new();

    let files = vec![
        GeneratedFile {
            file_name: "capabilities.ts".to_string(),
            source: capabilities::generate(&snapshot.capabilities)?,
        },
        GeneratedFile {
            file_name: "devices.ts".to_string(),
            source: devices::generate(&snapshot.devices, &mut context)?,
        },
        GeneratedFile {
            file_name: "scenes.ts".to_string(),
            source: scenes::generate(&snapshot.scenes)?,
        },
        GeneratedFile {
            file_name: "locations.ts".to_string(),
            source: locations::generate(snapshot, &mut context)?,
        },
    ];
    info!(
        modules = files.len(),
        bytes = files.iter().map(|f| f.source.len()).sum::<usize>(),
        "generated client modules"
    );
    Ok(files)
}

/// Canonical JSON text for an entity embedded in generated source.
///
/// Serialization goes through [`serde_json::Value`], whose object map keeps
/// keys in lexicographic order, so embedded payloads are key-order-stable
/// across runs.
pub(crate) fn stable_stringify<T: Serialize>(value: &T) -> HubgenResult<String> {
    Ok(serde_json::to_value(value)?.to_string())
}

/// Shared module preamble. `extra_imports` adds cross-module imports after
/// the runtime and API client imports.
pub(crate) fn module_header(extra_imports: &[&str]) -> String {
    let mut header = String::from(
        "/* eslint-disable @typescript-eslint/no-namespace */\n\
         /* eslint-disable @typescript-eslint/no-empty-interface */\n\
         import * as runtime from \"@hubgen/runtime\";\n\
         import * as api from \"@hubgen/api-client\";\n",
    );
    for import in extra_imports {
        header.push_str(import);
        header.push('\n');
    }
    header.push('\n');
    header
}

#[cfg(test)]
#[path = "emit_tests.rs"]
mod emit_tests;
