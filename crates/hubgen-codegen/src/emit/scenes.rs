//! Emission of the scenes module.
//!
//! Scene records carry execution timestamps that change between runs; they
//! are stripped before embedding so regenerated output stays byte-identical.

use super::{module_header, stable_stringify};
use crate::context::ScopedNames;
use crate::naming::label_sort_key;
use hubgen_core::{HubgenResult, Scene};

pub(super) fn generate(scenes: &[Scene]) -> HubgenResult<String> {
    let mut source = module_header(&[]);

    let mut ordered: Vec<&Scene> = scenes.iter().collect();
    ordered.sort_by_key(|s| label_sort_key(&s.scene_name));

    let mut names = ScopedNames::new();
    for scene in ordered {
        let stripped = strip_dates(scene);
        let (name, accessor) = names.assign(&scene.scene_name, &scene.scene_id)?;
        source.push_str(&format!(
            "export function {accessor}(client: api.CatalogClient): {name} {{\n\
             return new {name}(client);\n\
             }}\n\
             export class {name} extends runtime.Scene {{\n\
             constructor(client: api.CatalogClient) {{\n\
             super(client, {json} as unknown as api.SceneSummary);\n\
             }}\n\
             }}\n",
            json = stable_stringify(&stripped)?,
        ));
    }
    Ok(source)
}

fn strip_dates(scene: &Scene) -> Scene {
    Scene {
        last_executed_date: None,
        last_updated_date: None,
        created_date: None,
        ..scene.clone()
    }
}
