//! Emission of the capabilities module: one namespace per capability id,
//! nested namespaces per version, each holding a `Status` shape and a rich
//! `Capability` client class.

use super::{module_header, stable_stringify};
use crate::naming::{identifier, identifier_lower};
use crate::schema::{render_attribute, render_type};
use hubgen_core::{Capability, CapabilityKey, CapabilityStatus, HubgenResult};
use std::collections::BTreeMap;

pub(super) fn generate(
    capabilities: &BTreeMap<CapabilityKey, Capability>,
) -> HubgenResult<String> {
    let mut source = module_header(&[]);

    // The catalog map is ordered by (id, version), so grouping consecutive
    // keys yields ids in sorted order with versions sorted inside each.
    let mut current_id: Option<&str> = None;
    for (key, capability) in capabilities {
        match current_id {
            Some(id) if id == key.id => {}
            _ => {
                if current_id.is_some() {
                    source.push_str("}\n");
                }
                source.push_str(&format!("export namespace {} {{\n", identifier(&key.id)));
                current_id = Some(&key.id);
            }
        }
        source.push_str(&format!("export namespace v{} {{\n", key.version));
        source.push_str(&capability_definition(capability)?);
        source.push_str("}\n");
    }
    if current_id.is_some() {
        source.push_str("}\n");
    }
    Ok(source)
}

/// Informational status annotation; never changes the emitted type shape.
fn status_notice(capability: &Capability) -> String {
    match capability.status {
        CapabilityStatus::Dead | CapabilityStatus::Deprecated => {
            format!("@deprecated Capability status is {}", capability.status)
        }
        CapabilityStatus::Proposed => {
            format!("@experimental Capability status is {}", capability.status)
        }
        _ => String::new(),
    }
}

fn capability_definition(capability: &Capability) -> HubgenResult<String> {
    let notice = status_notice(capability);
    let mut source = format!(
        "/**\n * Status type for {name} v{version}\n * {notice}\n */\n\
         export interface Status {{\n{attributes}}}\n\
         /**\n * Rich client for {name} v{version}\n * {notice}\n */\n\
         export class Capability<TComponent extends runtime.Component<unknown, TDevice>, \
         TDevice extends runtime.Device<unknown>> extends runtime.Capability<Status, TComponent, TDevice> {{\n\
         constructor(component: TComponent) {{\n\
         super(component, {json} as unknown as api.Capability);\n\
         }}\n",
        name = capability.name,
        version = capability.version,
        notice = notice,
        attributes = attributes(capability)?,
        json = stable_stringify(capability)?,
    );
    source.push_str(&commands(capability)?);
    source.push_str("}\n");
    Ok(source)
}

fn attributes(capability: &Capability) -> HubgenResult<String> {
    let mut source = String::new();
    // BTreeMap iteration gives the sorted attribute order.
    for (name, attribute) in &capability.attributes {
        source.push_str(&format!(
            "\"{name}\" : {{{}}},\n",
            render_attribute(&attribute.schema)?
        ));
    }
    Ok(source)
}

fn commands(capability: &Capability) -> HubgenResult<String> {
    let mut source = String::new();
    for (key, command) in &capability.commands {
        let wire_name = command.name.as_deref().unwrap_or(key.as_str());

        let mut params = Vec::new();
        let mut forwarded = Vec::new();
        for arg in &command.arguments {
            let param_name = identifier_lower(&arg.name);
            let marker = if arg.optional { "?" } else { "" };
            params.push(format!(
                "{param_name}{marker}: {}",
                render_type(&arg.schema, false)?
            ));
            let assertion = if arg.optional { "!" } else { "" };
            forwarded.push(format!("{param_name}{assertion}"));
        }

        source.push_str(&format!(
            "/**\n * Executes \"{wire_name}\" for this capability\n */\n\
             {method}({params}): Promise<api.Status> {{\n\
             return this.client.devices.executeCommand(this.device.id, {{\n\
             component: this.component.id,\n\
             capability: this.id,\n\
             command: \"{wire_name}\",\n\
             arguments: [{forwarded}]\n\
             }});\n\
             }}\n",
            method = identifier_lower(wire_name),
            params = params.join(", "),
            forwarded = forwarded.join(", "),
        ));
    }
    Ok(source)
}
