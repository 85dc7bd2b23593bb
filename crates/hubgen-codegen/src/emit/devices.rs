//! Emission of the devices module: an accessor function plus a namespace per
//! device, with nested component namespaces referencing the capabilities
//! module by resolved name.

use super::{module_header, stable_stringify};
use crate::context::{NamingContext, ScopedNames};
use crate::naming::{compare_identifiers, identifier, identifier_lower, label_sort_key};
use hubgen_core::{CapabilityRef, Component, Device, HubgenResult};

pub(super) fn generate(devices: &[Device], context: &mut NamingContext) -> HubgenResult<String> {
    let mut source = module_header(&["import * as capabilities from \"./capabilities\";"]);

    let mut ordered: Vec<&Device> = devices.iter().collect();
    ordered.sort_by_key(|d| label_sort_key(&d.label));

    let mut names = ScopedNames::new();
    for device in ordered {
        let (name, accessor) = names.assign(&device.label, &device.device_id)?;
        context.record_device(&device.device_id, &accessor);
        source.push_str(&device_definition(device, &name, &accessor)?);
    }
    Ok(source)
}

fn device_definition(device: &Device, name: &str, accessor: &str) -> HubgenResult<String> {
    let mut components: Vec<&Component> = device.components.iter().collect();
    components.sort_by(|a, b| compare_identifiers(&a.id, &b.id));

    let status_fields = components
        .iter()
        .map(|c| format!("\"{}\": Components.{}.Status", c.id, identifier(&c.id)))
        .collect::<Vec<_>>()
        .join(",\n");

    let component_fields = components
        .iter()
        .map(|c| {
            let display = match &c.label {
                Some(label) => format!("{label} - {}", c.id),
                None => c.id.clone(),
            };
            format!(
                "/**\n * Component client for \"{display}\"\n */\n\
                 readonly {lower} = new Components.{upper}.Component(this);\n",
                lower = identifier_lower(&c.id),
                upper = identifier(&c.id),
            )
        })
        .collect::<Vec<_>>()
        .join("");

    let mut namespaces = String::new();
    for component in &components {
        namespaces.push_str(&component_definition(component)?);
    }

    Ok(format!(
        "/**\n * Gets a device client for \"{label}\"\n */\n\
         export function {accessor}(client: api.CatalogClient): {name}.Device {{\n\
         return new {name}.Device(client);\n\
         }}\n\
         export namespace {name} {{\n\
         export interface Status {{\n\
         components: {{\n{status_fields}\n}}\n\
         }}\n\
         export class Device extends runtime.Device<Status> {{\n\
         constructor(client: api.CatalogClient) {{\n\
         super(client, {json} as unknown as api.Device);\n\
         }}\n\
         {component_fields}\
         }}\n\
         export namespace Components {{\n{namespaces}}}\n\
         }}\n",
        label = device.label,
        json = stable_stringify(device)?,
    ))
}

fn capability_namespace(capability: &CapabilityRef) -> String {
    format!(
        "capabilities.{}.v{}",
        identifier(&capability.id),
        capability.version
    )
}

fn component_definition(component: &Component) -> HubgenResult<String> {
    let mut capabilities: Vec<&CapabilityRef> = component.capabilities.iter().collect();
    capabilities.sort_by(|a, b| compare_identifiers(&a.id, &b.id));

    let status_fields = capabilities
        .iter()
        .map(|c| format!("\"{}\": {}.Status", c.id, capability_namespace(c)))
        .collect::<Vec<_>>()
        .join(",\n");

    let capability_fields = capabilities
        .iter()
        .map(|c| {
            format!(
                "/**\n * Capability client for \"{id}\"\n */\n\
                 readonly {lower} = new {ns}.Capability<Component, Device>(this);\n",
                id = c.id,
                lower = identifier_lower(&c.id),
                ns = capability_namespace(c),
            )
        })
        .collect::<Vec<_>>()
        .join("");

    Ok(format!(
        "export namespace {name} {{\n\
         export interface Status {{\n{status_fields}\n}}\n\
         export class Component extends runtime.Component<Status, Device> {{\n\
         constructor(device: Device) {{\n\
         super(device, {json} as unknown as api.Component);\n\
         }}\n\
         {capability_fields}\
         }}\n\
         }}\n",
        name = identifier(&component.id),
        json = stable_stringify(component)?,
    ))
}
