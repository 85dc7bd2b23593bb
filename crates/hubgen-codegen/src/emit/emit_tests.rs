#![allow(non_snake_case)]

use super::*;
use hubgen_core::{
    Attribute, AttributeProperties, AttributeSchema, Capability, CapabilityKey, CapabilityRef,
    CapabilityStatus, CatalogSnapshot, Command, CommandArgument, Component, Device, Location,
    Room, Scene,
};
use serde_json::json;
use std::collections::BTreeMap;

fn switch_capability() -> Capability {
    let mut attributes = BTreeMap::new();
    attributes.insert(
        "switch".to_string(),
        Attribute {
            schema: AttributeSchema {
                properties: AttributeProperties {
                    value: json!({ "type": "string", "enum": ["on", "off"] }),
                    unit: None,
                    data: None,
                },
                required: vec!["value".to_string()],
            },
        },
    );
    let mut commands = BTreeMap::new();
    commands.insert(
        "setSwitch".to_string(),
        Command {
            name: Some("setSwitch".to_string()),
            arguments: vec![CommandArgument {
                name: "state".to_string(),
                schema: json!({ "type": "string", "enum": ["on", "off"] }),
                optional: false,
            }],
        },
    );
    Capability {
        id: "switch".to_string(),
        version: 1,
        name: "Switch".to_string(),
        status: CapabilityStatus::Live,
        attributes,
        commands,
    }
}

fn device(id: &str, label: &str, location: &str, room: Option<&str>) -> Device {
    Device {
        device_id: id.to_string(),
        label: label.to_string(),
        name: label.to_string(),
        location_id: Some(location.to_string()),
        room_id: room.map(str::to_string),
        components: vec![Component {
            id: "main".to_string(),
            label: None,
            capabilities: vec![CapabilityRef {
                id: "switch".to_string(),
                version: 1,
            }],
        }],
    }
}

fn fixture() -> CatalogSnapshot {
    let mut capabilities = BTreeMap::new();
    capabilities.insert(CapabilityKey::new("switch", 1), switch_capability());
    CatalogSnapshot {
        devices: vec![
            device("d1", "Porch Light", "loc1", Some("r1")),
            device("d2", "Desk Lamp", "loc1", None),
        ],
        capabilities,
        scenes: vec![Scene {
            scene_id: "s1".to_string(),
            scene_name: "Movie Night".to_string(),
            last_executed_date: Some("2026-01-01T00:00:00Z".to_string()),
            last_updated_date: None,
            created_date: None,
        }],
        rooms: vec![Room {
            room_id: "r1".to_string(),
            name: "Living Room".to_string(),
            location_id: "loc1".to_string(),
        }],
        locations: vec![Location {
            location_id: "loc1".to_string(),
            name: "Home".to_string(),
        }],
    }
}

#[test]
fn generate___produces_the_four_fixed_modules_in_order() {
    let files = generate(&fixture()).unwrap();

    let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["capabilities.ts", "devices.ts", "scenes.ts", "locations.ts"]
    );
}

#[test]
fn generate___two_runs_over_same_snapshot_are_byte_identical() {
    let snapshot = fixture();

    let first = generate(&snapshot).unwrap();
    let second = generate(&snapshot).unwrap();

    assert_eq!(first, second);
}

#[test]
fn generate___scene_dates_do_not_affect_output() {
    let mut executed = fixture();
    let mut never_executed = fixture();
    executed.scenes[0].last_executed_date = Some("2026-02-02T00:00:00Z".to_string());
    never_executed.scenes[0].last_executed_date = None;

    let a = generate(&executed).unwrap();
    let b = generate(&never_executed).unwrap();

    assert_eq!(a, b);
}

#[test]
fn generate___fails_when_a_capability_ref_is_unresolved() {
    let mut snapshot = fixture();
    snapshot.capabilities.clear();

    assert!(generate(&snapshot).is_err());
}

#[test]
fn capabilities_module___nests_version_namespaces_and_renders_attributes() {
    let files = generate(&fixture()).unwrap();
    let source = &files[0].source;

    assert!(source.contains("export namespace Switch {"));
    assert!(source.contains("export namespace v1 {"));
    assert!(source.contains("\"switch\" : {value: \"on\"|\"off\"}"));
    assert!(source.contains("setswitch(state: \"on\"|\"off\"): Promise<api.Status>"));
}

#[test]
fn capabilities_module___deprecated_status_carries_annotation_only() {
    let mut snapshot = fixture();
    let key = CapabilityKey::new("switch", 1);
    if let Some(cap) = snapshot.capabilities.get_mut(&key) {
        cap.status = CapabilityStatus::Deprecated;
    }

    let deprecated = generate(&snapshot).unwrap();

    assert!(deprecated[0].source.contains("@deprecated Capability status is deprecated"));
    // The annotation is informational: the Status shape is unchanged.
    assert!(deprecated[0].source.contains("\"switch\" : {value: \"on\"|\"off\"}"));
}

#[test]
fn devices_module___sorts_by_label_and_references_capability_namespace() {
    let files = generate(&fixture()).unwrap();
    let source = &files[1].source;

    let desk = source.find("export namespace DeskLamp {").unwrap();
    let porch = source.find("export namespace PorchLight {").unwrap();
    assert!(desk < porch);
    assert!(source.contains("capabilities.Switch.v1.Capability<Component, Device>"));
    assert!(source.contains("export function porchLight(client: api.CatalogClient)"));
}

#[test]
fn devices_module___duplicate_labels_get_label_plus_id_names() {
    let mut snapshot = fixture();
    snapshot.devices = vec![
        device("a1", "Light", "loc1", None),
        device("a2", "Light", "loc1", None),
    ];

    let files = generate(&snapshot).unwrap();
    let source = &files[1].source;

    assert!(source.contains("export namespace Light {"));
    assert!(source.contains("export namespace Light_a2 {"));
    assert!(!source.contains("Light2"));
}

#[test]
fn locations_module___rooms_reference_device_accessors() {
    let files = generate(&fixture()).unwrap();
    let source = &files[3].source;

    assert!(source.contains("export namespace Home {"));
    assert!(source.contains("export class LivingRoom extends runtime.Room<Location>"));
    assert!(source.contains("readonly porchLight = devices.porchLight(this.client);"));
}

#[test]
fn locations_module___roomless_devices_land_in_no_room_bucket() {
    let files = generate(&fixture()).unwrap();
    let source = &files[3].source;

    assert!(source.contains("readonly noRoomAssigned = {"));
    assert!(source.contains("deskLamp: devices.deskLamp(this.client)"));
}

#[test]
fn scenes_module___embeds_scene_without_dates() {
    let files = generate(&fixture()).unwrap();
    let source = &files[2].source;

    assert!(source.contains("export class MovieNight extends runtime.Scene"));
    assert!(source.contains("export function movieNight(client: api.CatalogClient)"));
    assert!(!source.contains("lastExecutedDate"));
}

#[test]
fn stable_stringify___orders_keys_lexicographically() {
    let device = device("d9", "Lamp", "loc1", None);

    let json = stable_stringify(&device).unwrap();

    let components = json.find("\"components\"").unwrap();
    let device_id = json.find("\"deviceId\"").unwrap();
    let label = json.find("\"label\"").unwrap();
    assert!(components < device_id && device_id < label);
}
