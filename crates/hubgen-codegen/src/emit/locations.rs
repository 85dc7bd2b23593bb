//! Emission of the locations module: a namespace per location whose rooms
//! are emitted inline, each referencing device accessors assigned by the
//! devices module.

use super::{module_header, stable_stringify};
use crate::context::{NO_ROOM_SENTINEL, NamingContext, ScopedNames};
use crate::naming::{label_sort_key, lower_first};
use hubgen_core::{CatalogSnapshot, Device, HubgenResult, Location, Room};

pub(super) fn generate(
    snapshot: &CatalogSnapshot,
    context: &mut NamingContext,
) -> HubgenResult<String> {
    let mut source = module_header(&["import * as devices from \"./devices\";"]);

    let mut ordered: Vec<&Location> = snapshot.locations.iter().collect();
    ordered.sort_by_key(|l| label_sort_key(&l.name));

    let mut names = ScopedNames::new();
    for location in ordered {
        let (name, accessor) = names.assign(&location.name, &location.location_id)?;
        context.record_location(&location.location_id, &accessor);
        source.push_str(&location_definition(location, snapshot, context, &name, &accessor)?);
    }
    Ok(source)
}

fn location_definition(
    location: &Location,
    snapshot: &CatalogSnapshot,
    context: &mut NamingContext,
    name: &str,
    accessor: &str,
) -> HubgenResult<String> {
    let mut rooms: Vec<&Room> = snapshot
        .rooms
        .iter()
        .filter(|r| r.location_id == location.location_id)
        .collect();
    rooms.sort_by_key(|r| label_sort_key(&r.name));

    let mut roomless: Vec<&Device> = snapshot
        .devices
        .iter()
        .filter(|d| d.location_id.as_deref() == Some(location.location_id.as_str()) && d.room_id.is_none())
        .collect();
    roomless.sort_by_key(|d| label_sort_key(&d.name));

    let rooms_source = rooms_namespace(&rooms, snapshot, context)?;

    let room_fields = rooms
        .iter()
        .map(|room| {
            let type_name = context.room_type(&room.room_id)?;
            Ok(format!(
                "readonly {} = new Rooms.{}(this);\n",
                lower_first(type_name),
                type_name
            ))
        })
        .collect::<HubgenResult<Vec<_>>>()?
        .join("");

    let bucket_entries = roomless
        .iter()
        .map(|device| {
            let device_accessor = context.device_accessor(&device.device_id)?;
            Ok(format!("{device_accessor}: devices.{device_accessor}(this.client)"))
        })
        .collect::<HubgenResult<Vec<_>>>()?
        .join(",\n");

    Ok(format!(
        "export function {accessor}(client: api.CatalogClient): {name}.Location {{\n\
         return new {name}.Location(client);\n\
         }}\n\
         export namespace {name} {{\n\
         export namespace Rooms {{\n{rooms_source}}}\n\
         export class Location extends runtime.Location {{\n\
         constructor(client: api.CatalogClient) {{\n\
         super(client, {json} as unknown as api.Location);\n\
         }}\n\
         {room_fields}\
         readonly noRoomAssigned = {{\n{bucket_entries}\n}} as const;\n\
         }}\n\
         }}\n",
        json = stable_stringify(location)?,
    ))
}

fn rooms_namespace(
    rooms: &[&Room],
    snapshot: &CatalogSnapshot,
    context: &mut NamingContext,
) -> HubgenResult<String> {
    // Room names are scoped per location; the no-room bucket's sentinel is
    // reserved so no real room can collide with it.
    let mut names = ScopedNames::new();
    names.reserve(NO_ROOM_SENTINEL);

    let mut source = String::new();
    for room in rooms {
        let (type_name, _) = names.assign(&room.name, &room.room_id)?;
        context.record_room(&room.room_id, &type_name);

        let mut members: Vec<&Device> = snapshot
            .devices
            .iter()
            .filter(|d| d.room_id.as_deref() == Some(room.room_id.as_str()))
            .collect();
        members.sort_by_key(|d| label_sort_key(&d.name));

        let device_fields = members
            .iter()
            .map(|device| {
                let device_accessor = context.device_accessor(&device.device_id)?;
                Ok(format!(
                    "readonly {device_accessor} = devices.{device_accessor}(this.client);\n"
                ))
            })
            .collect::<HubgenResult<Vec<_>>>()?
            .join("");

        source.push_str(&format!(
            "export class {type_name} extends runtime.Room<Location> {{\n\
             constructor(location: Location) {{\n\
             super(location, {json} as unknown as api.Room);\n\
             }}\n\
             {device_fields}\
             }}\n",
            json = stable_stringify(room)?,
        ));
    }
    Ok(source)
}
