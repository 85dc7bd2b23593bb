#![allow(non_snake_case)]

use super::*;

#[test]
fn ScopedNames___assign___reuses_label_name_when_free() {
    let mut names = ScopedNames::new();

    let (name, lower) = names.assign("Porch Light", "d1").unwrap();

    assert_eq!(name, "PorchLight");
    assert_eq!(lower, "porchLight");
}

#[test]
fn ScopedNames___assign___falls_back_to_label_plus_id_on_collision() {
    let mut names = ScopedNames::new();

    let (first, _) = names.assign("Light", "a1").unwrap();
    let (second, second_lower) = names.assign("Light", "a2").unwrap();

    assert_eq!(first, "Light");
    // Label+id fallback, never a numeric suffix counter.
    assert_eq!(second, "Light_a2");
    assert_eq!(second_lower, "light_a2");
}

#[test]
fn ScopedNames___assign___every_name_unique_across_many_duplicates() {
    let mut names = ScopedNames::new();
    let ids = ["a1", "a2", "a3", "a4"];

    let assigned: Vec<String> = ids
        .iter()
        .map(|id| names.assign("Light", id).unwrap().0)
        .collect();

    let mut unique = assigned.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), assigned.len(), "collision in {assigned:?}");
}

#[test]
fn ScopedNames___assign___empty_id_on_collision_path_is_fatal() {
    let mut names = ScopedNames::new();
    names.assign("Light", "a1").unwrap();

    let err = names.assign("Light", "").unwrap_err();

    assert!(matches!(err, HubgenError::InvalidEntity(_)));
}

#[test]
fn ScopedNames___assign___duplicate_id_fallback_is_fatal_not_overwritten() {
    let mut names = ScopedNames::new();
    names.assign("Light", "a1").unwrap();
    names.assign("Light", "a2").unwrap();

    // Same label and same id again: the fallback name is already claimed.
    let err = names.assign("Light", "a2").unwrap_err();

    assert!(matches!(err, HubgenError::InvalidEntity(_)));
}

#[test]
fn ScopedNames___reserve___blocks_sentinel_name() {
    let mut names = ScopedNames::new();
    names.reserve(NO_ROOM_SENTINEL);

    let (name, _) = names.assign("No Room", "r9").unwrap();

    assert_eq!(name, "NoRoom_r9");
}

#[test]
fn NamingContext___lookups___return_recorded_names() {
    let mut context = NamingContext::new();
    context.record_device("d1", "porchLight");
    context.record_room("r1", "Kitchen");
    context.record_location("l1", "home");

    assert_eq!(context.device_accessor("d1").unwrap(), "porchLight");
    assert_eq!(context.room_type("r1").unwrap(), "Kitchen");
    assert_eq!(context.location_accessor("l1"), Some("home"));
}

#[test]
fn NamingContext___missing_device___is_an_error() {
    let context = NamingContext::new();

    assert!(context.device_accessor("ghost").is_err());
}
