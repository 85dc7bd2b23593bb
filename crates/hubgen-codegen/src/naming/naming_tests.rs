#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case("Porch Light", "PorchLight" ; "space separated")]
#[test_case("porch light", "PorchLight" ; "already lowercase")]
#[test_case("Mike's Room", "MikesRoom" ; "apostrophe stripped")]
#[test_case("living-room", "LivingRoom" ; "kebab")]
#[test_case("Light_a1", "Light_a1" ; "underscore preserved")]
#[test_case("3rd Floor", "$3rdFloor" ; "leading digit prefixed")]
#[test_case("Café Lamp", "CafeLamp" ; "transliterated to ascii")]
#[test_case("  spaced  out  ", "SpacedOut" ; "separator runs collapse")]
#[test_case("", "" ; "empty label")]
fn identifier___resolves_label(label: &str, expected: &str) {
    assert_eq!(identifier(label), expected);
}

#[test]
fn identifier___is_deterministic() {
    assert_eq!(identifier("Back Door Sensor"), identifier("Back Door Sensor"));
}

#[test_case("Porch Light", "porchLight")]
#[test_case("3rd Floor", "$3rdFloor" ; "dollar prefix has no case")]
fn identifier_lower___lowers_first_letter(label: &str, expected: &str) {
    assert_eq!(identifier_lower(label), expected);
}

#[test]
fn compare_identifiers___orders_by_resolved_name() {
    use std::cmp::Ordering;

    assert_eq!(compare_identifiers("main", "outlet1"), Ordering::Less);
    assert_eq!(compare_identifiers("Main", "main"), Ordering::Equal);
}

#[test]
fn label_sort_key___is_case_insensitive_with_stable_tiebreak() {
    let mut labels = vec!["beta", "Alpha", "alpha"];

    labels.sort_by_key(|l| label_sort_key(l));

    assert_eq!(labels, vec!["Alpha", "alpha", "beta"]);
}
