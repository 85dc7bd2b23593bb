#![allow(non_snake_case)]

use super::*;

#[test]
fn write_modules___creates_the_four_files() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = CatalogSnapshot::default();

    write_modules(&snapshot, dir.path()).unwrap();

    for name in ["capabilities.ts", "devices.ts", "scenes.ts", "locations.ts"] {
        let path = dir.path().join(name);
        assert!(path.is_file(), "missing {name}");
        let source = fs::read_to_string(&path).unwrap();
        assert!(source.contains("import * as runtime from \"@hubgen/runtime\";"));
    }
}

#[test]
fn write_modules___regeneration_overwrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = CatalogSnapshot::default();

    write_modules(&snapshot, dir.path()).unwrap();
    let first = fs::read_to_string(dir.path().join("devices.ts")).unwrap();
    write_modules(&snapshot, dir.path()).unwrap();
    let second = fs::read_to_string(dir.path().join("devices.ts")).unwrap();

    assert_eq!(first, second);
}
