//! Loading country tables from disk.

use std::fs;

use cpi_standards::{CountryTable, StandardsError, UNKNOWN_REGION_CODE};
use tempfile::TempDir;

#[test]
fn loads_table_from_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("codes.csv");
    fs::write(
        &path,
        "alpha_2,alpha_3,name\nXK,XKX,Kosovo\nIS,ISL,Iceland\n",
    )
    .expect("write table");

    let table = CountryTable::from_path(&path).expect("load table");
    assert_eq!(table.len(), 2);
    assert_eq!(table.alpha2_for("XKX"), Some("XK"));
    assert!(!table.resolve_alpha2("XKX").is_unknown());
    assert!(table.resolve_alpha2("NOR").is_unknown());
    assert_eq!(table.resolve_alpha2("NOR").as_str(), UNKNOWN_REGION_CODE);

    let names: Vec<_> = table.iter().filter_map(|c| c.name.as_deref()).collect();
    assert_eq!(names, vec!["Kosovo", "Iceland"]);
}

#[test]
fn error_names_the_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("bad.csv");
    fs::write(&path, "alpha_2,alpha_3\nI1,ISL\n").expect("write table");

    let err = CountryTable::from_path(&path).unwrap_err();
    assert!(matches!(err, StandardsError::InvalidValue { .. }));
    assert!(err.to_string().contains("bad.csv"));
}

#[test]
fn every_embedded_entry_round_trips_through_lookup() {
    let table = CountryTable::iso3166().expect("embedded table");
    for country in table.iter() {
        assert_eq!(table.alpha2_for(&country.alpha_3), Some(country.alpha_2.as_str()));
        assert_eq!(country.alpha_2.len(), 2);
        assert_eq!(country.alpha_3.len(), 3);
    }
}
