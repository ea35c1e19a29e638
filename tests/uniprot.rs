use std::fs;

use assert_matches::assert_matches;
use serde_json::Value;

use kira_boltz_bindings::error::BindingsError;
use kira_boltz_bindings::uniprot::extract_protein;

fn cox1() -> Value {
    let raw = fs::read_to_string(format!(
        "{}/tests/fixtures/uniprot_P23219.json",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn extract_sequence_and_name() {
    let protein = extract_protein(&cox1()).unwrap();
    assert_eq!(protein.name, "Prostaglandin G/H synthase 1");
    assert!(protein.sequence.starts_with("MSRSLLLRFLLFLLLLPPLPVLLA"));
    assert!(protein.sequence.chars().all(|ch| ch.is_ascii_uppercase()));
}

#[test]
fn sequence_without_name_is_rejected() {
    let mut raw = cox1();
    raw["proteinDescription"]["recommendedName"]
        .as_object_mut()
        .unwrap()
        .remove("fullName");
    assert_matches!(
        extract_protein(&raw),
        Err(BindingsError::MissingField { service: "UniProt", .. })
    );
}

#[test]
fn name_without_sequence_is_rejected() {
    let mut raw = cox1();
    raw.as_object_mut().unwrap().remove("sequence");
    assert_matches!(
        extract_protein(&raw),
        Err(BindingsError::MissingField { field: "sequence.value", .. })
    );
}

#[test]
fn empty_values_count_as_missing() {
    let mut raw = cox1();
    raw["sequence"]["value"] = Value::String(String::new());
    assert!(extract_protein(&raw).is_err());
}
