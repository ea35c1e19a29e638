use std::fs;

use assert_matches::assert_matches;
use camino::Utf8PathBuf;

use kira_boltz_bindings::config::{DEFAULT_DRUG_NAME, PairsLoader};
use kira_boltz_bindings::error::BindingsError;

#[test]
fn load_pairs_fixture() {
    let path = Utf8PathBuf::from(format!(
        "{}/tests/fixtures/pairs.yaml",
        env!("CARGO_MANIFEST_DIR")
    ));
    let pairs = PairsLoader::load(&path).unwrap();

    assert_eq!(pairs.len(), 4);
    assert_eq!(pairs[0].drug_name(), "Aspirin");
    assert!(pairs[0].validate().is_some());
    assert!(pairs[1].validate().is_none());
    assert!(pairs[2].validate().is_none());
    assert_eq!(pairs[3].drug_name(), DEFAULT_DRUG_NAME);
}

#[test]
fn pairs_must_be_a_list() {
    assert_matches!(
        PairsLoader::parse_str("pairs:\n  drug_name: Aspirin\n"),
        Err(BindingsError::MissingPairs)
    );
    assert_matches!(
        PairsLoader::parse_str("items: []\n"),
        Err(BindingsError::MissingPairs)
    );
    assert_matches!(
        PairsLoader::parse_str("- drug_name: Aspirin\n"),
        Err(BindingsError::MissingPairs)
    );
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    assert_matches!(
        PairsLoader::parse_str("pairs: [unclosed\n"),
        Err(BindingsError::InputParse(_))
    );
}

#[test]
fn json_input_is_accepted() {
    let pairs = PairsLoader::parse_str(
        r#"{"pairs": [{"drug_name": "Aspirin", "drugbank_id": "DB00945", "uniprot_id": "P23219"}]}"#,
    )
    .unwrap();
    let pair = pairs[0].validate().unwrap();
    assert_eq!(pair.drug_name, "Aspirin");
}

#[test]
fn scalar_ids_are_stringified_and_null_is_missing() {
    let pairs = PairsLoader::parse_str(
        "pairs:\n  - {drug_name: 42, drugbank_id: DB00945, uniprot_id: ~}\n  - {drug_name: ~, drugbank_id: DB00945, uniprot_id: P23219}\n",
    )
    .unwrap();
    assert_eq!(pairs[0].drug_name(), "42");
    assert!(pairs[0].validate().is_none());
    assert_eq!(pairs[1].drug_name(), DEFAULT_DRUG_NAME);
}

#[test]
fn missing_input_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(temp.path().join("nope.yaml")).unwrap();
    assert_matches!(
        PairsLoader::load(&path),
        Err(BindingsError::InputNotFound(_))
    );

    let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
    assert_matches!(PairsLoader::load(&dir), Err(BindingsError::InputNotFound(_)));

    let file = dir.join("ids.yaml");
    fs::write(file.as_std_path(), "pairs: []\n").unwrap();
    assert!(PairsLoader::load(&file).unwrap().is_empty());
}
