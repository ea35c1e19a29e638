use assert_matches::assert_matches;

use kira_boltz_bindings::domain::{
    CompoundId, Curie, DrugbankId, PUBCHEM_COMPOUND_PREFIX, UniprotId, smiles_placeholder,
};
use kira_boltz_bindings::error::BindingsError;

#[test]
fn ids_round_through_display() {
    let drug: DrugbankId = "DB00945".parse().unwrap();
    let protein: UniprotId = "P23219".parse().unwrap();
    let cid: CompoundId = "2244".parse().unwrap();
    assert_eq!(drug.to_string(), "DB00945");
    assert_eq!(protein.to_string(), "P23219");
    assert_eq!(cid.to_string(), "2244");
}

#[test]
fn empty_compound_id_rejected() {
    assert_matches!(
        "".parse::<CompoundId>(),
        Err(BindingsError::InvalidCompoundId(_))
    );
}

#[test]
fn drugbank_curie() {
    let drug: DrugbankId = "DB01118".parse().unwrap();
    let curie = drug.curie();
    assert_eq!(curie.prefix, "drugbank");
    assert_eq!(curie, Curie::parse("drugbank:DB01118").unwrap());
}

#[test]
fn pubchem_prefix_constant() {
    let curie = Curie::parse("PUBCHEM.COMPOUND:2244").unwrap();
    assert_eq!(curie.prefix, PUBCHEM_COMPOUND_PREFIX);
}

#[test]
fn placeholder_for_db01118() {
    let drug: DrugbankId = "DB01118".parse().unwrap();
    assert_eq!(smiles_placeholder(&drug), "<MANUAL_SMILES_FOR_DB01118>");
}
