use crate::domain::DrugbankId;
use crate::error::BindingsError;
use crate::normalization::{NormalizationClient, extract_equivalent_identifiers, select_compound_id};
use crate::pubchem::{PubchemClient, extract_smiles};

pub fn resolve_smiles<N, P>(
    normalizer: &N,
    pubchem: &P,
    drugbank_id: &DrugbankId,
) -> Result<String, BindingsError>
where
    N: NormalizationClient + ?Sized,
    P: PubchemClient + ?Sized,
{
    let curie = drugbank_id.curie();
    let nodes = normalizer.normalized_nodes(&curie)?;
    let identifiers = extract_equivalent_identifiers(&nodes, &curie);
    let cid = select_compound_id(&identifiers)
        .ok_or_else(|| BindingsError::NoCompoundMapping(curie.to_string()))?;
    tracing::debug!(drugbank_id = %drugbank_id, cid = %cid, "mapped to PubChem compound");

    let properties = pubchem.smiles_properties(&cid)?;
    extract_smiles(&properties)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::{CompoundId, Curie};

    struct FixedNodes(Value);

    impl NormalizationClient for FixedNodes {
        fn normalized_nodes(&self, _curie: &Curie) -> Result<Value, BindingsError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct RecordingPubchem {
        requested: Mutex<Vec<String>>,
    }

    impl PubchemClient for RecordingPubchem {
        fn smiles_properties(&self, cid: &CompoundId) -> Result<Value, BindingsError> {
            self.requested.lock().unwrap().push(cid.to_string());
            Ok(json!({"PropertyTable": {"Properties": [{"SMILES": "CCO"}]}}))
        }
    }

    #[test]
    fn resolves_through_first_compound() {
        let nodes = FixedNodes(json!({
            "drugbank:DB00898": {"equivalent_identifiers": [
                {"identifier": "CHEBI:16236"},
                {"identifier": "PUBCHEM.COMPOUND:702"}
            ]}
        }));
        let pubchem = RecordingPubchem::default();
        let id: DrugbankId = "DB00898".parse().unwrap();

        let smiles = resolve_smiles(&nodes, &pubchem, &id).unwrap();
        assert_eq!(smiles, "CCO");
        assert_eq!(*pubchem.requested.lock().unwrap(), vec!["702".to_string()]);
    }

    #[test]
    fn no_compound_skips_pubchem() {
        let nodes = FixedNodes(json!({
            "drugbank:DB00898": {"equivalent_identifiers": [{"identifier": "CHEBI:16236"}]}
        }));
        let pubchem = RecordingPubchem::default();
        let id: DrugbankId = "DB00898".parse().unwrap();

        let err = resolve_smiles(&nodes, &pubchem, &id).unwrap_err();
        assert_matches!(err, BindingsError::NoCompoundMapping(curie) if curie == "drugbank:DB00898");
        assert!(pubchem.requested.lock().unwrap().is_empty());
    }
}
