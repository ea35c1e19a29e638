use serde::Serialize;

use crate::error::BindingsError;

pub const PROTEIN_CHAIN_ID: &str = "A";
pub const LIGAND_CHAIN_ID: &str = "B";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AffinityRecord {
    pub sequences: Vec<SequenceEntry>,
    pub properties: Vec<PropertyEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SequenceEntry {
    Protein { protein: ProteinChain },
    Ligand { ligand: LigandChain },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProteinChain {
    pub id: String,
    pub name: String,
    pub sequence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LigandChain {
    pub id: String,
    pub name: String,
    pub smiles: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyEntry {
    pub affinity: Affinity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Affinity {
    pub binder: String,
}

impl AffinityRecord {
    pub fn new(protein_name: &str, sequence: &str, drug_name: &str, smiles: &str) -> Self {
        Self {
            sequences: vec![
                SequenceEntry::Protein {
                    protein: ProteinChain {
                        id: PROTEIN_CHAIN_ID.to_string(),
                        name: protein_name.to_string(),
                        sequence: sequence.to_string(),
                    },
                },
                SequenceEntry::Ligand {
                    ligand: LigandChain {
                        id: LIGAND_CHAIN_ID.to_string(),
                        name: drug_name.to_string(),
                        smiles: smiles.to_string(),
                    },
                },
            ],
            properties: vec![PropertyEntry {
                affinity: Affinity {
                    binder: LIGAND_CHAIN_ID.to_string(),
                },
            }],
        }
    }

    pub fn protein(&self) -> Option<&ProteinChain> {
        self.sequences.iter().find_map(|entry| match entry {
            SequenceEntry::Protein { protein } => Some(protein),
            SequenceEntry::Ligand { .. } => None,
        })
    }

    pub fn ligand(&self) -> Option<&LigandChain> {
        self.sequences.iter().find_map(|entry| match entry {
            SequenceEntry::Ligand { ligand } => Some(ligand),
            SequenceEntry::Protein { .. } => None,
        })
    }

    pub fn to_yaml(&self) -> Result<String, BindingsError> {
        serde_yaml::to_string(self).map_err(|err| BindingsError::Serialize(err.to_string()))
    }
}

pub fn record_file_name(drug_name: &str, protein_name: &str) -> String {
    let safe_protein_name = protein_name.replace([' ', '/'], "_");
    format!("{drug_name}_{safe_protein_name}.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_sanitizes_protein_only() {
        assert_eq!(
            record_file_name("Aspirin", "Prostaglandin G/H synthase 1"),
            "Aspirin_Prostaglandin_G_H_synthase_1.yaml"
        );
        assert_eq!(
            record_file_name("Acetyl salicylic", "<MANUAL_PROTEIN_NAME_FOR_P23219>"),
            "Acetyl salicylic_<MANUAL_PROTEIN_NAME_FOR_P23219>.yaml"
        );
    }

    #[test]
    fn yaml_keeps_record_key_order() {
        let record = AffinityRecord::new("Kinase", "MKT", "Aspirin", "CCO");
        let yaml = record.to_yaml().unwrap();

        let order = [
            "sequences:",
            "protein:",
            "id: A",
            "name: Kinase",
            "sequence: MKT",
            "ligand:",
            "id: B",
            "name: Aspirin",
            "smiles: CCO",
            "properties:",
            "affinity:",
            "binder: B",
        ];
        let mut cursor = 0;
        for key in order {
            let found = yaml[cursor..]
                .find(key)
                .unwrap_or_else(|| panic!("{key} missing or out of order in:\n{yaml}"));
            cursor += found + key.len();
        }
        assert!(!yaml.contains('!'), "enum tags leaked into output:\n{yaml}");
    }

    #[test]
    fn chain_ids_are_fixed() {
        let record = AffinityRecord::new("Kinase", "MKT", "Aspirin", "CCO");
        assert_eq!(record.protein().unwrap().id, PROTEIN_CHAIN_ID);
        assert_eq!(record.ligand().unwrap().id, LIGAND_CHAIN_ID);
        assert_eq!(record.properties[0].affinity.binder, LIGAND_CHAIN_ID);
    }
}
