use std::fs;

use camino::Utf8Path;
use serde_yaml::Value;

use crate::domain::{DrugbankId, UniprotId};
use crate::error::BindingsError;

pub const DEFAULT_DRUG_NAME: &str = "UnknownDrug";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairEntry {
    pub drug_name: Option<String>,
    pub drugbank_id: Option<String>,
    pub uniprot_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPair {
    pub drug_name: String,
    pub drugbank_id: DrugbankId,
    pub uniprot_id: UniprotId,
}

impl PairEntry {
    pub fn from_value(value: &Value) -> Self {
        if !value.is_mapping() {
            return Self::default();
        }
        Self {
            drug_name: scalar_string(value.get("drug_name")),
            drugbank_id: scalar_string(value.get("drugbank_id")),
            uniprot_id: scalar_string(value.get("uniprot_id")),
        }
    }

    pub fn drug_name(&self) -> &str {
        self.drug_name.as_deref().unwrap_or(DEFAULT_DRUG_NAME)
    }

    pub fn validate(&self) -> Option<InputPair> {
        let drugbank_id = self.drugbank_id.as_deref()?.parse().ok()?;
        let uniprot_id = self.uniprot_id.as_deref()?.parse().ok()?;
        Some(InputPair {
            drug_name: self.drug_name().to_string(),
            drugbank_id,
            uniprot_id,
        })
    }
}

fn scalar_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

pub struct PairsLoader;

impl PairsLoader {
    pub fn ensure_readable(path: &Utf8Path) -> Result<(), BindingsError> {
        if !path.as_std_path().is_file() {
            return Err(BindingsError::InputNotFound(path.as_std_path().to_path_buf()));
        }
        fs::File::open(path.as_std_path())
            .map_err(|_| BindingsError::InputRead(path.as_std_path().to_path_buf()))?;
        Ok(())
    }

    pub fn load(path: &Utf8Path) -> Result<Vec<PairEntry>, BindingsError> {
        Self::ensure_readable(path)?;
        let content = fs::read_to_string(path.as_std_path())
            .map_err(|_| BindingsError::InputRead(path.as_std_path().to_path_buf()))?;
        Self::parse_str(&content)
    }

    pub fn parse_str(content: &str) -> Result<Vec<PairEntry>, BindingsError> {
        let document: Value = serde_yaml::from_str(content)
            .map_err(|err| BindingsError::InputParse(err.to_string()))?;
        let pairs = document
            .get("pairs")
            .and_then(Value::as_sequence)
            .ok_or(BindingsError::MissingPairs)?;
        Ok(pairs.iter().map(PairEntry::from_value).collect())
    }
}
