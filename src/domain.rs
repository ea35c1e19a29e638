use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BindingsError;

pub const DRUGBANK_CURIE_PREFIX: &str = "drugbank";
pub const PUBCHEM_COMPOUND_PREFIX: &str = "PUBCHEM.COMPOUND";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrugbankId(String);

impl DrugbankId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn curie(&self) -> Curie {
        Curie {
            prefix: DRUGBANK_CURIE_PREFIX.to_string(),
            local: self.0.clone(),
        }
    }
}

impl fmt::Display for DrugbankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DrugbankId {
    type Err = BindingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(BindingsError::InvalidDrugbankId(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniprotId(String);

impl UniprotId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniprotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UniprotId {
    type Err = BindingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(BindingsError::InvalidUniprotId(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompoundId(String);

impl CompoundId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompoundId {
    type Err = BindingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(BindingsError::InvalidCompoundId(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Curie {
    pub prefix: String,
    pub local: String,
}

impl Curie {
    /// Splits on the first `:`; identifiers without a separator are not curies.
    pub fn parse(value: &str) -> Option<Self> {
        let (prefix, local) = value.split_once(':')?;
        Some(Self {
            prefix: prefix.to_string(),
            local: local.to_string(),
        })
    }
}

impl fmt::Display for Curie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.local)
    }
}

pub fn smiles_placeholder(id: &DrugbankId) -> String {
    format!("<MANUAL_SMILES_FOR_{}>", id.as_str())
}

pub fn sequence_placeholder(id: &UniprotId) -> String {
    format!("<MANUAL_SEQUENCE_FOR_{}>", id.as_str())
}

pub fn protein_name_placeholder(id: &UniprotId) -> String {
    format!("<MANUAL_PROTEIN_NAME_FOR_{}>", id.as_str())
}
