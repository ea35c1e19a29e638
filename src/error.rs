use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum BindingsError {
    #[error("invalid DrugBank id: {0:?}")]
    InvalidDrugbankId(String),

    #[error("invalid UniProt accession: {0:?}")]
    InvalidUniprotId(String),

    #[error("invalid PubChem compound id: {0:?}")]
    InvalidCompoundId(String),

    #[error("input file not found or not a file: {0}")]
    InputNotFound(PathBuf),

    #[error("failed to read input file at {0}")]
    InputRead(PathBuf),

    #[error("failed to parse input YAML: {0}")]
    InputParse(String),

    #[error("Input YAML must contain a top-level key 'pairs' which is a list.")]
    #[diagnostic(help("expected a document like `pairs: [{{drug_name: ..., drugbank_id: ..., uniprot_id: ...}}]`"))]
    MissingPairs,

    #[error("invalid setting {key}: {message}")]
    InvalidSetting { key: String, message: String },

    #[error("node normalization request failed: {0}")]
    NormalizationHttp(String),

    #[error("node normalization returned status {status}: {message}")]
    NormalizationStatus { status: u16, message: String },

    #[error("no PubChem compound equivalent for {0}")]
    NoCompoundMapping(String),

    #[error("PubChem request failed: {0}")]
    PubchemHttp(String),

    #[error("PubChem returned status {status}: {message}")]
    PubchemStatus { status: u16, message: String },

    #[error("uniprot request failed: {0}")]
    UniprotHttp(String),

    #[error("uniprot returned status {status}: {message}")]
    UniprotStatus { status: u16, message: String },

    #[error("failed to decode JSON from {service}: {message}")]
    JsonDecode {
        service: &'static str,
        message: String,
    },

    #[error("{service} response is missing {field}")]
    MissingField {
        service: &'static str,
        field: &'static str,
    },

    #[error("filesystem error: {0}")]
    Filesystem(String),

    #[error("failed to serialize record: {0}")]
    Serialize(String),
}

impl BindingsError {
    pub fn kind(&self) -> &'static str {
        match self {
            BindingsError::InvalidDrugbankId(_)
            | BindingsError::InvalidUniprotId(_)
            | BindingsError::InvalidCompoundId(_) => "invalid_id",
            BindingsError::InputNotFound(_)
            | BindingsError::InputRead(_)
            | BindingsError::InputParse(_)
            | BindingsError::MissingPairs => "input",
            BindingsError::InvalidSetting { .. } => "settings",
            BindingsError::NormalizationHttp(_)
            | BindingsError::PubchemHttp(_)
            | BindingsError::UniprotHttp(_) => "transport",
            BindingsError::NormalizationStatus { .. }
            | BindingsError::PubchemStatus { .. }
            | BindingsError::UniprotStatus { .. } => "status",
            BindingsError::NoCompoundMapping(_) => "no_mapping",
            BindingsError::JsonDecode { .. } => "decode",
            BindingsError::MissingField { .. } => "missing_field",
            BindingsError::Filesystem(_) => "filesystem",
            BindingsError::Serialize(_) => "serialize",
        }
    }
}
