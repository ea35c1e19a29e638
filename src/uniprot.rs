use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

use crate::domain::UniprotId;
use crate::error::BindingsError;
use crate::http::{build_client, decode_json, handle_status};
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProteinData {
    pub sequence: String,
    pub name: String,
}

pub trait UniprotClient: Send + Sync {
    fn fetch_entry(&self, id: &UniprotId) -> Result<Value, BindingsError>;
}

#[derive(Clone)]
pub struct UniprotHttpClient {
    client: Client,
    base_url: String,
}

impl UniprotHttpClient {
    pub fn new(settings: &Settings) -> Result<Self, BindingsError> {
        let client = build_client(settings.protein_timeout, BindingsError::UniprotHttp)?;
        Ok(Self {
            client,
            base_url: settings.uniprot_url.clone(),
        })
    }

    pub fn entry_url(&self, id: &UniprotId) -> String {
        format!("{}/{}.json", self.base_url, id.as_str())
    }
}

impl UniprotClient for UniprotHttpClient {
    fn fetch_entry(&self, id: &UniprotId) -> Result<Value, BindingsError> {
        let url = self.entry_url(id);
        tracing::debug!(%url, "uniprot request");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| BindingsError::UniprotHttp(err.to_string()))?;
        let response = handle_status(response, "UniProt request failed", |status, message| {
            BindingsError::UniprotStatus { status, message }
        })?;
        decode_json(response, "UniProt")
    }
}

pub fn resolve_protein<U>(client: &U, id: &UniprotId) -> Result<ProteinData, BindingsError>
where
    U: UniprotClient + ?Sized,
{
    let raw = client.fetch_entry(id)?;
    extract_protein(&raw)
}

pub fn extract_protein(raw: &Value) -> Result<ProteinData, BindingsError> {
    let sequence = raw
        .get("sequence")
        .and_then(|v| v.get("value"))
        .and_then(|v| v.as_str())
        .filter(|v| !v.is_empty());
    let name = raw
        .get("proteinDescription")
        .and_then(|v| v.get("recommendedName"))
        .and_then(|v| v.get("fullName"))
        .and_then(|v| v.get("value"))
        .and_then(|v| v.as_str())
        .filter(|v| !v.is_empty());

    match (sequence, name) {
        (Some(sequence), Some(name)) => Ok(ProteinData {
            sequence: sequence.to_string(),
            name: name.to_string(),
        }),
        (None, _) => Err(BindingsError::MissingField {
            service: "UniProt",
            field: "sequence.value",
        }),
        (Some(_), None) => Err(BindingsError::MissingField {
            service: "UniProt",
            field: "proteinDescription.recommendedName.fullName.value",
        }),
    }
}
