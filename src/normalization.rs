use reqwest::blocking::Client;
use serde_json::Value;

use crate::domain::{CompoundId, Curie, PUBCHEM_COMPOUND_PREFIX};
use crate::error::BindingsError;
use crate::http::{build_client, decode_json, handle_status};
use crate::settings::Settings;

pub trait NormalizationClient: Send + Sync {
    /// Raw `get_normalized_nodes` response for a single curie.
    fn normalized_nodes(&self, curie: &Curie) -> Result<Value, BindingsError>;
}

#[derive(Clone)]
pub struct NodeNormHttpClient {
    client: Client,
    base_url: String,
}

impl NodeNormHttpClient {
    pub fn new(settings: &Settings) -> Result<Self, BindingsError> {
        let client = build_client(settings.chemical_timeout, BindingsError::NormalizationHttp)?;
        Ok(Self {
            client,
            base_url: settings.node_norm_url.clone(),
        })
    }
}

impl NormalizationClient for NodeNormHttpClient {
    fn normalized_nodes(&self, curie: &Curie) -> Result<Value, BindingsError> {
        let curie = curie.to_string();
        tracing::debug!(url = %self.base_url, %curie, "node normalization request");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("curie", curie.as_str()),
                ("conflate", "true"),
                ("drug_chemical_conflate", "false"),
                ("description", "false"),
                ("individual_types", "false"),
            ])
            .send()
            .map_err(|err| BindingsError::NormalizationHttp(err.to_string()))?;
        let response = handle_status(
            response,
            "node normalization request failed",
            |status, message| BindingsError::NormalizationStatus { status, message },
        )?;
        decode_json(response, "node normalization")
    }
}

pub fn extract_equivalent_identifiers(raw: &Value, curie: &Curie) -> Vec<String> {
    raw.get(curie.to_string())
        .and_then(|node| node.get("equivalent_identifiers"))
        .and_then(|ids| ids.as_array())
        .map(|ids| {
            ids.iter()
                .filter_map(|entry| entry.get("identifier").and_then(|v| v.as_str()))
                .map(|id| id.to_string())
                .collect()
        })
        .unwrap_or_default()
}

pub fn select_compound_id(identifiers: &[String]) -> Option<CompoundId> {
    let prefix = format!("{PUBCHEM_COMPOUND_PREFIX}:");
    let local = identifiers
        .iter()
        .find(|identifier| identifier.starts_with(&prefix))
        .and_then(|identifier| Curie::parse(identifier))?
        .local;
    local.parse().ok()
}
