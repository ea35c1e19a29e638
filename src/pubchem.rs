use reqwest::blocking::Client;
use serde_json::Value;

use crate::domain::CompoundId;
use crate::error::BindingsError;
use crate::http::{build_client, decode_json, handle_status};
use crate::settings::Settings;

pub trait PubchemClient: Send + Sync {
    fn smiles_properties(&self, cid: &CompoundId) -> Result<Value, BindingsError>;
}

#[derive(Clone)]
pub struct PubchemHttpClient {
    client: Client,
    base_url: String,
}

impl PubchemHttpClient {
    pub fn new(settings: &Settings) -> Result<Self, BindingsError> {
        let client = build_client(settings.chemical_timeout, BindingsError::PubchemHttp)?;
        Ok(Self {
            client,
            base_url: settings.pubchem_url.clone(),
        })
    }

    fn property_url(&self, cid: &CompoundId) -> String {
        format!(
            "{}/compound/cid/{}/property/smiles/json",
            self.base_url,
            cid.as_str()
        )
    }
}

impl PubchemClient for PubchemHttpClient {
    fn smiles_properties(&self, cid: &CompoundId) -> Result<Value, BindingsError> {
        let url = self.property_url(cid);
        tracing::debug!(%url, "pubchem request");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| BindingsError::PubchemHttp(err.to_string()))?;
        let response = handle_status(response, "PubChem request failed", |status, message| {
            BindingsError::PubchemStatus { status, message }
        })?;
        decode_json(response, "PubChem")
    }
}

/// `PropertyTable.Properties[0].SMILES`; an empty string counts as missing.
pub fn extract_smiles(raw: &Value) -> Result<String, BindingsError> {
    raw.get("PropertyTable")
        .and_then(|table| table.get("Properties"))
        .and_then(|props| props.as_array())
        .and_then(|props| props.first())
        .and_then(|first| first.get("SMILES"))
        .and_then(|smiles| smiles.as_str())
        .filter(|smiles| !smiles.is_empty())
        .map(|smiles| smiles.to_string())
        .ok_or(BindingsError::MissingField {
            service: "PubChem",
            field: "PropertyTable.Properties[0].SMILES",
        })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn property_url_layout() {
        let client = PubchemHttpClient::new(&Settings::default()).unwrap();
        let cid: CompoundId = "2244".parse().unwrap();
        assert_eq!(
            client.property_url(&cid),
            "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/cid/2244/property/smiles/json"
        );
    }

    #[test]
    fn extract_first_property_only() {
        let raw = json!({
            "PropertyTable": {
                "Properties": [
                    {"CID": 2244, "SMILES": "CC(=O)OC1=CC=CC=C1C(=O)O"},
                    {"CID": 1, "SMILES": "C"}
                ]
            }
        });
        assert_eq!(extract_smiles(&raw).unwrap(), "CC(=O)OC1=CC=CC=C1C(=O)O");
    }

    #[test]
    fn missing_or_empty_smiles() {
        let empty_table = json!({"PropertyTable": {"Properties": []}});
        assert_matches!(
            extract_smiles(&empty_table),
            Err(BindingsError::MissingField { .. })
        );
        let blank = json!({"PropertyTable": {"Properties": [{"CID": 2244, "SMILES": ""}]}});
        assert_matches!(extract_smiles(&blank), Err(BindingsError::MissingField { .. }));
    }
}
