use std::time::Duration;

use crate::error::BindingsError;

pub const NODE_NORM_URL_KEY: &str = "KIRA_BOLTZ_NODE_NORM_URL";
pub const PUBCHEM_URL_KEY: &str = "KIRA_BOLTZ_PUBCHEM_URL";
pub const UNIPROT_URL_KEY: &str = "KIRA_BOLTZ_UNIPROT_URL";
pub const CHEMICAL_TIMEOUT_KEY: &str = "KIRA_BOLTZ_CHEMICAL_TIMEOUT_SECS";
pub const PROTEIN_TIMEOUT_KEY: &str = "KIRA_BOLTZ_PROTEIN_TIMEOUT_SECS";

const DEFAULT_NODE_NORM_URL: &str =
    "https://nodenormalization-sri.renci.org/1.5/get_normalized_nodes";
const DEFAULT_PUBCHEM_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";
const DEFAULT_UNIPROT_URL: &str = "https://rest.uniprot.org/uniprotkb";
const DEFAULT_CHEMICAL_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PROTEIN_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub node_norm_url: String,
    pub pubchem_url: String,
    pub uniprot_url: String,
    /// Applies to both the normalization and the PubChem request.
    pub chemical_timeout: Duration,
    pub protein_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            node_norm_url: DEFAULT_NODE_NORM_URL.to_string(),
            pubchem_url: DEFAULT_PUBCHEM_URL.to_string(),
            uniprot_url: DEFAULT_UNIPROT_URL.to_string(),
            chemical_timeout: Duration::from_secs(DEFAULT_CHEMICAL_TIMEOUT_SECS),
            protein_timeout: Duration::from_secs(DEFAULT_PROTEIN_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, BindingsError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                tracing::warn!("ignoring unreadable .env file: {err}");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, BindingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let url = |key: &str, default: String| {
            lookup(key)
                .map(|value| value.trim().trim_end_matches('/').to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(default)
        };
        let timeout = |key: &str, default: Duration| -> Result<Duration, BindingsError> {
            match lookup(key) {
                None => Ok(default),
                Some(value) => value
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|err| BindingsError::InvalidSetting {
                        key: key.to_string(),
                        message: format!("{value:?}: {err}"),
                    }),
            }
        };

        Ok(Self {
            node_norm_url: url(NODE_NORM_URL_KEY, defaults.node_norm_url),
            pubchem_url: url(PUBCHEM_URL_KEY, defaults.pubchem_url),
            uniprot_url: url(UNIPROT_URL_KEY, defaults.uniprot_url),
            chemical_timeout: timeout(CHEMICAL_TIMEOUT_KEY, defaults.chemical_timeout)?,
            protein_timeout: timeout(PROTEIN_TIMEOUT_KEY, defaults.protein_timeout)?,
        })
    }
}
