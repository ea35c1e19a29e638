use camino::Utf8Path;
use serde::Serialize;

use crate::chemical::resolve_smiles;
use crate::config::{InputPair, PairEntry, PairsLoader};
use crate::domain::{
    DrugbankId, UniprotId, protein_name_placeholder, sequence_placeholder, smiles_placeholder,
};
use crate::error::BindingsError;
use crate::normalization::NormalizationClient;
use crate::pubchem::PubchemClient;
use crate::record::AffinityRecord;
use crate::store::OutputStore;
use crate::uniprot::{ProteinData, UniprotClient, resolve_protein};

const RULE_WIDTH: usize = 40;
const SMILES_PREVIEW_CHARS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressLevel {
    Heading,
    Info,
    Success,
    Warning,
    Error,
    Rule,
}

#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub level: ProgressLevel,
    pub message: String,
}

impl ProgressEvent {
    fn new(level: ProgressLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

pub trait ProgressSink {
    fn event(&self, event: ProgressEvent);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairStatus {
    Written,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderField {
    Smiles,
    Sequence,
    ProteinName,
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupFailure {
    pub lookup: &'static str,
    pub kind: &'static str,
    pub message: String,
}

impl LookupFailure {
    fn new(lookup: &'static str, err: &BindingsError) -> Self {
        Self {
            lookup,
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PairOutcome {
    /// 1-based position in the input list.
    pub index: usize,
    pub drug_name: String,
    pub drugbank_id: Option<String>,
    pub uniprot_id: Option<String>,
    pub status: PairStatus,
    pub output_path: Option<String>,
    pub placeholders: Vec<PlaceholderField>,
    pub failures: Vec<LookupFailure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    pub started_at: String,
    pub finished_at: String,
    pub output_dir: String,
    pub total_pairs: usize,
    pub considered: usize,
    pub written: usize,
    pub skipped: usize,
    pub items: Vec<PairOutcome>,
}

#[derive(Clone)]
pub struct App<N: NormalizationClient, P: PubchemClient, U: UniprotClient> {
    store: OutputStore,
    normalizer: N,
    pubchem: P,
    uniprot: U,
}

impl<N: NormalizationClient, P: PubchemClient, U: UniprotClient> App<N, P, U> {
    pub fn new(store: OutputStore, normalizer: N, pubchem: P, uniprot: U) -> Self {
        Self {
            store,
            normalizer,
            pubchem,
            uniprot,
        }
    }

    pub fn store(&self) -> &OutputStore {
        &self.store
    }

    pub fn generate_from_file(
        &self,
        input: &Utf8Path,
        limit: Option<usize>,
        sink: &dyn ProgressSink,
    ) -> Result<GenerateResult, BindingsError> {
        PairsLoader::ensure_readable(input)?;
        sink.event(ProgressEvent::new(
            ProgressLevel::Heading,
            format!("Starting file generation from '{input}'"),
        ));

        self.store.ensure_root()?;
        sink.event(ProgressEvent::new(
            ProgressLevel::Info,
            format!("Outputting files to: '{}'", self.store.display_root()),
        ));

        let entries = PairsLoader::load(input)?;
        self.generate(&entries, limit, sink)
    }

    pub fn generate(
        &self,
        entries: &[PairEntry],
        limit: Option<usize>,
        sink: &dyn ProgressSink,
    ) -> Result<GenerateResult, BindingsError> {
        let started_at = chrono::Utc::now().to_rfc3339();
        let total = entries.len();
        let considered = limit.map_or(total, |limit| limit.min(total));

        let mut items = Vec::with_capacity(considered);
        for (offset, entry) in entries.iter().take(considered).enumerate() {
            items.push(self.process_entry(offset + 1, total, entry, sink)?);
        }

        sink.event(ProgressEvent::new(ProgressLevel::Rule, "-".repeat(RULE_WIDTH)));
        sink.event(ProgressEvent::new(
            ProgressLevel::Heading,
            "Generation complete!",
        ));

        let written = items
            .iter()
            .filter(|item| item.status == PairStatus::Written)
            .count();
        Ok(GenerateResult {
            started_at,
            finished_at: chrono::Utc::now().to_rfc3339(),
            output_dir: self.store.root().to_string(),
            total_pairs: total,
            considered,
            written,
            skipped: items.len() - written,
            items,
        })
    }

    fn process_entry(
        &self,
        index: usize,
        total: usize,
        entry: &PairEntry,
        sink: &dyn ProgressSink,
    ) -> Result<PairOutcome, BindingsError> {
        sink.event(ProgressEvent::new(ProgressLevel::Rule, "-".repeat(RULE_WIDTH)));
        sink.event(ProgressEvent::new(
            ProgressLevel::Heading,
            format!(
                "Processing Pair {index}/{total}: {} ({}) | {}",
                entry.drug_name(),
                entry.drugbank_id.as_deref().unwrap_or("None"),
                entry.uniprot_id.as_deref().unwrap_or("None"),
            ),
        ));

        let mut outcome = PairOutcome {
            index,
            drug_name: entry.drug_name().to_string(),
            drugbank_id: entry.drugbank_id.clone(),
            uniprot_id: entry.uniprot_id.clone(),
            status: PairStatus::Skipped,
            output_path: None,
            placeholders: Vec::new(),
            failures: Vec::new(),
        };

        let Some(pair) = entry.validate() else {
            sink.event(ProgressEvent::new(
                ProgressLevel::Warning,
                "  [Skipping] Missing DrugBank or UniProt ID in this entry.",
            ));
            return Ok(outcome);
        };

        let record = self.build_record(&pair, &mut outcome, sink);
        let protein_name = record
            .protein()
            .map(|protein| protein.name.as_str())
            .unwrap_or_default();
        let path = self.store.record_path(&pair.drug_name, protein_name);
        OutputStore::write_record(&path, &record)?;

        sink.event(ProgressEvent::new(
            ProgressLevel::Success,
            format!("\u{2713} Successfully created '{path}'"),
        ));
        outcome.status = PairStatus::Written;
        outcome.output_path = Some(path.to_string());
        Ok(outcome)
    }

    fn build_record(
        &self,
        pair: &InputPair,
        outcome: &mut PairOutcome,
        sink: &dyn ProgressSink,
    ) -> AffinityRecord {
        let smiles = match self.fetch_smiles(&pair.drugbank_id, sink) {
            Ok(smiles) => smiles,
            Err(err) => {
                outcome.failures.push(LookupFailure::new("smiles", &err));
                outcome.placeholders.push(PlaceholderField::Smiles);
                smiles_placeholder(&pair.drugbank_id)
            }
        };

        let (sequence, protein_name) = match self.fetch_protein(&pair.uniprot_id, sink) {
            Ok(ProteinData { sequence, name }) => (sequence, name),
            Err(err) => {
                outcome.failures.push(LookupFailure::new("protein", &err));
                outcome.placeholders.push(PlaceholderField::Sequence);
                outcome.placeholders.push(PlaceholderField::ProteinName);
                (
                    sequence_placeholder(&pair.uniprot_id),
                    protein_name_placeholder(&pair.uniprot_id),
                )
            }
        };

        AffinityRecord::new(&protein_name, &sequence, &pair.drug_name, &smiles)
    }

    fn fetch_smiles(
        &self,
        drugbank_id: &DrugbankId,
        sink: &dyn ProgressSink,
    ) -> Result<String, BindingsError> {
        sink.event(ProgressEvent::new(
            ProgressLevel::Info,
            format!("-> Fetching SMILES via PubChem for {drugbank_id}"),
        ));
        match resolve_smiles(&self.normalizer, &self.pubchem, drugbank_id) {
            Ok(smiles) => {
                let preview: String = smiles.chars().take(SMILES_PREVIEW_CHARS).collect();
                sink.event(ProgressEvent::new(
                    ProgressLevel::Success,
                    format!("  [Success] Found SMILES via PubChem: {preview}..."),
                ));
                Ok(smiles)
            }
            Err(err) => {
                tracing::warn!(%drugbank_id, kind = err.kind(), "SMILES lookup failed: {err}");
                sink.event(ProgressEvent::new(
                    ProgressLevel::Warning,
                    format!("  [Warning] No SMILES found via PubChem for {drugbank_id}."),
                ));
                Err(err)
            }
        }
    }

    fn fetch_protein(
        &self,
        uniprot_id: &UniprotId,
        sink: &dyn ProgressSink,
    ) -> Result<ProteinData, BindingsError> {
        sink.event(ProgressEvent::new(
            ProgressLevel::Info,
            format!("-> Fetching sequence for {uniprot_id} from UniProt"),
        ));
        match resolve_protein(&self.uniprot, uniprot_id) {
            Ok(protein) => {
                sink.event(ProgressEvent::new(
                    ProgressLevel::Success,
                    format!("  [Success] Found sequence for '{}'.", protein.name),
                ));
                Ok(protein)
            }
            Err(err) => {
                tracing::warn!(%uniprot_id, kind = err.kind(), "protein lookup failed: {err}");
                let event = match &err {
                    BindingsError::MissingField { .. } => ProgressEvent::new(
                        ProgressLevel::Warning,
                        format!(
                            "  [Warning] JSON response for {uniprot_id} is missing sequence or name."
                        ),
                    ),
                    BindingsError::JsonDecode { .. } => ProgressEvent::new(
                        ProgressLevel::Error,
                        format!("  [Error] Failed to decode JSON from UniProt for {uniprot_id}."),
                    ),
                    other => ProgressEvent::new(
                        ProgressLevel::Error,
                        format!("  [Error] Failed to fetch data for {uniprot_id}: {other}"),
                    ),
                };
                sink.event(event);
                Err(err)
            }
        }
    }
}
