use std::fs;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::Builder;

use crate::error::BindingsError;
use crate::record::{AffinityRecord, record_file_name};

pub const DEFAULT_OUTPUT_DIR: &str = "data/affinities_config_files/";

#[derive(Debug, Clone)]
pub struct OutputStore {
    root: Utf8PathBuf,
}

impl OutputStore {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn display_root(&self) -> Utf8PathBuf {
        fs::canonicalize(self.root.as_std_path())
            .ok()
            .and_then(|path| Utf8PathBuf::from_path_buf(path).ok())
            .unwrap_or_else(|| self.root.clone())
    }

    pub fn ensure_root(&self) -> Result<(), BindingsError> {
        fs::create_dir_all(self.root.as_std_path())
            .map_err(|err| BindingsError::Filesystem(format!("create {}: {err}", self.root)))
    }

    pub fn record_path(&self, drug_name: &str, protein_name: &str) -> Utf8PathBuf {
        self.root.join(record_file_name(drug_name, protein_name))
    }

    pub fn write_record(path: &Utf8Path, record: &AffinityRecord) -> Result<(), BindingsError> {
        let content = record.to_yaml()?;
        Self::write_bytes_atomic(path, content.as_bytes())
    }

    pub fn write_bytes_atomic(path: &Utf8Path, content: &[u8]) -> Result<(), BindingsError> {
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let mut temp = Builder::new()
            .prefix(".kira-boltz")
            .suffix(".tmp")
            .tempfile_in(parent.as_std_path())
            .map_err(|err| BindingsError::Filesystem(err.to_string()))?;
        temp.write_all(content)
            .map_err(|err| BindingsError::Filesystem(format!("write {path}: {err}")))?;
        temp.persist(path.as_std_path())
            .map_err(|err| BindingsError::Filesystem(format!("persist {path}: {}", err.error)))?;
        Ok(())
    }
}
