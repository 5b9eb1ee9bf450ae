use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A job posting as stored in `jobs.json`.
///
/// JSON keys are the Portuguese names the backend reads.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "local")]
    pub location: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "detalhes")]
    pub details: String,
    #[serde(rename = "requisitos")]
    pub requirements: Vec<String>,
}

/// Failure while reading a jobs file back.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a `jobs.json` array back into records, in file order.
pub fn load_jobs(path: &Path) -> Result<Vec<Job>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
