//! Job Seeder
//!
//! Writes the hardcoded job catalogue to backend-RecrAi/data/jobs.json,
//! resolved from this crate's location rather than the working directory.

mod catalog;

use common::Job;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, Level};

const SERVICE_DIR: &str = "backend-RecrAi";
const DATA_DIR: &str = "data";
const JOBS_FILE: &str = "jobs.json";

#[derive(Debug, Error)]
enum SeedError {
    #[error("failed to create directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize jobs to {path:?}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Directory one level above this crate.
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

fn jobs_path(root: &Path) -> PathBuf {
    root.join(SERVICE_DIR).join(DATA_DIR).join(JOBS_FILE)
}

/// Writes `jobs` as a pretty JSON array to `path`, replacing any previous
/// content. Missing parent directories are created. Returns the number of
/// records written.
fn seed(jobs: &[Job], path: &Path) -> Result<usize, SeedError> {
    if let Some(dir) = path.parent() {
        debug!(dir = %dir.display(), "ensuring output directory");
        fs::create_dir_all(dir).map_err(|source| SeedError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source| SeedError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, jobs).map_err(|source| {
        // to_writer surfaces io failures as serde_json errors
        if source.is_io() {
            SeedError::Write {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            SeedError::Serialize {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    writer.flush().map_err(write_err)?;

    info!(path = %path.display(), count = jobs.len(), "jobs written");
    Ok(jobs.len())
}

fn confirmation(path: &Path, count: usize) -> String {
    format!("[OK] Gravado em: {} (vagas: {})", path.display(), count)
}

fn main() -> Result<(), SeedError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .init();

    let jobs = catalog::catalog();
    let path = jobs_path(&project_root());
    debug!(path = %path.display(), "resolved output path");

    let count = seed(&jobs, &path)?;
    println!("{}", confirmation(&path, count));
    Ok(())
}
