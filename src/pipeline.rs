use std::fs::{self, File};
use std::io::BufWriter;

use chrono::{DateTime, Utc};
use log::{debug, error, info};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::{Catalog, NormalizeError, Normalizer};
use crate::config::Config;
use crate::reader::CsvFile;
use crate::sql::{write_script, EmitError, ScriptHeader};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("normalize error: {0}")]
    Normalize(#[from] NormalizeError),
    #[error("emit error: {0}")]
    Emit(#[from] EmitError),
}

/// Counters reported after a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportSummary {
    pub files_read: usize,
    pub files_failed: usize,
    pub rows: usize,
    pub rows_skipped: usize,
    pub entries: usize,
    pub records: usize,
    pub statements: usize,
}

/// Reads every input in order and builds the deduplicated catalog.
///
/// A file that cannot be opened or read is logged and counted; rows read from
/// it before the failure are kept. Malformed numbers in strict mode abort.
pub fn load(config: &Config) -> Result<(Catalog, ImportSummary), ImportError> {
    let normalizer = Normalizer::new(config.numbers);
    let mut catalog = Catalog::new(config.selection);
    let mut summary = ImportSummary::default();

    for path in &config.inputs {
        let file = match CsvFile::open(path) {
            Ok(file) => file,
            Err(e) => {
                error!("Error processing {}: {}", path.display(), e);
                summary.files_failed += 1;
                continue;
            }
        };

        debug!("{}: columns {:?}", path.display(), file.headers());

        let mut rows = 0;
        let mut failed = false;
        for row in file.rows() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    error!("Error processing {}: {}", path.display(), e);
                    failed = true;
                    break;
                }
            };

            rows += 1;
            match normalizer.normalize(&row)? {
                Some((entry, record)) => catalog.insert(entry, record),
                None => {
                    debug!("{}: skipping row {} without catalog number", path.display(), rows);
                    summary.rows_skipped += 1;
                }
            }
        }

        summary.rows += rows;
        if failed {
            summary.files_failed += 1;
        } else {
            summary.files_read += 1;
            info!("Processed {} ({} rows)", path.display(), rows);
        }
    }

    summary.entries = catalog.entries().len();
    summary.records = catalog.record_count();
    info!(
        "Found {} unique satellites, {} TLE records selected ({})",
        summary.entries, summary.records, config.selection
    );

    Ok((catalog, summary))
}

/// Loads all inputs and writes the SQL script to `config.output`.
pub fn run(config: &Config, generated_at: DateTime<Utc>) -> Result<ImportSummary, ImportError> {
    let (catalog, mut summary) = load(config)?;

    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(EmitError::from)?;
        }
    }
    let file = File::create(&config.output).map_err(EmitError::from)?;
    let mut out = BufWriter::new(file);

    let header = ScriptHeader {
        generated_at,
        source_files: config.inputs.len(),
        data_source: &config.data_source,
    };
    summary.statements = write_script(&mut out, &catalog, &header)?;

    info!(
        "SQL file generated: {} ({} statements)",
        config.output.display(),
        summary.statements
    );
    Ok(summary)
}
