use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read header of {path}: {source}")]
    Header { path: PathBuf, source: csv::Error },
    #[error("{path} line {line}: {source}")]
    Record {
        path: PathBuf,
        line: u64,
        source: csv::Error,
    },
}
