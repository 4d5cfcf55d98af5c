mod error;

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};

pub use error::ReadError;

/// One data row keyed by header name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    /// Returns the cell for `name`, treating an empty cell as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// First non-empty cell among `names`.
    pub fn first_of(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|n| self.get(n))
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// An open CSV export whose first line is the header.
pub struct CsvFile {
    path: PathBuf,
    headers: Vec<String>,
    reader: csv::Reader<File>,
}

impl CsvFile {
    pub fn open(path: &Path) -> Result<Self, ReadError> {
        let file = File::open(path).map_err(|source| ReadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|source| ReadError::Header {
                path: path.to_path_buf(),
                source,
            })?
            .iter()
            .map(String::from)
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            headers,
            reader,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Lazily yields rows. Iteration ends after the first read error.
    pub fn rows(self) -> Rows {
        Rows {
            file: self,
            record: StringRecord::new(),
            done: false,
        }
    }
}

pub struct Rows {
    file: CsvFile,
    record: StringRecord,
    done: bool,
}

impl Iterator for Rows {
    type Item = Result<Row, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let line = self.file.reader.position().line();
        match self.file.reader.read_record(&mut self.record) {
            Ok(true) => Some(Ok(self
                .file
                .headers
                .iter()
                .zip(self.record.iter())
                .map(|(h, v)| (h.as_str(), v))
                .collect())),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(source) => {
                self.done = true;
                Some(Err(ReadError::Record {
                    path: self.file.path.clone(),
                    line,
                    source,
                }))
            }
        }
    }
}
