use sgp4::Elements;
use thiserror::Error;

use crate::catalog::types::OrbitalStateRecord;

#[derive(Debug, Error, PartialEq)]
pub enum TleIssue {
    #[error("missing TLE lines")]
    MissingLines,
    #[error("invalid TLE: {0}")]
    Invalid(String),
    #[error("TLE belongs to catalog number {found}")]
    CatalogMismatch { found: u64 },
}

/// Checks that the record's two TLE lines parse and describe the same object.
pub fn validate_tle(record: &OrbitalStateRecord) -> Result<(), TleIssue> {
    let (Some(line1), Some(line2)) = (&record.tle_line1, &record.tle_line2) else {
        return Err(TleIssue::MissingLines);
    };

    let elements = Elements::from_tle(None, line1.as_bytes(), line2.as_bytes())
        .map_err(|e| TleIssue::Invalid(e.to_string()))?;

    match record.catalog_number.trim().parse::<u64>() {
        Ok(n) if n != elements.norad_id => Err(TleIssue::CatalogMismatch {
            found: elements.norad_id,
        }),
        _ => Ok(()),
    }
}
