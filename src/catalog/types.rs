use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Descriptive fields of one tracked object.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub catalog_number: String,
    pub name: String,
    pub international_designator: Option<String>,
    pub country_code: String,
    pub launch_date: Option<String>,
    pub object_type: String,
    pub rcs_size: String,
}

/// A numeric element, either parsed here or left for the database to convert.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    Parsed(f64),
    Deferred(String),
}

/// One orbital state observation of a catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalStateRecord {
    pub catalog_number: String,
    /// Epoch text as exported. Orders records under [`Selection::Latest`].
    pub raw_epoch: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS` when the source epoch parsed, raw text otherwise.
    pub epoch: Option<String>,
    pub mean_motion: Numeric,
    pub eccentricity: Numeric,
    pub inclination: Numeric,
    pub ra_of_asc_node: Numeric,
    pub arg_of_pericenter: Numeric,
    pub mean_anomaly: Numeric,
    pub tle_line1: Option<String>,
    pub tle_line2: Option<String>,
    pub bstar: Numeric,
    pub mean_motion_dot: Numeric,
    pub mean_motion_ddot: Numeric,
}

/// Which orbital state records survive deduplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Selection {
    /// Only the record with the greatest epoch per catalog number.
    #[default]
    Latest,
    /// Every distinct epoch per catalog number.
    AllEpochs,
}

/// How numeric cells are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NumberMode {
    /// Parse as `f64`, failing the run on malformed text.
    #[default]
    Strict,
    /// Pass text through and let the database cast it.
    Deferred,
}
