mod dedup;
mod epoch;
mod error;
mod normalize;
mod types;
mod validate;

pub use dedup::Catalog;
pub use error::NormalizeError;
pub use normalize::Normalizer;
pub use types::{CatalogEntry, NumberMode, Numeric, OrbitalStateRecord, Selection};
pub use validate::validate_tle;
