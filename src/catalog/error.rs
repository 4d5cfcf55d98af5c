use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("catalog number {catalog_number}: invalid number in {field}: {value:?}")]
    InvalidNumber {
        catalog_number: String,
        field: &'static str,
        value: String,
    },
}
