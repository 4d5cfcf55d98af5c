use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("cannot write SQL output: {0}")]
    Io(#[from] std::io::Error),
}
