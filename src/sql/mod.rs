mod emitter;
mod error;
mod statement;

pub use emitter::{write_script, ScriptHeader};
pub use error::EmitError;
