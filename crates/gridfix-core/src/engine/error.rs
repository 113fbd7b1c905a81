use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::lammps::LammpsError;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read '{path}': {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: LammpsError,
    },

    #[error("Failed to write '{path}': {source}", path = path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: LammpsError,
    },

    #[error(transparent)]
    Format(#[from] LammpsError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal logic error: {0}")]
    Internal(String),
}
