use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("invalid particle energy '{0}'")]
    InvalidEnergy(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
