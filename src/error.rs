use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, NormError>;
