use thiserror::Error;

use crate::GridSize;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Grid dimensions do not match {size1} <-> {size2}")]
    SizeMismatch { size1: GridSize, size2: GridSize },
    #[error("Invalid path: {0}")]
    InvalidPath(std::path::PathBuf),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Runtime error: {0}")]
    Runtime(String),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Error::InvalidNumber(err.to_string())
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Error::InvalidNumber(err.to_string())
    }
}
