//! Errors raised while constructing or querying a grid.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not load map file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed map data on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Occupancy data has {actual} cells, expected {width}x{height}")]
    Dimensions { width: usize, height: usize, actual: usize },

    #[error("Invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Cell ({i},{j}) is outside the grid")]
    OutOfBounds { i: i32, j: i32 },
}

impl Error {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Error {
        Error::Parse { line, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
