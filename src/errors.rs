//!
//! src/errors.rs  Andrew Belles  Sept 18th, 2025
//!
//! Defines enums and methods of error conversion
//! for errors the importer uses
//!
//!

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("config error: {0}")]
    Config(String),
    #[error("read error: {0}")]
    Read(String),
    #[error("csv error: {0}")]
    Csv(String),
    #[error("write error: {0}")]
    Write(String),
}

impl From<csv::Error> for ImporterError {
    fn from(e: csv::Error) -> Self { ImporterError::Csv(e.to_string()) }
}
