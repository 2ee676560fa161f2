use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Main application error type that encompasses all possible failure modes
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("The file {} was not found.", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Could not read the file {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse the XML file: {source}")]
    MalformedXml {
        #[source]
        source: roxmltree::Error,
    },

    #[error("Directory {} does not exist.", dir.display())]
    OutputDirectoryMissing { dir: PathBuf },

    #[error("Could not write the output file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid tag path '{path}': {reason}")]
    InvalidTagPath { path: String, reason: String },

    #[error("Prefix '{prefix}' in tag path is not bound (expected '{alias}')")]
    UnknownPrefix { prefix: String, alias: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ExtractError {
    /// Process exit status for this failure. Every handled failure maps to 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ExtractError>;
