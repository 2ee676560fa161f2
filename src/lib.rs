//! # kml-extract Library
//!
//! Pull the text of one (optionally nested) tag out of a KML document and
//! write it, one value per line, to a plain-text file. The document's
//! namespace is taken from its root element, so tag paths can be written with
//! a short alias such as `kml:`.

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod namespace;
pub mod output;
pub mod query;

pub use cli::{Cli, VerbosityLevel};
pub use config::{Config, ConfigError, ConfigManager, EnvProvider, ExtractConfig};
pub use error::{ExtractError, Result};
pub use extractor::{Extraction, RunReport, extract_document, extract_from_str, run};
pub use namespace::{DEFAULT_ALIAS, NamespaceBinding};
pub use output::Output;
pub use query::TagPath;
