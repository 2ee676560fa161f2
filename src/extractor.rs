//! Tag extraction pipeline
//!
//! read file -> parse XML -> resolve namespace -> query tag path -> write text.
//! [`extract_from_str`] is the pure part and never touches the file system.

use std::io::ErrorKind;
use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};
use tracing::{debug, info, warn};

use crate::config::ExtractConfig;
use crate::error::{ExtractError, Result};
use crate::namespace::NamespaceBinding;
use crate::output::{ensure_output_directory, serialize, write_output};
use crate::query::TagPath;

/// Values pulled out of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Text of each matched element, in document order.
    pub values: Vec<String>,
    /// 1 when nothing matched at all, otherwise 0.
    pub missing: usize,
    /// Matched elements that carried no text.
    pub empty: usize,
}

impl Extraction {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Newline-joined values, ready to be written out.
    pub fn to_text(&self) -> String {
        serialize(&self.values)
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub tag: String,
    pub output_path: std::path::PathBuf,
    pub extraction: Extraction,
}

/// Extract the text of every element matching `tag_path` from an XML string.
pub fn extract_from_str(xml: &str, tag_path: &str, alias: &str) -> Result<Extraction> {
    let document = parse_document(xml)?;
    extract_document(&document, tag_path, alias)
}

/// Extract from an already parsed document.
pub fn extract_document(document: &Document<'_>, tag_path: &str, alias: &str) -> Result<Extraction> {
    let binding = NamespaceBinding::resolve(document, alias);
    let path = TagPath::parse(tag_path, &binding)?;

    let mut extraction = Extraction::default();
    let matches = path.select(document);
    if matches.is_empty() {
        extraction.missing += 1;
        return Ok(extraction);
    }

    for node in matches {
        match element_text(node) {
            Some(text) => extraction.values.push(text),
            None => {
                extraction.empty += 1;
                extraction.values.push(String::new());
            }
        }
    }

    Ok(extraction)
}

/// Text inside `node` before its first child element.
///
/// Comments and processing instructions are skipped, so
/// `<name><!-- c -->Station</name>` reads as `Station`.
pub fn element_text(node: Node<'_, '_>) -> Option<String> {
    let mut text: Option<String> = None;
    for child in node.children() {
        if child.is_element() {
            break;
        }
        if child.is_text()
            && let Some(chunk) = child.text()
        {
            text.get_or_insert_with(String::new).push_str(chunk);
        }
    }
    text
}

/// Parse with DTDs allowed; KML exports sometimes carry a `<!DOCTYPE>` line.
pub fn parse_document(xml: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(xml, options)
        .map_err(|source| ExtractError::MalformedXml { source })
}

/// Read the input file, mapping "not found" to its own error kind.
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ExtractError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => ExtractError::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Run the whole pipeline for one configuration.
pub fn run(config: &ExtractConfig) -> Result<RunReport> {
    info!(input = %config.input_path.display(), "reading input");
    let xml = read_input(&config.input_path)?;
    debug!(bytes = xml.len(), "input read");

    let document = parse_document(&xml)?;
    let extraction = extract_document(&document, &config.tag_path, &config.namespace_alias)?;
    if extraction.missing > 0 {
        warn!(tag = %config.tag_path, "no matching tags found");
    }

    ensure_output_directory(&config.output_path)?;
    write_output(&config.output_path, &extraction.to_text())?;
    info!(
        output = %config.output_path.display(),
        values = extraction.len(),
        "output written"
    );

    Ok(RunReport {
        tag: config.tag_path.clone(),
        output_path: config.output_path.clone(),
        extraction,
    })
}
