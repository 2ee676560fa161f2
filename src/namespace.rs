//! Namespace resolution from the document root.
//!
//! KML documents declare their namespace once, as the default namespace of the
//! root element. The URI is read off the root tag in Clark notation
//! (`{uri}LocalName`) and bound to a short alias that tag paths can refer to.

use roxmltree::{Document, Node};
use tracing::debug;

/// Alias used when none is configured.
pub const DEFAULT_ALIAS: &str = "kml";

/// A single alias → URI pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceBinding {
    alias: String,
    uri: String,
}

impl NamespaceBinding {
    pub fn new(alias: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            uri: uri.into(),
        }
    }

    /// Bind `alias` to the namespace carried by the document's root tag.
    ///
    /// A root element without a namespace binds the empty URI, which matches
    /// elements that have no namespace either.
    pub fn resolve(document: &Document<'_>, alias: &str) -> Self {
        let root_tag = clark_name(document.root_element());
        let uri = namespace_uri_from_tag(&root_tag);
        debug!(root = %root_tag, alias, uri, "resolved document namespace");
        Self::new(alias, uri)
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Whether an element's namespace is the bound one.
    pub fn matches(&self, namespace: Option<&str>) -> bool {
        namespace.unwrap_or("") == self.uri
    }
}

/// Render an element name in Clark notation.
pub fn clark_name(node: Node<'_, '_>) -> String {
    let name = node.tag_name();
    match name.namespace() {
        Some(ns) => format!("{{{}}}{}", ns, name.name()),
        None => name.name().to_string(),
    }
}

/// Pull the URI out of a Clark-notation tag; empty when the tag is unqualified.
pub fn namespace_uri_from_tag(tag: &str) -> &str {
    match tag.strip_prefix('{').and_then(|rest| rest.split_once('}')) {
        Some((uri, _)) => uri,
        None => "",
    }
}
