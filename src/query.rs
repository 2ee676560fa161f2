//! Namespace-qualified tag path queries.
//!
//! A tag path such as `Placemark/kml:coordinates` is a `/`-separated list of
//! element names. The first segment is searched at any depth below the root
//! element, every following segment among the direct children of the previous
//! matches. Unprefixed segments are qualified with the bound alias.

use std::sync::OnceLock;

use regex::Regex;
use roxmltree::{Document, Node};
use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::namespace::NamespaceBinding;

static SEGMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn segment_regex() -> &'static Regex {
    SEGMENT_REGEX.get_or_init(|| {
        Regex::new(
            r"^(?:(?P<prefix>[\p{L}_][\p{L}\p{N}._-]*):)?(?P<local>[\p{L}_][\p{L}\p{N}._-]*|\*)$",
        )
        .expect("Failed to compile tag segment regex")
    })
}

/// One step of a tag path. `None` is the `*` wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    local: Option<String>,
}

/// A parsed tag path bound to a namespace URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPath {
    binding: NamespaceBinding,
    steps: Vec<Step>,
}

impl TagPath {
    /// Parse `raw` against `binding`, qualifying unprefixed segments with its alias.
    pub fn parse(raw: &str, binding: &NamespaceBinding) -> Result<Self> {
        let invalid = |reason: &str| ExtractError::InvalidTagPath {
            path: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.trim().is_empty() {
            return Err(invalid("tag path is empty"));
        }

        let mut steps = Vec::new();
        for segment in raw.split('/') {
            if segment.is_empty() {
                return Err(invalid("empty path segment"));
            }
            let caps = segment_regex()
                .captures(segment)
                .ok_or_else(|| invalid(&format!("'{}' is not a valid element name", segment)))?;

            if let Some(prefix) = caps.name("prefix")
                && prefix.as_str() != binding.alias()
            {
                return Err(ExtractError::UnknownPrefix {
                    prefix: prefix.as_str().to_string(),
                    alias: binding.alias().to_string(),
                });
            }

            let local = &caps["local"];
            steps.push(Step {
                local: (local != "*").then(|| local.to_string()),
            });
        }

        Ok(Self {
            binding: binding.clone(),
            steps,
        })
    }

    /// The fully qualified form, every segment carrying the alias.
    pub fn qualified(&self) -> String {
        self.steps
            .iter()
            .map(|step| {
                format!(
                    "{}:{}",
                    self.binding.alias(),
                    step.local.as_deref().unwrap_or("*")
                )
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// All matching elements in document order.
    pub fn select<'a, 'input>(&self, document: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
        let root = document.root_element();
        let Some((first, rest)) = self.steps.split_first() else {
            return Vec::new();
        };

        let mut matches: Vec<Node<'a, 'input>> = root
            .descendants()
            .skip(1)
            .filter(|node| self.step_matches(first, *node))
            .collect();

        for step in rest {
            matches = matches
                .iter()
                .flat_map(|node| node.children())
                .filter(|node| self.step_matches(step, *node))
                .collect();
        }

        matches.sort_by_key(|node| node.id().get());
        debug!(
            path = %self.qualified(),
            namespace = self.binding.uri(),
            count = matches.len(),
            "tag path selected"
        );
        matches
    }

    fn step_matches(&self, step: &Step, node: Node<'_, '_>) -> bool {
        if !node.is_element() {
            return false;
        }
        let name = node.tag_name();
        if !self.binding.matches(name.namespace()) {
            return false;
        }
        match &step.local {
            Some(local) => name.name() == local,
            None => true,
        }
    }
}
