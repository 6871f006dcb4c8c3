//! Template descriptor types.
//!
//! Each template-type directory carries a `template.json` descriptor naming the
//! site archetype and its pages. Descriptors are parsed once at store load time
//! and never mutated afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parsed `template.json` descriptor for one template-type.
///
/// Pages are kept in a `BTreeMap` so iteration order is always ascending
/// page-id, which keeps default-page resolution reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDefinition {
    /// Human-readable site name, used for the site title marker.
    pub name: String,

    /// Page-id to page metadata.
    #[serde(default)]
    pub pages: BTreeMap<String, PageMeta>,
}

/// Metadata for a single page of a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    /// Display name shown in navigation.
    pub name: String,

    /// Whether the page is part of the default selection.
    #[serde(default)]
    pub default: bool,
}

impl TemplateDefinition {
    /// Page-ids flagged as default, in ascending page-id order.
    #[must_use]
    pub fn default_pages(&self) -> Vec<String> {
        self.pages
            .iter()
            .filter(|(_, meta)| meta.default)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Display name for a page, falling back to a title-cased page-id when
    /// the descriptor carries no metadata for it.
    #[must_use]
    pub fn display_name(&self, page_id: &str) -> String {
        self.pages
            .get(page_id)
            .map(|meta| meta.name.clone())
            .unwrap_or_else(|| title_case(page_id))
    }
}

/// Title-case a page-id: `our_team` becomes `Our Team`.
#[must_use]
pub fn title_case(id: &str) -> String {
    id.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
