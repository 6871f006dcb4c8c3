//! Template store: loads and indexes template definitions.
//!
//! The store scans one subdirectory per template-type under a template root.
//! Descriptors are parsed once at load time into an immutable index; page
//! fragments and assets are read from disk on demand. The store is read-only
//! for the process lifetime, so it is safely shared across concurrent
//! generation calls.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use sitesmith_core::TemplateDefinition;
use tracing::{debug, info, warn};

/// Descriptor file expected in each template-type directory.
const DESCRIPTOR_FILE: &str = "template.json";

/// In-memory index of template definitions plus on-demand content lookups.
#[derive(Debug)]
pub struct TemplateStore {
    root: PathBuf,
    templates: BTreeMap<String, TemplateDefinition>,
}

impl TemplateStore {
    /// Scan the template root and build the store.
    ///
    /// Subdirectories without a parseable descriptor are skipped with a
    /// warning. A missing root directory is reported once and yields an
    /// empty store; lookups then all return not-found.
    #[must_use]
    pub fn load(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut templates = BTreeMap::new();

        let entries = match fs::read_dir(&root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %root.display(), error = %e, "failed to read template root");
                return Self { root, templates };
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let Some(kind) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
                continue;
            };

            let descriptor_path = path.join(DESCRIPTOR_FILE);
            match Self::load_descriptor(&descriptor_path) {
                Ok(definition) => {
                    debug!(template = %kind, pages = definition.pages.len(), "loaded template");
                    templates.insert(kind, definition);
                }
                Err(e) => {
                    warn!(template = %kind, error = %e, "skipping template without valid descriptor");
                }
            }
        }

        info!(count = templates.len(), dir = %root.display(), "template store loaded");
        Self { root, templates }
    }

    fn load_descriptor(path: &Path) -> Result<TemplateDefinition, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let definition = serde_json::from_str(&content)?;
        Ok(definition)
    }

    /// All known definitions, keyed by template-type.
    #[must_use]
    pub fn all(&self) -> &BTreeMap<String, TemplateDefinition> {
        &self.templates
    }

    /// Definition for one template-type.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&TemplateDefinition> {
        self.templates.get(kind)
    }

    /// Raw page fragment for `(kind, page_id)`, if the template is known and
    /// the fragment exists on disk.
    #[must_use]
    pub fn page(&self, kind: &str, page_id: &str) -> Option<String> {
        if self.get(kind).is_none() || !safe_component(page_id) {
            return None;
        }
        let path = self.root.join(kind).join("pages").join(format!("{page_id}.html"));
        fs::read_to_string(path).ok()
    }

    /// Base stylesheet for a template-type.
    #[must_use]
    pub fn base_css(&self, kind: &str) -> Option<String> {
        let path = self.root.join(kind).join("css").join("base.css");
        fs::read_to_string(path).ok()
    }

    /// Theme stylesheet for `(kind, theme)`.
    #[must_use]
    pub fn theme_css(&self, kind: &str, theme: &str) -> Option<String> {
        if !safe_component(theme) {
            return None;
        }
        let path = self
            .root
            .join(kind)
            .join("css")
            .join("themes")
            .join(format!("{theme}.css"));
        fs::read_to_string(path).ok()
    }

    /// All script assets for a template-type as `(file name, content)` pairs,
    /// sorted by file name for deterministic output.
    #[must_use]
    pub fn scripts(&self, kind: &str) -> Vec<(String, String)> {
        let js_dir = self.root.join(kind).join("js");
        let mut scripts = Vec::new();

        let Ok(entries) = fs::read_dir(&js_dir) else {
            return scripts;
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "js") {
                let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
                    continue;
                };
                match fs::read_to_string(&path) {
                    Ok(content) => scripts.push((name, content)),
                    Err(e) => warn!(path = %path.display(), error = %e, "failed to read script"),
                }
            }
        }

        scripts.sort_by(|a, b| a.0.cmp(&b.0));
        scripts
    }
}

/// Reject identifiers that could escape the template directory when joined
/// into a path.
fn safe_component(id: &str) -> bool {
    !id.is_empty() && !id.contains(['/', '\\']) && id != "." && id != ".."
}
