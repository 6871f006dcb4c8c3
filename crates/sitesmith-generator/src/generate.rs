//! Generation orchestration.
//!
//! Coordinates the template store, composer and asset emitter to materialize
//! a complete site directory for one request. Output is staged in a hidden
//! directory and published with a single rename, so callers never observe a
//! partially written site.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    assets::AssetEmitter,
    compose::{page_file_name, Composer},
    store::TemplateStore,
};

/// Generation errors.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Requested template-type is not in the store.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Filesystem fault while writing the site. Fatal to this one call only.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// One website generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    /// Site archetype key, e.g. `business`.
    pub template_type: String,

    /// Ordered page selection; empty resolves to the template's defaults.
    #[serde(default)]
    pub pages: Vec<String>,

    /// Color theme name.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Requested feature names.
    #[serde(default)]
    pub features: Vec<String>,
}

fn default_theme() -> String {
    "professional".to_string()
}

impl GenerationRequest {
    /// Request for a template-type with default pages, theme and no features.
    #[must_use]
    pub fn new(template_type: impl Into<String>) -> Self {
        Self {
            template_type: template_type.into(),
            pages: Vec::new(),
            theme: default_theme(),
            features: Vec::new(),
        }
    }

    /// Set the page selection.
    #[must_use]
    pub fn with_pages(mut self, pages: Vec<String>) -> Self {
        self.pages = pages;
        self
    }

    /// Set the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Set the feature list.
    #[must_use]
    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }
}

/// Outcome of a successful generation. The caller owns `site_dir` from here
/// on; the generator never touches it again.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Directory containing the fully composed site.
    pub site_dir: PathBuf,

    /// Pages written.
    pub pages_written: usize,

    /// Requested pages skipped because no fragment exists.
    pub pages_skipped: usize,
}

/// Website generator.
#[derive(Debug, Clone)]
pub struct Generator {
    store: Arc<TemplateStore>,
    sites_dir: PathBuf,
}

impl Generator {
    /// Create a generator writing site directories under `sites_dir`.
    #[must_use]
    pub fn new(store: Arc<TemplateStore>, sites_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            sites_dir: sites_dir.into(),
        }
    }

    /// Read-only access to the backing store.
    #[must_use]
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Materialize a complete site directory for one request.
    ///
    /// A page-id with no fragment in storage is skipped with a warning; one
    /// missing fragment does not abort an otherwise valid generation. An
    /// unknown template-type fails before any directory is created.
    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let definition = self
            .store
            .get(&request.template_type)
            .ok_or_else(|| GenerateError::TemplateNotFound(request.template_type.clone()))?;

        let pages = if request.pages.is_empty() {
            definition.default_pages()
        } else {
            request.pages.clone()
        };

        info!(
            template = %request.template_type,
            theme = %request.theme,
            pages = pages.len(),
            features = request.features.len(),
            "generating site"
        );

        fs::create_dir_all(&self.sites_dir)?;

        // Unique name so rapid concurrent generations cannot collide.
        let dir_name = format!("{}_{}", request.template_type, Uuid::new_v4().simple());
        self.generate_into(&dir_name, definition, &pages, request)
    }

    /// Stage, populate and publish one site directory. The staging directory
    /// is removed on any failure, the publishing rename included.
    fn generate_into(
        &self,
        dir_name: &str,
        definition: &sitesmith_core::TemplateDefinition,
        pages: &[String],
        request: &GenerationRequest,
    ) -> Result<GenerationResult> {
        let staging = self.sites_dir.join(format!(".{dir_name}.partial"));

        let outcome = self
            .populate(&staging, definition, pages, request)
            .and_then(|(written, skipped)| {
                let site_dir = self.sites_dir.join(dir_name);
                fs::rename(&staging, &site_dir)?;
                Ok((site_dir, written, skipped))
            });

        match outcome {
            Ok((site_dir, pages_written, pages_skipped)) => {
                info!(dir = %site_dir.display(), pages_written, pages_skipped, "site generated");
                Ok(GenerationResult {
                    site_dir,
                    pages_written,
                    pages_skipped,
                })
            }
            Err(e) => {
                let _ = fs::remove_dir_all(&staging);
                Err(e)
            }
        }
    }

    /// Write assets and composed pages into the staging directory.
    fn populate(
        &self,
        staging: &Path,
        definition: &sitesmith_core::TemplateDefinition,
        pages: &[String],
        request: &GenerationRequest,
    ) -> Result<(usize, usize)> {
        let css_dir = staging.join("css");
        let js_dir = staging.join("js");
        fs::create_dir_all(&css_dir)?;
        fs::create_dir_all(&js_dir)?;

        let emitter = AssetEmitter::new(&self.store);
        emitter.write_css(&request.template_type, &request.theme, &css_dir)?;
        emitter.write_js(&request.template_type, &request.features, &js_dir)?;

        let composer = Composer::new(definition);
        let mut written = 0;
        let mut skipped = 0;

        for page_id in pages {
            let Some(fragment) = self.store.page(&request.template_type, page_id) else {
                warn!(template = %request.template_type, page = %page_id, "page fragment missing, skipping");
                skipped += 1;
                continue;
            };

            let html = composer.compose(&fragment, pages, &request.features);
            let file_name = page_file_name(page_id);
            fs::write(staging.join(&file_name), html)?;
            debug!(page = %page_id, file = %file_name, "wrote page");
            written += 1;
        }

        Ok((written, skipped))
    }
}
