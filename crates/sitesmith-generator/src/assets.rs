//! CSS and JS asset emission.
//!
//! Missing base or theme styles degrade to empty files, never an error.
//! `main.css` always carries both imports; `main.js` carries only the script
//! blocks for requested features.

use std::{fs, io, path::Path};

use tracing::debug;

use crate::{features, store::TemplateStore};

/// Synthesized `main.css`, emitted verbatim for every generation.
pub const MAIN_CSS: &str = "/* Main CSS file */\n@import url('base.css');\n@import url('theme.css');\n";

const MAIN_JS_HEADER: &str =
    "// Main JavaScript file\n\ndocument.addEventListener('DOMContentLoaded', function() {\n    console.log('Website initialized');\n";

const MAIN_JS_FOOTER: &str = "});\n";

/// Emits the CSS and JS file set for one generation.
#[derive(Debug)]
pub struct AssetEmitter<'a> {
    store: &'a TemplateStore,
}

impl<'a> AssetEmitter<'a> {
    /// Create an emitter backed by the template store.
    #[must_use]
    pub fn new(store: &'a TemplateStore) -> Self {
        Self { store }
    }

    /// Write `base.css`, `theme.css` and the synthesized `main.css`.
    pub fn write_css(&self, kind: &str, theme: &str, css_dir: &Path) -> io::Result<()> {
        let base = self.store.base_css(kind).unwrap_or_default();
        fs::write(css_dir.join("base.css"), base)?;

        let theme_css = self.store.theme_css(kind, theme).unwrap_or_default();
        fs::write(css_dir.join("theme.css"), theme_css)?;

        fs::write(css_dir.join("main.css"), MAIN_CSS)?;

        debug!(template = kind, theme, "wrote stylesheets");
        Ok(())
    }

    /// Write template scripts verbatim, then the synthesized `main.js`.
    pub fn write_js(&self, kind: &str, features: &[String], js_dir: &Path) -> io::Result<()> {
        for (name, content) in self.store.scripts(kind) {
            fs::write(js_dir.join(&name), content)?;
        }

        fs::write(js_dir.join("main.js"), main_js(features))?;

        debug!(template = kind, "wrote scripts");
        Ok(())
    }
}

/// Synthesize the feature-aware bootstrap script.
///
/// Blocks for unrequested features are absent from the output, not
/// commented out.
#[must_use]
pub fn main_js(features: &[String]) -> String {
    let mut js = String::from(MAIN_JS_HEADER);

    // Membership test: a feature named twice in the request gets one block.
    for feature in features::KNOWN_FEATURES {
        if !features.iter().any(|requested| requested == feature) {
            continue;
        }
        if let Some(block) = features::script_block(feature) {
            js.push_str(block);
        }
    }

    js.push_str(MAIN_JS_FOOTER);
    js
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store_with(kind: &str, with_css: bool) -> (TempDir, TemplateStore) {
        let root = TempDir::new().unwrap();
        let dir = root.path().join(kind);
        fs::create_dir_all(dir.join("js")).unwrap();
        fs::write(dir.join("template.json"), r#"{"name": "Test", "pages": {}}"#).unwrap();
        if with_css {
            fs::create_dir_all(dir.join("css/themes")).unwrap();
            fs::write(dir.join("css/base.css"), "body {}").unwrap();
            fs::write(dir.join("css/themes/professional.css"), ".pro {}").unwrap();
        }
        fs::write(dir.join("js/functions.js"), "function noop() {}").unwrap();
        let store = TemplateStore::load(root.path());
        (root, store)
    }

    #[test]
    fn test_write_css_with_content() {
        let (_root, store) = store_with("business", true);
        let out = TempDir::new().unwrap();

        AssetEmitter::new(&store)
            .write_css("business", "professional", out.path())
            .unwrap();

        assert_eq!(fs::read_to_string(out.path().join("base.css")).unwrap(), "body {}");
        assert_eq!(fs::read_to_string(out.path().join("theme.css")).unwrap(), ".pro {}");
    }

    #[test]
    fn test_write_css_degrades_to_empty_files() {
        let (_root, store) = store_with("business", false);
        let out = TempDir::new().unwrap();

        AssetEmitter::new(&store)
            .write_css("business", "professional", out.path())
            .unwrap();

        assert_eq!(fs::read_to_string(out.path().join("base.css")).unwrap(), "");
        assert_eq!(fs::read_to_string(out.path().join("theme.css")).unwrap(), "");
    }

    #[test]
    fn test_main_css_always_has_both_imports() {
        let (_root, store) = store_with("business", false);
        let out = TempDir::new().unwrap();

        AssetEmitter::new(&store)
            .write_css("business", "missing-theme", out.path())
            .unwrap();

        let main = fs::read_to_string(out.path().join("main.css")).unwrap();
        assert!(main.contains("@import url('base.css');"));
        assert!(main.contains("@import url('theme.css');"));
    }

    #[test]
    fn test_write_js_copies_template_scripts() {
        let (_root, store) = store_with("business", false);
        let out = TempDir::new().unwrap();

        AssetEmitter::new(&store)
            .write_js("business", &[], out.path())
            .unwrap();

        assert_eq!(
            fs::read_to_string(out.path().join("functions.js")).unwrap(),
            "function noop() {}"
        );
        assert!(out.path().join("main.js").exists());
    }

    #[test]
    fn test_main_js_contact_form_present_only_when_requested() {
        let with = main_js(&["contact_form".to_string()]);
        assert!(with.contains("preventDefault"));

        let without = main_js(&[]);
        assert!(!without.contains("preventDefault"));
        assert!(!without.contains("contact"));
    }

    #[test]
    fn test_main_js_gallery_block() {
        let with = main_js(&["gallery".to_string()]);
        assert!(with.contains("lightbox"));

        let without = main_js(&["contact_form".to_string()]);
        assert!(!without.contains("lightbox"));
    }

    #[test]
    fn test_main_js_duplicate_feature_emits_one_block() {
        let once = main_js(&["contact_form".to_string()]);
        let twice = main_js(&["contact_form".to_string(), "contact_form".to_string()]);
        assert_eq!(once, twice);
        assert_eq!(twice.matches("preventDefault").count(), 1);
    }

    #[test]
    fn test_main_js_html_only_features_add_nothing() {
        let base = main_js(&[]);
        let with_map = main_js(&["map".to_string(), "social_media".to_string()]);
        assert_eq!(base, with_map);
    }

    #[test]
    fn test_main_js_wrapper_shape() {
        let js = main_js(&[]);
        assert!(js.starts_with("// Main JavaScript file"));
        assert!(js.contains("DOMContentLoaded"));
        assert!(js.trim_end().ends_with("});"));
    }
}
