//! Content composer: marker substitution and navigation.
//!
//! Composition is literal find-and-replace over page fragments, not a real
//! template engine. Every occurrence of a marker is replaced; markers for
//! features that were not requested are deliberately left as literal text.

use std::collections::BTreeSet;

use sitesmith_core::TemplateDefinition;

use crate::features;

/// Marker replaced with the generated navigation block.
pub const NAVIGATION_MARKER: &str = "<!-- NAVIGATION -->";

/// Marker replaced with the template's display name.
pub const SITE_TITLE_MARKER: &str = "<!-- SITE_TITLE -->";

/// Marker replaced with the stylesheet link.
pub const CSS_LINKS_MARKER: &str = "<!-- CSS_LINKS -->";

/// Marker replaced with the script tag.
pub const JS_LINKS_MARKER: &str = "<!-- JS_LINKS -->";

const CSS_LINK_TAG: &str = r#"<link rel="stylesheet" href="css/main.css">"#;
const JS_SCRIPT_TAG: &str = r#"<script src="js/main.js"></script>"#;

/// Marker for one feature, scoped by feature name.
#[must_use]
pub fn feature_marker(feature: &str) -> String {
    format!("<!-- FEATURE: {feature} -->")
}

/// Output file name for a page-id. The home page always materializes as the
/// root index document.
#[must_use]
pub fn page_file_name(page_id: &str) -> String {
    if page_id == "home" {
        "index.html".to_string()
    } else {
        format!("{page_id}.html")
    }
}

/// Fills markers in page fragments for one template definition.
#[derive(Debug)]
pub struct Composer<'a> {
    definition: &'a TemplateDefinition,
}

impl<'a> Composer<'a> {
    /// Create a composer for a template definition.
    #[must_use]
    pub fn new(definition: &'a TemplateDefinition) -> Self {
        Self { definition }
    }

    /// Compose a final page document from a raw fragment.
    ///
    /// `pages` is the resolved page list in caller order; `features` is the
    /// requested feature set. No HTML parsing happens here, so malformed
    /// fragments pass through unchanged apart from marker replacement.
    #[must_use]
    pub fn compose(&self, content: &str, pages: &[String], features: &[String]) -> String {
        let mut html = content.replace(NAVIGATION_MARKER, &self.navigation(pages));

        // The request is a set; a duplicated name substitutes once.
        let mut seen = BTreeSet::new();
        for feature in features {
            if seen.insert(feature.as_str()) {
                html = html.replace(&feature_marker(feature), features::html_fragment(feature));
            }
        }

        html = html.replace(SITE_TITLE_MARKER, &self.definition.name);
        html = html.replace(CSS_LINKS_MARKER, CSS_LINK_TAG);
        html.replace(JS_LINKS_MARKER, JS_SCRIPT_TAG)
    }

    /// Navigation block: one link per page in caller-given order.
    fn navigation(&self, pages: &[String]) -> String {
        let mut nav = String::from("<nav>\n    <ul>\n");

        for page_id in pages {
            let name = self.definition.display_name(page_id);
            let href = page_file_name(page_id);
            nav.push_str(&format!("        <li><a href=\"{href}\">{name}</a></li>\n"));
        }

        nav.push_str("    </ul>\n</nav>");
        nav
    }
}
