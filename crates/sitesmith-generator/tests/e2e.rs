//! End-to-end tests over the shipped sample templates.
//!
//! These exercise the full pipeline against `templates/` at the workspace
//! root and skip quietly when run from a different working directory.

use std::{fs, path::Path, sync::Arc};

use sitesmith_generator::{
    archive_site, extract_archive, GenerationRequest, Generator, TemplateStore,
};
use tempfile::TempDir;

const TEMPLATES_DIR: &str = "../../templates";

fn sample_store() -> Option<Arc<TemplateStore>> {
    if !Path::new(TEMPLATES_DIR).is_dir() {
        return None;
    }
    Some(Arc::new(TemplateStore::load(TEMPLATES_DIR)))
}

#[test]
fn test_sample_templates_load() {
    let Some(store) = sample_store() else { return };

    let business = store.get("business").expect("business template");
    assert_eq!(business.name, "Business Pro");
    assert!(business.pages.contains_key("home"));
    assert!(store.get("portfolio").is_some());
}

#[test]
fn test_generate_business_defaults() {
    let Some(store) = sample_store() else { return };
    let out = TempDir::new().unwrap();
    let generator = Generator::new(store.clone(), out.path());

    let result = generator
        .generate(&GenerationRequest::new("business"))
        .unwrap();

    let defaults = store.get("business").unwrap().default_pages();
    assert_eq!(result.pages_written, defaults.len());
    assert!(result.site_dir.join("index.html").exists());

    let index = fs::read_to_string(result.site_dir.join("index.html")).unwrap();
    assert!(index.contains("Business Pro"));
    assert!(index.contains("<nav>"));
    assert!(index.contains(r#"href="css/main.css""#));
    assert!(index.contains(r#"src="js/main.js""#));
    assert!(!index.contains("<!-- NAVIGATION -->"));
}

#[test]
fn test_generate_with_features_and_theme() {
    let Some(store) = sample_store() else { return };
    let out = TempDir::new().unwrap();
    let generator = Generator::new(store, out.path());

    let request = GenerationRequest::new("business")
        .with_theme("bold")
        .with_features(vec!["contact_form".to_string(), "map".to_string()]);
    let result = generator.generate(&request).unwrap();

    let contact = fs::read_to_string(result.site_dir.join("contact.html")).unwrap();
    assert!(contact.contains("contact-form-container"));
    assert!(contact.contains("map-container"));

    let theme = fs::read_to_string(result.site_dir.join("css/theme.css")).unwrap();
    assert!(!theme.is_empty(), "bold theme should have content");

    let main_js = fs::read_to_string(result.site_dir.join("js/main.js")).unwrap();
    assert!(main_js.contains("preventDefault"));
    assert!(!main_js.contains("lightbox"));
}

#[test]
fn test_generate_portfolio_gallery() {
    let Some(store) = sample_store() else { return };
    let out = TempDir::new().unwrap();
    let generator = Generator::new(store, out.path());

    let request = GenerationRequest::new("portfolio").with_features(vec!["gallery".to_string()]);
    let result = generator.generate(&request).unwrap();

    let gallery = fs::read_to_string(result.site_dir.join("gallery.html")).unwrap();
    assert!(gallery.contains("gallery-item"));

    let main_js = fs::read_to_string(result.site_dir.join("js/main.js")).unwrap();
    assert!(main_js.contains("lightbox"));
}

#[test]
fn test_generate_then_archive_round_trip() {
    let Some(store) = sample_store() else { return };
    let out = TempDir::new().unwrap();
    let generator = Generator::new(store, out.path().join("sites"));

    let result = generator
        .generate(&GenerationRequest::new("business"))
        .unwrap();

    let zip_path = out.path().join("site.zip");
    archive_site(&result.site_dir, &zip_path).unwrap();

    let preview = out.path().join("preview");
    extract_archive(&zip_path, &preview).unwrap();

    for entry in walk_files(&result.site_dir) {
        let relative = entry.strip_prefix(&result.site_dir).unwrap();
        let original = fs::read(&entry).unwrap();
        let extracted = fs::read(preview.join(relative)).unwrap();
        assert_eq!(original, extracted, "{} differs", relative.display());
    }
}

fn walk_files(dir: &Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if entry.path().is_file() {
            files.push(entry.path().to_path_buf());
        }
    }
    files
}
