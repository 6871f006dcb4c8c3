//! Generate command - one-shot site generation from the command line.

use std::{path::Path, sync::Arc};

use color_eyre::eyre::{Result, WrapErr};
use sitesmith_generator::{archive_site, GenerationRequest, Generator, TemplateStore};
use uuid::Uuid;

use super::load_config;

/// Run the generate command.
pub fn run(
    config_path: &Path,
    template_type: &str,
    pages: Option<&str>,
    theme: Option<&str>,
    features: Option<&str>,
    archive: bool,
) -> Result<()> {
    let config = load_config(config_path)?;

    let store = Arc::new(TemplateStore::load(&config.store.templates_dir));
    let generator = Generator::new(store, &config.output.sites_dir);

    let mut request = GenerationRequest::new(template_type)
        .with_theme(theme.unwrap_or(&config.generator.default_theme));
    if let Some(pages) = pages {
        request = request.with_pages(split_list(pages));
    }
    if let Some(features) = features {
        request = request.with_features(split_list(features));
    }

    let result = generator.generate(&request).wrap_err("Generation failed")?;

    println!();
    println!("  Site generated!");
    println!();
    println!("  Pages:   {}", result.pages_written);
    if result.pages_skipped > 0 {
        println!("  Skipped: {} (no fragment in template)", result.pages_skipped);
    }
    println!("  Output:  {}", result.site_dir.display());

    if archive {
        let generation_id = Uuid::new_v4();
        let zip_path = Path::new(&config.output.archives_dir).join(format!("{generation_id}.zip"));
        archive_site(&result.site_dir, &zip_path).wrap_err("Archiving failed")?;
        println!("  Archive: {}", zip_path.display());
    }
    println!();

    Ok(())
}

/// Split a comma-separated CLI list, dropping empty items.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
