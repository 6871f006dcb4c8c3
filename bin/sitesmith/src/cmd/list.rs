//! List command - prints available templates.

use std::path::Path;

use color_eyre::eyre::Result;
use sitesmith_generator::TemplateStore;

use super::load_config;

/// Run the list command.
pub fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let store = TemplateStore::load(&config.store.templates_dir);

    if store.all().is_empty() {
        println!("No templates found in {}", config.store.templates_dir);
        return Ok(());
    }

    for (kind, definition) in store.all() {
        println!();
        println!("  {kind} - {}", definition.name);
        for (page_id, meta) in &definition.pages {
            let marker = if meta.default { "*" } else { " " };
            println!("    {marker} {page_id} ({})", meta.name);
        }
    }
    println!();
    println!("  * = included by default");
    println!();

    Ok(())
}
