//! Serve command - runs the generation/preview server.

use std::{fs, path::Path, sync::Arc};

use color_eyre::eyre::{Result, WrapErr};
use sitesmith_generator::TemplateStore;
use tokio::net::TcpListener;

use super::load_config;
use crate::server::{create_router, AppState};

/// Run the serve command.
///
/// Bootstraps the output directories, loads the template store once, and
/// serves the API until interrupted.
pub async fn run(config_path: &Path, port: Option<u16>) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!(?config_path, port = config.server.port, "starting server");

    // Bootstrap output directories
    for dir in [
        &config.output.sites_dir,
        &config.output.archives_dir,
        &config.output.preview_dir,
    ] {
        fs::create_dir_all(dir).wrap_err_with(|| format!("Failed to create {dir}"))?;
    }

    let store = Arc::new(TemplateStore::load(&config.store.templates_dir));
    if store.all().is_empty() {
        tracing::warn!(
            dir = %config.store.templates_dir,
            "no templates loaded; generation requests will fail"
        );
    }

    let static_dir = config
        .server
        .static_dir
        .as_ref()
        .map(std::path::PathBuf::from)
        .filter(|dir| dir.is_dir());

    let state = AppState::new(store, &config);
    let app = create_router(state, static_dir);

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;

    println!();
    println!("  sitesmith serving on http://{addr}");
    println!("  templates: {}", config.store.templates_dir);
    println!();

    axum::serve(listener, app).await.wrap_err("Server failed")?;
    Ok(())
}
