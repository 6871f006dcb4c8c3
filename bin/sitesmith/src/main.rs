//! Sitesmith CLI
//!
//! Template-driven website generator: pick an archetype, a theme, pages and
//! features; get a complete site directory, a downloadable archive and a
//! live preview.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for sitesmith.
#[derive(Parser)]
#[command(
    name = "sitesmith",
    version,
    about = "A template-driven website generator"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "sitesmith.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Start the generation/preview server
    Serve {
        /// Port to listen on (overrides configuration)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Generate one site from the command line
    Generate {
        /// Template-type to generate (e.g. business)
        template_type: String,
        /// Comma-separated page ids; defaults to the template's default pages
        #[arg(long)]
        pages: Option<String>,
        /// Color theme name
        #[arg(long)]
        theme: Option<String>,
        /// Comma-separated feature names (e.g. contact_form,gallery)
        #[arg(long)]
        features: Option<String>,
        /// Also package the site into a downloadable zip
        #[arg(long)]
        archive: bool,
    },
    /// List available templates and their pages
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    sitesmith::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { port } => {
            sitesmith::cmd::serve::run(&cli.config, port).await?;
        }
        Commands::Generate {
            template_type,
            pages,
            theme,
            features,
            archive,
        } => {
            sitesmith::cmd::generate::run(
                &cli.config,
                &template_type,
                pages.as_deref(),
                theme.as_deref(),
                features.as_deref(),
                archive,
            )?;
        }
        Commands::List => {
            sitesmith::cmd::list::run(&cli.config)?;
        }
    }

    Ok(())
}
