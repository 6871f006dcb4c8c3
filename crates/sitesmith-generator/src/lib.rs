//! Sitesmith Generator Library
//!
//! Website generation engine for sitesmith.
//!
//! # Modules
//!
//! - [`store`] - Template store: loads and indexes template definitions
//! - [`compose`] - Content composer: marker substitution and navigation
//! - [`features`] - Optional feature fragments (HTML and script blocks)
//! - [`assets`] - CSS and JS asset emission
//! - [`generate`] - Generation orchestration
//! - [`archive`] - Zip packaging and preview extraction

pub mod archive;
pub mod assets;
pub mod compose;
pub mod features;
pub mod generate;
pub mod store;

pub use archive::{archive_site, extract_archive, ArchiveError};
pub use assets::AssetEmitter;
pub use compose::{page_file_name, Composer};
pub use generate::{GenerateError, GenerationRequest, GenerationResult, Generator};
pub use store::TemplateStore;
