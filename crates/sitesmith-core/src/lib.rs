//! Sitesmith Core Library
//!
//! Shared types for the sitesmith website generator.
//!
//! # Modules
//!
//! - [`config`] - Application configuration loaded from TOML
//! - [`descriptor`] - Template descriptor types (`template.json`)
//! - [`error`] - Core error types

pub mod config;
pub mod descriptor;
pub mod error;

pub use config::Config;
pub use descriptor::{PageMeta, TemplateDefinition};
pub use error::{CoreError, Result};
