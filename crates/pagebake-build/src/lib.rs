//! Batch page builder
//!
//! Pairs every JSON data file in a directory with the same-named HTML
//! template, renders the template against the data and writes the page
//! next to the data (or into a separate output directory).
//!
//! # Pipeline
//!
//! 1. [`discovery`] lists the data directory once and pairs files by name
//! 2. [`pipeline`] reads both files, decodes the JSON and renders the page
//! 3. [`output`] writes the rendered bytes
//!
//! [`SiteBuilder`] drives the loop. Failing to read a data or template file
//! only skips that page; decode, render and write failures stop the run
//! unless the builder is configured with [`ErrorPolicy::KeepGoing`].
//!
//! # Example
//!
//! ```ignore
//! use pagebake_build::{BuildConfig, SiteBuilder};
//!
//! let config = BuildConfig::new("site/data", "site/templates")
//!     .with_exclude(vec!["draft".to_string()]);
//! let report = SiteBuilder::new(config).run()?;
//! println!("rendered {} pages", report.rendered.len());
//! ```

mod builder;
mod config;
pub mod discovery;
mod error;
pub mod output;
pub mod pipeline;

pub use builder::{BuildReport, SiteBuilder};
pub use config::{normalize_dir, BuildConfig, ErrorPolicy};
pub use discovery::PagePair;
pub use error::{BuildError, BuildResult};
pub use pipeline::DataRecord;
