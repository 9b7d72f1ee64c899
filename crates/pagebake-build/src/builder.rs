//! The per-file build loop

use crate::config::{BuildConfig, ErrorPolicy};
use crate::discovery::{self, PagePair};
use crate::error::{BuildError, BuildResult};
use crate::output;
use crate::pipeline::{self, PageSources};
use pagebake_template::TemplateEngine;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Outcome of a build run
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Pages written, in processing order
    pub rendered: Vec<PathBuf>,
    /// Pages skipped because their data or template could not be read
    pub skipped: Vec<BuildError>,
    /// Pages that failed to decode, render or write under
    /// [`ErrorPolicy::KeepGoing`]
    pub failed: Vec<BuildError>,
}

impl BuildReport {
    /// True when no page failed; skipped pages do not count as failures
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Renders every data file of a directory into an HTML page
pub struct SiteBuilder {
    config: BuildConfig,
    engine: TemplateEngine,
}

impl SiteBuilder {
    /// Create a builder whose templates may include siblings from the
    /// template directory
    pub fn new(config: BuildConfig) -> Self {
        let engine = TemplateEngine::with_template_dir(&config.template_dir);
        Self { config, engine }
    }

    /// Build all pages
    ///
    /// The data directory is listed once before any page is processed.
    /// Read failures skip the page. Decode, render and write failures end
    /// the run with that error under [`ErrorPolicy::Abort`], and are
    /// collected in [`BuildReport::failed`] under [`ErrorPolicy::KeepGoing`].
    pub fn run(&self) -> BuildResult<BuildReport> {
        let pairs = discovery::discover(&self.config)?;
        info!(
            "Found {} data files in {:?}",
            pairs.len(),
            self.config.data_dir
        );

        output::ensure_output_dir(&self.config.output_dir)?;

        let mut report = BuildReport::default();
        for pair in &pairs {
            let sources = match pipeline::load_sources(pair) {
                Ok(sources) => sources,
                Err(e) => {
                    warn!("{}", e);
                    report.skipped.push(e);
                    continue;
                }
            };

            match self.build_page(pair, &sources) {
                Ok(()) => report.rendered.push(pair.output_path.clone()),
                Err(e) => match self.config.error_policy {
                    ErrorPolicy::Abort => return Err(e),
                    ErrorPolicy::KeepGoing => {
                        error!("{}", e);
                        report.failed.push(e);
                    }
                },
            }
        }

        info!(
            "Rendered {} pages, skipped {}, failed {}",
            report.rendered.len(),
            report.skipped.len(),
            report.failed.len()
        );

        Ok(report)
    }

    fn build_page(&self, pair: &PagePair, sources: &PageSources) -> BuildResult<()> {
        let rendered = pipeline::render_page(&self.engine, pair, sources)?;
        output::write_page(pair, &rendered)
    }
}
