//! pagebake command line
//!
//! Renders every JSON data file of a directory into an HTML page using the
//! same-named template.

mod args;

use anyhow::{bail, Result};
use args::Args;
use pagebake_build::{BuildConfig, SiteBuilder};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let args = Args::from_env();

    // Initialize tracing, diagnostics go to stderr
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    build(args.to_config())
}

/// Run the build, turning fatal errors and failed pages into an error so
/// the process exits non-zero
fn build(config: BuildConfig) -> Result<()> {
    info!(
        "Building pages from {:?} with templates from {:?}",
        config.data_dir, config.template_dir
    );

    let report = SiteBuilder::new(config).run()?;

    if !report.is_success() {
        bail!(
            "{} of {} pages failed",
            report.failed.len(),
            report.failed.len() + report.rendered.len()
        );
    }

    Ok(())
}
