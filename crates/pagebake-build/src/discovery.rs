//! Data file discovery and template pairing
//!
//! The data directory is listed once, non-recursively. A file qualifies when
//! its name contains the literal `.json` anywhere (not only as a suffix) and
//! none of the exclusion substrings. Its template and output share the name
//! with the last dot-segment replaced by `html`.

use crate::config::BuildConfig;
use crate::error::{BuildError, BuildResult};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, trace, warn};

/// Marker a data file name must contain
const DATA_MARKER: &str = ".json";

/// Extension given to templates and rendered pages
const PAGE_EXTENSION: &str = "html";

/// A data file together with the paths derived from its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePair {
    /// File name of the data file, used in diagnostics
    pub file_name: String,
    /// Text after the last `.` of the file name
    pub extension: String,
    pub data_path: PathBuf,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
}

impl PagePair {
    /// Pair `file_name` with its template and output paths
    pub fn new(file_name: &str, config: &BuildConfig) -> Self {
        let extension = extension_of(file_name);
        let page_name = page_name(file_name, extension);

        Self {
            file_name: file_name.to_string(),
            extension: extension.to_string(),
            data_path: config.data_dir.join(file_name),
            template_path: config.template_dir.join(&page_name),
            output_path: config.output_dir.join(&page_name),
        }
    }

    /// File name of the template (and of the rendered page)
    pub fn template_name(&self) -> String {
        page_name(&self.file_name, &self.extension)
    }
}

/// List the data directory and pair every qualifying file
///
/// Entries come back sorted by file name so runs are reproducible.
pub fn discover(config: &BuildConfig) -> BuildResult<Vec<PagePair>> {
    debug!("Scanning data directory: {:?}", config.data_dir);

    let list_err = |source| BuildError::ListDir {
        path: config.data_dir.clone(),
        source,
    };

    let mut entries = fs::read_dir(&config.data_dir)
        .map_err(list_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(list_err)?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut pairs = Vec::new();
    for entry in entries {
        let path = entry.path();

        // Follows symlinks, a link to a file counts as a file
        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => {
                trace!("Skipping directory {:?}", path);
                continue;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Skipping {:?}: {}", path, e);
                continue;
            }
        }

        let os_name = entry.file_name();
        let Some(name) = os_name.to_str() else {
            warn!("Skipping {:?}: file name is not valid UTF-8", path);
            continue;
        };

        if !is_candidate(name, &config.exclude) {
            trace!("Skipping {}", name);
            continue;
        }

        let pair = PagePair::new(name, config);
        debug!("Paired {} with {:?}", name, pair.template_path);
        pairs.push(pair);
    }

    Ok(pairs)
}

/// Whether a file name is a data file that is not excluded
///
/// Both checks are plain, case-sensitive substring matches.
pub fn is_candidate(name: &str, exclude: &[String]) -> bool {
    if exclude.iter().any(|exc| name.contains(exc.as_str())) {
        return false;
    }
    name.contains(DATA_MARKER)
}

/// Text after the last `.` in `name`
pub fn extension_of(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, ext)| ext)
}

/// Replace the trailing `extension` of `name` with `html`
fn page_name(name: &str, extension: &str) -> String {
    let stem = name.strip_suffix(extension).unwrap_or(name);
    format!("{}{}", stem, PAGE_EXTENSION)
}
