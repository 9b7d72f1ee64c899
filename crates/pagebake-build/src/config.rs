//! Build configuration

use std::path::PathBuf;

/// What to do when a page fails to decode, render or write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the run at the first failing page
    #[default]
    Abort,
    /// Log the failure, record it in the report and continue
    KeepGoing,
}

/// Directories and filters for one build run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory holding the JSON data files
    pub data_dir: PathBuf,
    /// Directory holding the `.html` templates
    pub template_dir: PathBuf,
    /// Directory the rendered pages are written to
    pub output_dir: PathBuf,
    /// Data files whose name contains any of these substrings are skipped
    pub exclude: Vec<String>,
    pub error_policy: ErrorPolicy,
}

impl BuildConfig {
    /// Create a config that writes pages back into the data directory
    pub fn new(data_dir: &str, template_dir: &str) -> Self {
        let data_dir = normalize_dir(data_dir);
        Self {
            output_dir: data_dir.clone(),
            data_dir,
            template_dir: normalize_dir(template_dir),
            exclude: Vec::new(),
            error_policy: ErrorPolicy::default(),
        }
    }

    /// Write pages to `output_dir` instead of the data directory
    pub fn with_output_dir(mut self, output_dir: &str) -> Self {
        self.output_dir = normalize_dir(output_dir);
        self
    }

    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new("./", "./")
    }
}

/// Strip trailing slashes and append exactly one
///
/// An empty string means the current directory.
pub fn normalize_dir(dir: &str) -> PathBuf {
    if dir.is_empty() {
        return PathBuf::from("./");
    }
    PathBuf::from(format!("{}/", dir.trim_end_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_slash() {
        assert_eq!(normalize_dir("data"), PathBuf::from("data/"));
    }

    #[test]
    fn test_normalize_collapses_trailing_slashes() {
        assert_eq!(normalize_dir("data///"), PathBuf::from("data/"));
        assert_eq!(normalize_dir("./"), PathBuf::from("./"));
    }

    #[test]
    fn test_normalize_root_and_empty() {
        assert_eq!(normalize_dir("/"), PathBuf::from("/"));
        assert_eq!(normalize_dir(""), PathBuf::from("./"));
    }

    #[test]
    fn test_output_defaults_to_data_dir() {
        let config = BuildConfig::new("site/data/", "site/templates");
        assert_eq!(config.output_dir, PathBuf::from("site/data/"));
        assert_eq!(config.template_dir, PathBuf::from("site/templates/"));
        assert_eq!(config.error_policy, ErrorPolicy::Abort);
    }

    #[test]
    fn test_builder_methods() {
        let config = BuildConfig::default()
            .with_output_dir("public")
            .with_exclude(vec!["bak".to_string()])
            .with_error_policy(ErrorPolicy::KeepGoing);
        assert_eq!(config.output_dir, PathBuf::from("public/"));
        assert_eq!(config.exclude, vec!["bak".to_string()]);
        assert_eq!(config.error_policy, ErrorPolicy::KeepGoing);
    }
}
