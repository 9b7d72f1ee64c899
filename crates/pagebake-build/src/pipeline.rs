//! Loading, decoding and rendering a single page

use crate::discovery::PagePair;
use crate::error::{BuildError, BuildResult};
use pagebake_template::TemplateEngine;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Decoded contents of one data file
pub type DataRecord = serde_json::Map<String, serde_json::Value>;

/// Raw data bytes and template text for one page
#[derive(Debug, Clone)]
pub struct PageSources {
    pub data: Vec<u8>,
    pub template: String,
}

/// Read the data file and its template
///
/// Failures here are [`BuildError::FileAccess`] and only skip the page.
pub fn load_sources(pair: &PagePair) -> BuildResult<PageSources> {
    let data = read_file(pair, &pair.data_path, |p| fs::read(p))?;
    let template = read_file(pair, &pair.template_path, |p| fs::read_to_string(p))?;

    Ok(PageSources { data, template })
}

fn read_file<T>(
    pair: &PagePair,
    path: &Path,
    read: impl FnOnce(&Path) -> std::io::Result<T>,
) -> BuildResult<T> {
    debug!("Reading {:?}", path);
    read(path).map_err(|source| BuildError::FileAccess {
        file: pair.file_name.clone(),
        path: path.to_path_buf(),
        source,
    })
}

/// Decode a data file into a string-keyed record
///
/// The top level must be a JSON object.
pub fn decode_data(file_name: &str, bytes: &[u8]) -> BuildResult<DataRecord> {
    serde_json::from_slice(bytes).map_err(|source| BuildError::DataFormat {
        file: file_name.to_string(),
        source,
    })
}

/// Decode the data and render the template against it
pub fn render_page(
    engine: &TemplateEngine,
    pair: &PagePair,
    sources: &PageSources,
) -> BuildResult<Vec<u8>> {
    let record = decode_data(&pair.file_name, &sources.data)?;

    let rendered = engine
        .render_named(&pair.template_name(), &sources.template, &record)
        .map_err(|source| BuildError::Template {
            file: pair.file_name.clone(),
            source,
        })?;

    Ok(rendered.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;

    fn sources(data: &str, template: &str) -> PageSources {
        PageSources {
            data: data.as_bytes().to_vec(),
            template: template.to_string(),
        }
    }

    fn pair() -> PagePair {
        PagePair::new("page1.json", &BuildConfig::new("data", "templates"))
    }

    #[test]
    fn test_decode_object() {
        let record = decode_data("a.json", br#"{"title":"Hi","n":3}"#).unwrap();
        assert_eq!(record["title"], "Hi");
        assert_eq!(record["n"], 3);
    }

    #[test]
    fn test_decode_truncated() {
        let err = decode_data("a.json", br#"{"a":"#).unwrap_err();
        assert!(matches!(err, BuildError::DataFormat { ref file, .. } if file == "a.json"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_decode_rejects_non_object() {
        assert!(decode_data("a.json", b"[1, 2, 3]").is_err());
        assert!(decode_data("a.json", b"\"text\"").is_err());
    }

    #[test]
    fn test_render_page() {
        let engine = TemplateEngine::new();
        let out = render_page(
            &engine,
            &pair(),
            &sources(r#"{"title":"Hi"}"#, "<h1>{{title}}</h1>"),
        )
        .unwrap();
        assert_eq!(out, b"<h1>Hi</h1>");
    }

    #[test]
    fn test_render_error_names_data_file() {
        let engine = TemplateEngine::new();
        let err = render_page(&engine, &pair(), &sources("{}", "{% for %}")).unwrap_err();
        assert!(matches!(err, BuildError::Template { .. }));
        assert!(err.to_string().starts_with("page1.json : "));
    }

    #[test]
    fn test_load_missing_template_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().to_str().unwrap();
        fs::write(dir.path().join("page1.json"), "{}").unwrap();

        let config = BuildConfig::new(data_dir, &format!("{}/templates", data_dir));
        let err = load_sources(&PagePair::new("page1.json", &config)).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(err.file_name(), Some("page1.json"));
    }
}
