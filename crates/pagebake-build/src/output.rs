//! Writing rendered pages

use crate::discovery::PagePair;
use crate::error::{BuildError, BuildResult};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Permissions for written pages: owner read/write, everyone else read
#[cfg(unix)]
const PAGE_MODE: u32 = 0o644;

/// Create the output directory if it does not exist yet
pub fn ensure_output_dir(path: &Path) -> BuildResult<()> {
    if path.is_dir() {
        return Ok(());
    }
    debug!("Creating output directory {:?}", path);
    fs::create_dir_all(path).map_err(|source| BuildError::CreateOutputDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a rendered page, replacing any previous version
pub fn write_page(pair: &PagePair, content: &[u8]) -> BuildResult<()> {
    debug!("Writing {:?}", pair.output_path);

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(PAGE_MODE);
    }

    options
        .open(&pair.output_path)
        .and_then(|mut file| file.write_all(content))
        .map_err(|source| BuildError::Output {
            file: pair.file_name.clone(),
            path: pair.output_path.clone(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;

    fn pair_in(dir: &Path) -> PagePair {
        let dir = dir.to_str().unwrap();
        PagePair::new("page.json", &BuildConfig::new(dir, dir))
    }

    #[test]
    fn test_write_truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let pair = pair_in(dir.path());
        fs::write(&pair.output_path, "a much longer previous page").unwrap();

        write_page(&pair, b"new").unwrap();
        assert_eq!(fs::read_to_string(&pair.output_path).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_new_page_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let pair = pair_in(dir.path());
        write_page(&pair, b"<p></p>").unwrap();

        let mode = fs::metadata(&pair.output_path).unwrap().permissions().mode();
        // umask can only clear bits
        assert_eq!(mode & 0o777 & !PAGE_MODE, 0);
        assert_eq!(mode & 0o600, 0o600);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let pair = pair_in(&dir.path().join("gone"));
        let err = write_page(&pair, b"x").unwrap_err();
        assert!(matches!(err, BuildError::Output { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_ensure_output_dir_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("public").join("pages");
        ensure_output_dir(&out).unwrap();
        assert!(out.is_dir());
        ensure_output_dir(&out).unwrap();
    }
}
