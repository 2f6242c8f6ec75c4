//! Output file naming and atomic writes.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The three files produced for one output name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub json: PathBuf,
    pub dot: PathBuf,
    pub svg: PathBuf,
}

impl OutputPaths {
    /// Appends `.json`, `.dot` and `.svg` to `base`; an existing extension is kept.
    #[must_use]
    pub fn from_base(base: &Path) -> Self {
        Self {
            json: with_suffix(base, ".json"),
            dot: with_suffix(base, ".dot"),
            svg: with_suffix(base, ".svg"),
        }
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Writes `contents` to a temporary file next to `path`, then renames it
/// into place. A failed write leaves any previous file untouched.
///
/// A replaced file keeps its permissions; a new one gets the same mode a
/// plain `std::fs::write` would give it under the current umask.
#[tracing::instrument(skip(contents), fields(path = %path.display(), bytes = contents.len()))]
pub fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut builder = tempfile::Builder::new();
    if let Some(permissions) = new_file_permissions() {
        builder.permissions(permissions);
    }
    let mut file = builder.tempfile_in(dir)?;
    file.write_all(contents)?;
    file.flush()?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions)?;
    }
    file.persist(path).map_err(|e| e.error)?;
    tracing::debug!("Wrote output file");
    Ok(())
}

/// Mode requested for new files; the process umask still applies.
#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths_append_extensions() {
        let paths = OutputPaths::from_base(Path::new("out/library"));
        assert_eq!(paths.json, PathBuf::from("out/library.json"));
        assert_eq!(paths.dot, PathBuf::from("out/library.dot"));
        assert_eq!(paths.svg, PathBuf::from("out/library.svg"));
    }

    #[test]
    fn test_output_paths_keep_dots_in_base_name() {
        let paths = OutputPaths::from_base(Path::new("api.v2"));
        assert_eq!(paths.json, PathBuf::from("api.v2.json"));
    }

    #[test]
    fn test_write_atomic_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1, "temporary files must not be left behind");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_new_file_mode_matches_plain_write() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let atomic = dir.path().join("atomic.svg");
        let plain = dir.path().join("plain.svg");

        write_atomic(&atomic, b"<svg/>").unwrap();
        std::fs::write(&plain, b"<svg/>").unwrap();

        let mode = |path: &Path| std::fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&atomic), mode(&plain));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.dot");
        std::fs::write(&path, "digraph {}").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        write_atomic(&path, b"digraph \"schema\" {}").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    fn test_write_atomic_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("schema.json");
        assert!(write_atomic(&path, b"{}").is_err());
        assert!(!path.exists());
    }
}
