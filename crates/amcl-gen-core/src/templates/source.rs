//! Where template text comes from.
//!
//! The [`TemplateCache`](super::cache::TemplateCache) never touches the filesystem
//! directly; it asks a [`TemplateSource`] for the text behind a template path. This keeps
//! the read path swappable: [`FsSource`] for normal runs, [`EmbeddedSource`] when the
//! binary should carry its own templates, and instrumented sources in tests.

use std::io;

use super::embedded;

/// Prefix that routes a template path to the embedded set.
pub const BUILTIN_PREFIX: &str = "builtin:";

/// Supplies the full text of a template given its path.
pub trait TemplateSource {
    /// Read the whole template at `path`.
    fn read(&self, path: &str) -> io::Result<String>;
}

/// Reads templates from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl TemplateSource for FsSource {
    fn read(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Serves `builtin:<name>` paths from templates compiled into the binary and reads
/// everything else from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl TemplateSource for EmbeddedSource {
    fn read(&self, path: &str) -> io::Result<String> {
        match path.strip_prefix(BUILTIN_PREFIX) {
            Some(name) => embedded::lookup(name).map(str::to_string).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no built-in template named '{name}'"),
                )
            }),
            None => FsSource.read(path),
        }
    }
}

impl<S: TemplateSource + ?Sized> TemplateSource for &S {
    fn read(&self, path: &str) -> io::Result<String> {
        (**self).read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.hbs");
        std::fs::write(&path, "curve = {{curve}}\n").unwrap();

        let text = FsSource.read(path.to_str().unwrap()).unwrap();
        assert_eq!(text, "curve = {{curve}}\n");
    }

    #[test]
    fn test_fs_source_missing_file() {
        let err = FsSource
            .read("/tmp/nonexistent_amcl_gen_dir/t.hbs")
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_embedded_source_serves_builtin() {
        let text = EmbeddedSource.read("builtin:ecdsa.go.hbs").unwrap();
        assert!(text.contains("{{curve}}"));
    }

    #[test]
    fn test_embedded_source_unknown_builtin() {
        let err = EmbeddedSource.read("builtin:pbc.go.hbs").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_embedded_source_falls_back_to_fs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.hbs");
        std::fs::write(&path, "local").unwrap();

        let text = EmbeddedSource.read(path.to_str().unwrap()).unwrap();
        assert_eq!(text, "local");
    }
}
