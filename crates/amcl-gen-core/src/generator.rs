//! Turns generation requests into files on disk.
//!
//! ## Contract
//!
//! [`Generator::generate`] handles requests strictly in order. For each one it resolves
//! the template through the run's [`TemplateCache`], renders it against the request's
//! context, and writes the bytes to the output path (created or truncated, mode `0664`
//! on unix). The first failure stops the run. Files written by earlier requests stay
//! on disk; nothing is rolled back.
//!
//! Writes are not atomic. A crash mid-write can leave a truncated output file, so a
//! failed or interrupted run should be repeated from a clean state.
//!
//! Output directories are never created. A missing directory surfaces as
//! [`GenError::Write`].
//!
//! [`Generator::generate_transactional`] is the opt-in alternative: render everything
//! first, collect every failure, and write nothing unless all requests rendered.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{GenError, Result};
use crate::request::GenerationRequest;
use crate::templates::{FsSource, TemplateCache, TemplateSource};

/// Permission bits for generated files: owner read/write, group and other read.
pub const OUTPUT_MODE: u32 = 0o664;

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Output paths in the order they were written (duplicates included).
    pub written: Vec<PathBuf>,
    /// Number of distinct templates parsed by this generator.
    pub templates_parsed: usize,
}

/// A single generation run and the template cache it owns.
///
/// Create one per run. Calling `generate` again on the same value keeps serving cached
/// templates, so edits made to template files in between are not picked up.
pub struct Generator<S = FsSource> {
    cache: TemplateCache<S>,
}

impl Generator<FsSource> {
    /// Create a generator that reads templates from the filesystem.
    pub fn new() -> Self {
        Self::with_source(FsSource)
    }
}

impl Default for Generator<FsSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TemplateSource> Generator<S> {
    /// Create a generator that reads templates through `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            cache: TemplateCache::with_source(source),
        }
    }

    /// The template cache owned by this run.
    pub fn cache(&self) -> &TemplateCache<S> {
        &self.cache
    }

    /// Generate every request in order, stopping at the first failure.
    pub fn generate(&mut self, requests: &[GenerationRequest]) -> Result<GenerationReport> {
        let mut written = Vec::with_capacity(requests.len());

        for request in requests {
            let body = self.render(request)?;
            write_output(&request.output_path, body.as_bytes())?;
            info!(
                output = %request.output_path.display(),
                template = %request.template_path,
                "generated file"
            );
            written.push(request.output_path.clone());
        }

        Ok(GenerationReport {
            written,
            templates_parsed: self.cache.len(),
        })
    }

    /// Render every request before writing any of them.
    ///
    /// If any request fails to resolve or render, returns [`GenError::Batch`] carrying
    /// every failure and leaves the filesystem untouched. Once all renders succeed the
    /// files are written in order; a write failure at that point still stops the run
    /// with earlier files in place.
    pub fn generate_transactional(
        &mut self,
        requests: &[GenerationRequest],
    ) -> Result<GenerationReport> {
        let mut rendered = Vec::with_capacity(requests.len());
        let mut failures = Vec::new();

        for request in requests {
            match self.render(request) {
                Ok(body) => rendered.push((request, body)),
                Err(e) => failures.push(e),
            }
        }

        if !failures.is_empty() {
            return Err(GenError::Batch {
                failed: failures.len(),
                total: requests.len(),
                failures,
            });
        }

        let mut written = Vec::with_capacity(rendered.len());
        for (request, body) in rendered {
            write_output(&request.output_path, body.as_bytes())?;
            info!(output = %request.output_path.display(), "generated file");
            written.push(request.output_path.clone());
        }

        Ok(GenerationReport {
            written,
            templates_parsed: self.cache.len(),
        })
    }

    fn render(&mut self, request: &GenerationRequest) -> Result<String> {
        self.cache.resolve(&request.template_path)?;
        debug!(
            template = %request.template_path,
            output = %request.output_path.display(),
            "rendering"
        );
        self.cache
            .render(&request.template_path, &request.context)
            .map_err(|e| GenError::Render {
                template: request.template_path.clone(),
                output: request.output_path.clone(),
                source: Box::new(e),
            })
    }
}

/// Generate `requests` with a fresh filesystem-backed generator.
pub fn generate_files(requests: &[GenerationRequest]) -> Result<GenerationReport> {
    Generator::new().generate(requests)
}

/// Create or truncate `path` and write `contents` to it.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_MODE);
    }

    let to_write_error = |source| GenError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = options.open(path).map_err(to_write_error)?;
    file.write_all(contents).map_err(to_write_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::request::Context;

    #[test]
    fn test_empty_batch_writes_nothing() {
        let mut generator = Generator::new();
        let report = generator.generate(&[]).unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.templates_parsed, 0);
        assert!(generator.cache().is_empty());

        let report = generator.generate_transactional(&[]).unwrap();
        assert!(report.written.is_empty());
    }

    #[test]
    fn test_write_output_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_output(&path, b"a much longer first body").unwrap();
        write_output(&path, b"short").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[cfg(unix)]
    #[test]
    fn test_output_is_not_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.go");
        write_output(&path, b"package amcl\n").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0);
        assert_eq!(mode & 0o600, 0o600);
    }

    #[test]
    fn test_missing_output_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("t.hbs");
        std::fs::write(&template, "{{curve}}").unwrap();

        let out = dir.path().join("no_such_dir").join("out.txt");
        let err = Generator::new()
            .generate(&[GenerationRequest::new(
                &out,
                template.to_str().unwrap(),
                Context::curve("BN254"),
            )])
            .unwrap_err();

        assert!(matches!(&err, GenError::Write { path, .. } if path == &out));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!dir.path().join("no_such_dir").exists());
    }

    #[test]
    fn test_render_error_names_request() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("rsa.hbs");
        std::fs::write(&template, "RFS_{{key_size}}").unwrap();
        let out = dir.path().join("rsa_out.go");

        let err = Generator::new()
            .generate(&[GenerationRequest::new(
                &out,
                template.to_str().unwrap(),
                Context::curve("BLS383"),
            )])
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Render);
        let msg = err.to_string();
        assert!(msg.contains("rsa.hbs"));
        assert!(msg.contains("rsa_out.go"));
        assert!(!out.exists());
    }
}
