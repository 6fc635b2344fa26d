//! Run-scoped memoization of parsed templates.
//!
//! A generation run usually renders one template many times, once per curve or key
//! size. [`TemplateCache`] reads and parses each template path the first time it is
//! requested and serves the parsed form afterwards. Entries are never evicted or
//! invalidated: if a template changes on disk mid-run the cache does not notice.
//!
//! The cache is owned by a single [`Generator`](crate::generator::Generator) and is
//! mutated through `&mut self`, so it needs no locking.

use handlebars::{Handlebars, Template};
use serde::Serialize;
use tracing::debug;

use super::renderer;
use super::source::{FsSource, TemplateSource};
use crate::error::{GenError, Result};

/// Parsed templates keyed by their source path.
pub struct TemplateCache<S = FsSource> {
    hbs: Handlebars<'static>,
    source: S,
}

impl TemplateCache<FsSource> {
    /// Create an empty cache reading from the filesystem.
    pub fn new() -> Self {
        Self::with_source(FsSource)
    }
}

impl Default for TemplateCache<FsSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TemplateSource> TemplateCache<S> {
    /// Create an empty cache that reads template text through `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            hbs: renderer::engine(),
            source,
        }
    }

    /// Return the parsed template for `path`, reading and parsing it on first use.
    pub fn get(&mut self, path: &str) -> Result<&Template> {
        self.resolve(path)?;
        self.hbs
            .get_template(path)
            .ok_or_else(|| GenError::TemplateNotFound {
                path: path.to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "template missing from registry after parse",
                ),
            })
    }

    /// Make sure `path` is parsed and registered.
    pub fn resolve(&mut self, path: &str) -> Result<()> {
        if self.hbs.has_template(path) {
            debug!(template = path, "template cache hit");
            return Ok(());
        }

        debug!(template = path, "template cache miss");
        let text = self
            .source
            .read(path)
            .map_err(|source| GenError::TemplateNotFound {
                path: path.to_string(),
                source,
            })?;

        let template = Template::compile(&text).map_err(|e| GenError::TemplateParse {
            path: path.to_string(),
            source: Box::new(e),
        })?;

        self.hbs.register_template(path, template);
        Ok(())
    }

    /// Render an already resolved template against `data`.
    ///
    /// Rendering only reads the parsed template; all variation comes from `data`.
    pub fn render<T: Serialize>(
        &self,
        path: &str,
        data: &T,
    ) -> std::result::Result<String, handlebars::RenderError> {
        self.hbs.render(path, data)
    }

    /// Whether `path` has already been parsed.
    pub fn contains(&self, path: &str) -> bool {
        self.hbs.has_template(path)
    }

    /// Number of parsed templates.
    pub fn len(&self) -> usize {
        self.hbs.get_templates().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The source this cache reads from.
    pub fn source(&self) -> &S {
        &self.source
    }
}
