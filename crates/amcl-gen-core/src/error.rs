//! Unified error types for amcl-gen.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while building requests or generating files.
#[derive(Error, Debug)]
pub enum GenError {
    // --- Templates ---

    /// The template source could not be opened or read.
    #[error("cannot read template {path}")]
    TemplateNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The template source is not valid handlebars.
    #[error("failed to parse template {path}")]
    TemplateParse {
        path: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// The context does not satisfy the template (missing field in strict mode, bad helper input).
    #[error("failed to render {template} into {output}")]
    Render {
        template: String,
        output: PathBuf,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    // --- Output ---

    /// The rendered output could not be written (permissions, missing directory, disk full).
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One or more requests failed in transactional mode; nothing was written.
    #[error("{failed} of {total} generation requests failed, no files written")]
    Batch {
        failed: usize,
        total: usize,
        failures: Vec<GenError>,
    },

    // --- Configuration ---

    /// The manifest file was not found or could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Request building ---

    /// The named wrapper function set does not exist.
    #[error("unknown function set: {0} (supported: ecdsa, mpin, rand, rsa)")]
    UnknownFunctionSet(String),

    /// The wrappers family was requested without naming a function set.
    #[error("wrappers need a function set (supported: ecdsa, mpin, rand, rsa)")]
    MissingFunctionSet,

    /// A C function declaration did not match `<type> <name>(<args>)`.
    #[error("invalid C declaration: {0}")]
    InvalidDeclaration(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`GenError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Io,
    Parse,
    Render,
    Config,
}

impl GenError {
    /// Classify the error.
    ///
    /// A [`GenError::Batch`] takes the kind of its first failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TemplateNotFound { source, .. } => {
                if source.kind() == std::io::ErrorKind::NotFound {
                    ErrorKind::NotFound
                } else {
                    ErrorKind::Io
                }
            }
            Self::TemplateParse { .. } | Self::InvalidDeclaration(_) => ErrorKind::Parse,
            Self::Render { .. } => ErrorKind::Render,
            Self::Write { .. } | Self::Io(_) => ErrorKind::Io,
            Self::Batch { failures, .. } => failures
                .first()
                .map(GenError::kind)
                .unwrap_or(ErrorKind::Io),
            Self::ConfigNotFound { .. }
            | Self::ConfigParse { .. }
            | Self::UnknownFunctionSet(_)
            | Self::MissingFunctionSet => ErrorKind::Config,
        }
    }
}

/// Alias for `Result<T, GenError>`.
pub type Result<T> = std::result::Result<T, GenError>;
