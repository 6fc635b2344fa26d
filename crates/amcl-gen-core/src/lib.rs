//! Core library for amcl-gen.
//!
//! Renders one template per parameter set (curve name, RSA key size, wrapped C function
//! group) and writes each result to its own source file. The pieces:
//! - [`templates`] — template sources, the run-scoped [`templates::TemplateCache`], and
//!   the handlebars engine setup
//! - [`generator`] — the fail-fast [`generator::Generator`] that writes files
//! - [`request`] — [`request::GenerationRequest`] and the [`request::Context`] shapes
//! - [`families`], [`funcsets`], [`cdecl`] — builders that enumerate parameters into
//!   requests
//! - [`config`] — the JSON manifest that drives a whole build step

pub mod cdecl;
pub mod config;
pub mod error;
pub mod families;
pub mod funcsets;
pub mod generator;
pub mod request;
pub mod templates;

pub use error::{ErrorKind, GenError, Result};
pub use generator::{generate_files, GenerationReport, Generator};
pub use request::{Context, GenerationRequest};
