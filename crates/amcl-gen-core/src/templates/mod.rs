//! Template loading, caching and rendering.
//!
//! Templates are [Handlebars](https://handlebarsjs.com/) text. They are read through a
//! [`source::TemplateSource`], parsed once per path by [`cache::TemplateCache`], and
//! rendered by an engine from [`renderer`] with strict mode on and HTML escaping off.
//!
//! ## Template variables
//!
//! What a template may reference depends on the [`Context`](crate::request::Context)
//! it is rendered with:
//! - `{{curve}}` — curve identifier (e.g. `BLS383`)
//! - `{{key_size}}` — RSA key size in bits (e.g. `2048`)
//! - `{{set}}`, `{{suffix}}`, `{{header}}`, `{{#each funcs}}` — a wrapper function set
//!
//! Built-in templates live in `templates/` and are embedded by [`embedded`]; address them
//! with the `builtin:` prefix (e.g. `builtin:ecdsa.go.hbs`).

pub mod cache;
pub mod embedded;
pub mod renderer;
pub mod source;

pub use cache::TemplateCache;
pub use source::{EmbeddedSource, FsSource, TemplateSource, BUILTIN_PREFIX};
