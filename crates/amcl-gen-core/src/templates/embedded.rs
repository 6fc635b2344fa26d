//! Compile-time embedded templates for the built-in generation families.
//!
//! Each constant loads a template from `templates/` via [`include_str!`]. The paths are
//! relative to this source file (`crates/amcl-gen-core/src/templates/embedded.rs`).
//! They are reachable through [`EmbeddedSource`](super::source::EmbeddedSource) as
//! `builtin:<file name>`.
//!
//! Do NOT rename template files without updating both the `include_str!` path and the
//! name in [`lookup`].

pub const ECDSA_GO: &str = include_str!("../../templates/ecdsa.go.hbs");
pub const MPIN_GO: &str = include_str!("../../templates/mpin.go.hbs");
pub const RSA_GO: &str = include_str!("../../templates/rsa.go.hbs");
pub const WRAPPERS_GO: &str = include_str!("../../templates/wrappers.go.hbs");

/// Names of every embedded template, in the form accepted by [`lookup`].
pub const NAMES: &[&str] = &["ecdsa.go.hbs", "mpin.go.hbs", "rsa.go.hbs", "wrappers.go.hbs"];

/// Find an embedded template by file name.
pub fn lookup(name: &str) -> Option<&'static str> {
    match name {
        "ecdsa.go.hbs" => Some(ECDSA_GO),
        "mpin.go.hbs" => Some(MPIN_GO),
        "rsa.go.hbs" => Some(RSA_GO),
        "wrappers.go.hbs" => Some(WRAPPERS_GO),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in NAMES {
            assert!(lookup(name).is_some(), "missing embedded template {name}");
        }
    }

    #[test]
    fn test_every_embedded_template_compiles() {
        for name in NAMES {
            let text = lookup(name).unwrap();
            handlebars::Template::compile(text)
                .unwrap_or_else(|e| panic!("{name} does not compile: {e}"));
        }
    }
}
