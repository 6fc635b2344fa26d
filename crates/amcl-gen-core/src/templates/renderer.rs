//! Handlebars engine setup shared by the template cache and inline rendering.
//!
//! Every engine runs in **strict mode**: a `{{variable}}` that is absent from the context
//! is a render error instead of an empty string. Output is Go and C source, so HTML
//! escaping is switched off as well.

use handlebars::Handlebars;
use serde::Serialize;

/// Create a strict, non-escaping handlebars registry.
pub fn engine() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs.register_escape_fn(handlebars::no_escape);
    hbs
}

/// Render a one-off template string without caching it.
///
/// Used for short snippets such as C declarations carrying a `{{curve}}` placeholder.
pub fn render_inline<T: Serialize>(
    template: &str,
    data: &T,
) -> std::result::Result<String, handlebars::RenderError> {
    engine().render_template(template, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_inline_substitutes() {
        let out = render_inline("MPIN_{{curve}}_CLIENT_1", &json!({ "curve": "BN254" })).unwrap();
        assert_eq!(out, "MPIN_BN254_CLIENT_1");
    }

    #[test]
    fn test_strict_mode_rejects_missing_variable() {
        let result = render_inline("RSA_{{key_size}}_ENCRYPT", &json!({ "curve": "BN254" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_no_html_escaping() {
        let out = render_inline("{{t}}", &json!({ "t": "octet* <W> & \"x\"" })).unwrap();
        assert_eq!(out, "octet* <W> & \"x\"");
    }
}
