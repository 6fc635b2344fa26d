//! Units of generator work.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::cdecl::FuncDecl;

/// Data a template is rendered against.
///
/// Serialized untagged, so templates see the fields of the active variant directly
/// (`{{curve}}`, `{{key_size}}`, ...). Field names are resolved by the template engine at
/// render time; a template that references a field the variant lacks fails to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Context {
    /// One elliptic curve, e.g. `BLS383`.
    Curve { curve: String },
    /// One RSA key size in bits.
    KeySize { key_size: u32 },
    /// A group of C functions to wrap, e.g. the MPIN functions for one curve.
    Wrappers {
        set: String,
        suffix: String,
        /// C header the functions are declared in.
        header: String,
        funcs: Vec<FuncDecl>,
    },
    /// Free-form flat substitution.
    Fields(BTreeMap<String, String>),
}

impl Context {
    pub fn curve(name: impl Into<String>) -> Self {
        Self::Curve { curve: name.into() }
    }

    pub fn key_size(bits: u32) -> Self {
        Self::KeySize { key_size: bits }
    }

    /// Build a [`Context::Fields`] from key/value pairs.
    pub fn fields<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Fields(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Render `template_path` with `context` and write the result to `output_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub output_path: PathBuf,
    pub template_path: String,
    pub context: Context,
}

impl GenerationRequest {
    pub fn new(
        output_path: impl Into<PathBuf>,
        template_path: impl Into<String>,
        context: Context,
    ) -> Self {
        Self {
            output_path: output_path.into(),
            template_path: template_path.into(),
            context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_curve_serializes_flat() {
        let value = serde_json::to_value(Context::curve("BLS383")).unwrap();
        assert_eq!(value, json!({ "curve": "BLS383" }));
    }

    #[test]
    fn test_key_size_serializes_as_number() {
        let value = serde_json::to_value(Context::key_size(2048)).unwrap();
        assert_eq!(value, json!({ "key_size": 2048 }));
    }

    #[test]
    fn test_fields_serialize_as_map() {
        let value = serde_json::to_value(Context::fields([("x", "1"), ("y", "2")])).unwrap();
        assert_eq!(value, json!({ "x": "1", "y": "2" }));
    }

    #[test]
    fn test_wrappers_serialize_funcs() {
        let ctx = Context::Wrappers {
            set: "rand".into(),
            suffix: String::new(),
            header: "rand_support.h".into(),
            funcs: vec![crate::cdecl::parse("void CREATE_CSPRNG(csprng* R, octet* S)").unwrap()],
        };
        let value = serde_json::to_value(ctx).unwrap();
        assert_eq!(value["set"], "rand");
        assert_eq!(value["suffix"], "");
        assert_eq!(value["header"], "rand_support.h");
        assert_eq!(value["funcs"][0]["c_name"], "CREATE_CSPRNG");
        assert_eq!(value["funcs"][0]["args"][0]["by_ref"], true);
    }
}
