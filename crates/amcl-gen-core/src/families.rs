//! Request builders for the supported parameter families.
//!
//! Each family pairs one template with a fixed list of parameter values and names every
//! output after its value:
//!
//! | Family     | Parameters                                            | Output file                          |
//! |------------|-------------------------------------------------------|--------------------------------------|
//! | `ecdsa`    | BLS383, BN254, BN254CX, ED25519, GOLDILOCKS, NIST256 | `ecdsa_<CURVE>_generated.go`         |
//! | `mpin`     | BLS383, BN254, BN254CX                               | `mpin_<CURVE>_generated.go`          |
//! | `rsa`      | 2048, 3072, 4096                                     | `rsa_<SIZE>_generated.go`            |
//! | `wrappers` | suffixes of a [function set](crate::funcsets)         | `<set>[_<suffix>]_wrappers_generated.go` |
//!
//! Builders only produce requests. Nothing touches the filesystem until the requests are
//! handed to a [`Generator`](crate::generator::Generator).

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{GenError, Result};
use crate::funcsets;
use crate::request::{Context, GenerationRequest};

pub const ECDSA_CURVES: &[&str] = &["BLS383", "BN254", "BN254CX", "ED25519", "GOLDILOCKS", "NIST256"];
pub const MPIN_CURVES: &[&str] = &["BLS383", "BN254", "BN254CX"];
pub const RSA_KEY_SIZES: &[u32] = &[2048, 3072, 4096];

/// Placeholder replaced by the parameter value in output name patterns.
pub const PLACEHOLDER: &str = "{}";

/// A built-in generation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Ecdsa,
    Mpin,
    Rsa,
    Wrappers,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ecdsa => "ecdsa",
            Self::Mpin => "mpin",
            Self::Rsa => "rsa",
            Self::Wrappers => "wrappers",
        }
    }

    /// Embedded template used when no template path is given.
    pub fn default_template(&self) -> &'static str {
        match self {
            Self::Ecdsa => "builtin:ecdsa.go.hbs",
            Self::Mpin => "builtin:mpin.go.hbs",
            Self::Rsa => "builtin:rsa.go.hbs",
            Self::Wrappers => "builtin:wrappers.go.hbs",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expand an output name pattern such as `mpin_{}_generated.go`.
pub fn output_name(pattern: &str, value: &str) -> PathBuf {
    PathBuf::from(pattern.replacen(PLACEHOLDER, value, 1))
}

/// One request per value, rendered with a flat `{ param: value }` context.
pub fn per_parameter<V: AsRef<str>>(
    template: &str,
    pattern: &str,
    param: &str,
    values: &[V],
) -> Vec<GenerationRequest> {
    values
        .iter()
        .map(|v| {
            let v = v.as_ref();
            GenerationRequest::new(
                output_name(pattern, v),
                template,
                Context::fields([(param, v)]),
            )
        })
        .collect()
}

/// One [`Context::Curve`] request per curve.
pub fn curves<C: AsRef<str>>(template: &str, pattern: &str, curves: &[C]) -> Vec<GenerationRequest> {
    curves
        .iter()
        .map(|c| {
            let c = c.as_ref();
            GenerationRequest::new(output_name(pattern, c), template, Context::curve(c))
        })
        .collect()
}

/// ECDSA sources for every supported curve.
pub fn ecdsa(template: &str) -> Vec<GenerationRequest> {
    curves(template, "ecdsa_{}_generated.go", ECDSA_CURVES)
}

/// MPIN sources for every pairing-friendly curve.
pub fn mpin(template: &str) -> Vec<GenerationRequest> {
    curves(template, "mpin_{}_generated.go", MPIN_CURVES)
}

/// RSA sources for every supported key size.
pub fn rsa(template: &str) -> Vec<GenerationRequest> {
    RSA_KEY_SIZES
        .iter()
        .map(|&bits| {
            GenerationRequest::new(
                output_name("rsa_{}_generated.go", &bits.to_string()),
                template,
                Context::key_size(bits),
            )
        })
        .collect()
}

/// Go wrapper files for the named C function set, one per suffix in suffix order.
pub fn wrappers(set: &str, template: &str) -> Result<Vec<GenerationRequest>> {
    let functions = funcsets::lookup(set)?;
    Ok(functions
        .into_iter()
        .map(|(suffix, funcs)| {
            let output = if suffix.is_empty() {
                format!("{set}_wrappers_generated.go")
            } else {
                format!("{set}_{suffix}_wrappers_generated.go")
            };
            GenerationRequest::new(
                output,
                template,
                Context::Wrappers {
                    set: set.to_string(),
                    header: funcsets::header(set, &suffix),
                    suffix,
                    funcs,
                },
            )
        })
        .collect())
}

/// Requests for a built-in family. `set` is only used by [`Family::Wrappers`].
pub fn build(family: Family, template: &str, set: Option<&str>) -> Result<Vec<GenerationRequest>> {
    match family {
        Family::Ecdsa => Ok(ecdsa(template)),
        Family::Mpin => Ok(mpin(template)),
        Family::Rsa => Ok(rsa(template)),
        Family::Wrappers => {
            let set = set.ok_or(GenError::MissingFunctionSet)?;
            wrappers(set, template)
        }
    }
}

/// Place every output under `dir`.
pub fn in_dir(requests: Vec<GenerationRequest>, dir: &Path) -> Vec<GenerationRequest> {
    requests
        .into_iter()
        .map(|mut r| {
            r.output_path = dir.join(&r.output_path);
            r
        })
        .collect()
}
