//! Parser for the AMCL C function declarations that wrapper templates are built from.
//!
//! Declarations look like
//! `int MPIN_BN254_CLIENT_2(octet* x, octet* y, octet* V)`. Only the argument types the
//! AMCL API actually uses are recognised; anything else is rejected so a typo in a
//! function set fails the run instead of silently dropping an argument.
//!
//! Each argument also carries its Go binding (`go_param`, `c_expr`) so templates can emit
//! cgo calls without branching on C types.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{GenError, Result};

static DECL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<type>\S+) (?P<name>[^\(\s]+) ?\((?P<args>[^\)]*)\)$")
        .expect("declaration regex should be valid")
});

static ARG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<type>csprng\*|int|octet\*|rsa_private_key_\d+\*|rsa_public_key_\d+\*|sign32) (?P<name>\w+)$",
    )
    .expect("argument regex should be valid")
});

/// One parsed C function declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuncDecl {
    /// Return type, e.g. `int` or `void`.
    pub c_type: String,
    pub c_name: String,
    pub args: Vec<Arg>,
    /// False for `void` functions.
    pub returns_value: bool,
}

/// One argument of a [`FuncDecl`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arg {
    pub name: String,
    /// C type without the trailing `*`.
    pub c_type: String,
    /// True when the C type is a pointer.
    pub by_ref: bool,
    /// Go parameter, e.g. `m *Octet`.
    pub go_param: String,
    /// Expression converting the Go parameter for the cgo call, e.g. `(*C.octet)(m)`.
    pub c_expr: String,
}

/// Parse a single declaration.
pub fn parse(decl: &str) -> Result<FuncDecl> {
    let decl = decl.trim();
    let caps = DECL_RE
        .captures(decl)
        .ok_or_else(|| GenError::InvalidDeclaration(decl.to_string()))?;

    let c_type = caps["type"].to_string();
    let args = parse_args(decl, &caps["args"])?;

    Ok(FuncDecl {
        returns_value: c_type != "void",
        c_type,
        c_name: caps["name"].to_string(),
        args,
    })
}

fn parse_args(decl: &str, list: &str) -> Result<Vec<Arg>> {
    let list = list.trim();
    if list.is_empty() || list == "void" {
        return Ok(Vec::new());
    }

    list.split(',')
        .map(|raw| {
            let caps = ARG_RE
                .captures(raw.trim())
                .ok_or_else(|| GenError::InvalidDeclaration(decl.to_string()))?;
            let raw_type = &caps["type"];
            let name = caps["name"].to_string();
            let c_type = raw_type.trim_end_matches('*').to_string();
            let (go_param, c_expr) = go_binding(&c_type, &name);
            Ok(Arg {
                by_ref: raw_type.ends_with('*'),
                c_type,
                name,
                go_param,
                c_expr,
            })
        })
        .collect()
}

fn go_binding(c_type: &str, name: &str) -> (String, String) {
    match c_type {
        "int" => (format!("{name} int"), format!("C.int({name})")),
        "sign32" => (format!("{name} int32"), format!("C.sign32({name})")),
        "octet" => (format!("{name} *Octet"), format!("(*C.octet)({name})")),
        "csprng" => (format!("{name} *Rand"), format!("(*C.csprng)({name})")),
        t if t.starts_with("rsa_private_key_") => (
            format!("{name} RSAPrivateKey"),
            format!("{name}.(*C.{t})"),
        ),
        t => (
            format!("{name} RSAPublicKey"),
            format!("{name}.(*C.{t})"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_function() {
        let f = parse("int MPIN_BN254_CLIENT_2(octet* x, octet* y, octet* V)").unwrap();
        assert_eq!(f.c_type, "int");
        assert_eq!(f.c_name, "MPIN_BN254_CLIENT_2");
        assert!(f.returns_value);
        assert_eq!(f.args.len(), 3);
        assert_eq!(f.args[2].name, "V");
        assert_eq!(f.args[2].c_type, "octet");
        assert!(f.args[2].by_ref);
        assert_eq!(f.args[2].go_param, "V *Octet");
        assert_eq!(f.args[2].c_expr, "(*C.octet)(V)");
    }

    #[test]
    fn test_parse_void_function_with_keys() {
        let f = parse(
            "void RSA_2048_KEY_PAIR(csprng* rng, sign32 e, rsa_private_key_2048* priv, rsa_public_key_2048* pub, octet* p, octet* q)",
        )
        .unwrap();
        assert!(!f.returns_value);
        let types: Vec<_> = f.args.iter().map(|a| a.c_type.as_str()).collect();
        assert_eq!(
            types,
            [
                "csprng",
                "sign32",
                "rsa_private_key_2048",
                "rsa_public_key_2048",
                "octet",
                "octet"
            ]
        );
        assert!(!f.args[1].by_ref);
        assert_eq!(f.args[1].c_expr, "C.sign32(e)");
        assert_eq!(f.args[2].go_param, "priv RSAPrivateKey");
        assert_eq!(f.args[2].c_expr, "priv.(*C.rsa_private_key_2048)");
        assert_eq!(f.args[3].go_param, "pub RSAPublicKey");
    }

    #[test]
    fn test_parse_int_argument() {
        let f = parse("int PKCS15(int h, octet* m, octet* w)").unwrap();
        assert_eq!(f.args[0].go_param, "h int");
        assert_eq!(f.args[0].c_expr, "C.int(h)");
        assert!(!f.args[0].by_ref);
    }

    #[test]
    fn test_parse_no_arguments() {
        let f = parse("void AMCL_VERSION()").unwrap();
        assert!(f.args.is_empty());
    }

    #[test]
    fn test_unknown_argument_type_rejected() {
        let err = parse("int ECP_BN254_SP_DSA(int h, ecp* P)").unwrap_err();
        assert!(matches!(err, GenError::InvalidDeclaration(_)));
    }

    #[test]
    fn test_malformed_declaration_rejected() {
        assert!(parse("MPIN_BN254_CLIENT_2 octet* x").is_err());
        assert!(parse("").is_err());
    }
}
