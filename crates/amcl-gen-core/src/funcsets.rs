//! Named sets of AMCL C functions that get Go wrappers generated for them.
//!
//! A set maps a file suffix (a curve name, a key size, or `""` for parameter-independent
//! functions) to the parsed declarations that belong in that file. Per-parameter
//! declarations are written once with a `{{curve}}` or `{{key_size}}` placeholder and
//! expanded here.

use std::collections::BTreeMap;

use serde_json::json;

use crate::cdecl::{self, FuncDecl};
use crate::error::{GenError, Result};
use crate::families::{ECDSA_CURVES, MPIN_CURVES, RSA_KEY_SIZES};
use crate::templates::renderer;

/// Declarations grouped by file suffix, in suffix order.
pub type FunctionSet = BTreeMap<String, Vec<FuncDecl>>;

/// Names accepted by [`lookup`].
pub const SET_NAMES: &[&str] = &["ecdsa", "mpin", "rand", "rsa"];

const ECDSA_PER_CURVE: &[&str] = &[
    "int ECP_{{curve}}_KEY_PAIR_GENERATE(csprng* R, octet* s, octet* W)",
    "int ECP_{{curve}}_PUBLIC_KEY_VALIDATE(octet* W)",
    "int ECP_{{curve}}_SP_DSA(int h, csprng* R, octet* k, octet* s, octet* M, octet* c, octet* d)",
    "int ECP_{{curve}}_VP_DSA(int h, octet* W, octet* M, octet* c, octet* d)",
];

const MPIN_PER_CURVE: &[&str] = &[
    "int MPIN_{{curve}}_CLIENT_1(int h, int d, octet* ID, csprng* R, octet* x, int pin, octet* T, octet* S, octet* U, octet* UT, octet* TP)",
    "int MPIN_{{curve}}_CLIENT_2(octet* x, octet* y, octet* V)",
    "int MPIN_{{curve}}_CLIENT_KEY(int h, octet* g1, octet* g2, int pin, octet* r, octet* x, octet* p, octet* T, octet* K)",
    "int MPIN_{{curve}}_CLIENT(int h, int d, octet* ID, csprng* R, octet* x, int pin, octet* T, octet* V, octet* U, octet* UT, octet* TP, octet* MESSAGE, int t, octet* y)",
    "int MPIN_{{curve}}_EXTRACT_PIN(int h, octet* ID, int pin, octet* CS)",
    "int MPIN_{{curve}}_GET_CLIENT_PERMIT(int h, int d, octet* S, octet* ID, octet* TP)",
    "int MPIN_{{curve}}_GET_CLIENT_SECRET(octet* S, octet* ID, octet* CS)",
    "int MPIN_{{curve}}_GET_DVS_KEYPAIR(csprng* R, octet* Z, octet* Pa)",
    "int MPIN_{{curve}}_GET_G1_MULTIPLE(csprng* R, int t, octet* x, octet* G, octet* W)",
    "int MPIN_{{curve}}_GET_SERVER_SECRET(octet* S, octet* SS)",
    "int MPIN_{{curve}}_KANGAROO(octet* E, octet* F)",
    "int MPIN_{{curve}}_PRECOMPUTE(octet* T, octet* ID, octet* CP, octet* g1, octet* g2)",
    "int MPIN_{{curve}}_RANDOM_GENERATE(csprng* R, octet* S)",
    "int MPIN_{{curve}}_RECOMBINE_G1(octet* Q1, octet* Q2, octet* Q)",
    "int MPIN_{{curve}}_RECOMBINE_G2(octet* P1, octet* P2, octet* P)",
    "int MPIN_{{curve}}_SERVER_2(int d, octet* HID, octet* HTID, octet* y, octet* SS, octet* U, octet* UT, octet* V, octet* E, octet* F, octet* Pa)",
    "int MPIN_{{curve}}_SERVER_KEY(int h, octet* Z, octet* SS, octet* w, octet* p, octet* I, octet* U, octet* UT, octet* K)",
    "int MPIN_{{curve}}_SERVER(int h, int d, octet* HID, octet* HTID, octet* y, octet* SS, octet* U, octet* UT, octet* V, octet* E, octet* F, octet* ID, octet* MESSAGE, int t, octet* Pa)",
    "void MPIN_{{curve}}_SERVER_1(int h, int d, octet* ID, octet* HID, octet* HTID)",
];

const RSA_PER_KEY_SIZE: &[&str] = &[
    "void RSA_{{key_size}}_DECRYPT(rsa_private_key_{{key_size}}* priv, octet* G, octet* F)",
    "void RSA_{{key_size}}_ENCRYPT(rsa_public_key_{{key_size}}* pub, octet* F, octet* G)",
    "void RSA_{{key_size}}_KEY_PAIR(csprng* rng, sign32 e, rsa_private_key_{{key_size}}* priv, rsa_public_key_{{key_size}}* pub, octet* p, octet* q)",
    "void RSA_{{key_size}}_PRIVATE_KEY_KILL(rsa_private_key_{{key_size}}* PRIV)",
];

const RSA_SUPPORT: &[&str] = &[
    "int PKCS15(int h, octet* m, octet* w)",
    "int OAEP_ENCODE(int h, octet* m, csprng* rng, octet* p, octet* f)",
    "int OAEP_DECODE(int h, octet* p, octet* f)",
];

const RAND: &[&str] = &["void CREATE_CSPRNG(csprng* R, octet* S)"];

/// Build the named function set.
pub fn lookup(name: &str) -> Result<FunctionSet> {
    match name {
        "ecdsa" => per_parameter(ECDSA_PER_CURVE, "curve", ECDSA_CURVES),
        "mpin" => per_parameter(MPIN_PER_CURVE, "curve", MPIN_CURVES),
        "rand" => Ok(BTreeMap::from([(String::new(), parse_all(RAND)?)])),
        "rsa" => {
            let mut set = per_parameter(RSA_PER_KEY_SIZE, "key_size", RSA_KEY_SIZES)?;
            set.insert(String::new(), parse_all(RSA_SUPPORT)?);
            Ok(set)
        }
        other => Err(GenError::UnknownFunctionSet(other.to_string())),
    }
}

/// C header that declares the functions of `set` for `suffix`.
///
/// The ECDSA functions live in AMCL's per-curve `ecdh_<CURVE>.h` headers.
pub fn header(set: &str, suffix: &str) -> String {
    match (set, suffix) {
        (set, "") => format!("{set}_support.h"),
        ("ecdsa", curve) => format!("ecdh_{curve}.h"),
        (set, suffix) => format!("{set}_{suffix}.h"),
    }
}

fn per_parameter<V: ToString>(
    decls: &[&str],
    field: &str,
    values: &[V],
) -> Result<FunctionSet> {
    let mut set = BTreeMap::new();
    for value in values {
        let value = value.to_string();
        let data = json!({ field: value });
        let funcs = decls
            .iter()
            .map(|decl| {
                let expanded = renderer::render_inline(decl, &data)
                    .map_err(|e| GenError::InvalidDeclaration(format!("{decl}: {e}")))?;
                cdecl::parse(&expanded)
            })
            .collect::<Result<Vec<_>>>()?;
        set.insert(value, funcs);
    }
    Ok(set)
}

fn parse_all(decls: &[&str]) -> Result<Vec<FuncDecl>> {
    decls.iter().map(|d| cdecl::parse(d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mpin_has_one_group_per_curve() {
        let set = lookup("mpin").unwrap();
        let suffixes: Vec<_> = set.keys().map(String::as_str).collect();
        assert_eq!(suffixes, ["BLS383", "BN254", "BN254CX"]);
        for funcs in set.values() {
            assert_eq!(funcs.len(), MPIN_PER_CURVE.len());
        }
        assert_eq!(set["BN254"][1].c_name, "MPIN_BN254_CLIENT_2");
    }

    #[test]
    fn test_ecdsa_has_one_group_per_curve() {
        let set = lookup("ecdsa").unwrap();
        let suffixes: Vec<_> = set.keys().map(String::as_str).collect();
        assert_eq!(
            suffixes,
            ["BLS383", "BN254", "BN254CX", "ED25519", "GOLDILOCKS", "NIST256"]
        );
        for funcs in set.values() {
            assert_eq!(funcs.len(), ECDSA_PER_CURVE.len());
        }
        let sign = &set["BLS383"][2];
        assert_eq!(sign.c_name, "ECP_BLS383_SP_DSA");
        assert_eq!(sign.args.len(), 7);
        assert!(sign.returns_value);
    }

    #[test]
    fn test_header_names() {
        assert_eq!(header("ecdsa", "BLS383"), "ecdh_BLS383.h");
        assert_eq!(header("rsa", "2048"), "rsa_2048.h");
        assert_eq!(header("rsa", ""), "rsa_support.h");
    }

    #[test]
    fn test_rsa_has_support_group() {
        let set = lookup("rsa").unwrap();
        let suffixes: Vec<_> = set.keys().map(String::as_str).collect();
        assert_eq!(suffixes, ["", "2048", "3072", "4096"]);
        assert_eq!(set[""].len(), 3);
        let kill = &set["3072"][3];
        assert_eq!(kill.c_name, "RSA_3072_PRIVATE_KEY_KILL");
        assert_eq!(kill.args[0].c_type, "rsa_private_key_3072");
    }

    #[test]
    fn test_rand_is_single_group() {
        let set = lookup("rand").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set[""][0].c_name, "CREATE_CSPRNG");
    }

    #[test]
    fn test_unknown_set() {
        assert!(matches!(
            lookup("pbc"),
            Err(GenError::UnknownFunctionSet(name)) if name == "pbc"
        ));
    }

    #[test]
    fn test_every_set_name_builds() {
        for name in SET_NAMES {
            assert!(lookup(name).is_ok(), "{name} failed to build");
        }
    }
}
