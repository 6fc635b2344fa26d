use amcl_gen_core::families::{self, Family};
use amcl_gen_core::funcsets;
use amcl_gen_core::templates::{embedded, BUILTIN_PREFIX};

use crate::output;

/// Print the built-in families, their parameters, and the embedded templates.
pub fn run() {
    output::print_header("amcl-gen families");
    let sizes: Vec<String> = families::RSA_KEY_SIZES.iter().map(u32::to_string).collect();
    output::print_key_value(Family::Ecdsa.as_str(), &families::ECDSA_CURVES.join(", "));
    output::print_key_value(Family::Mpin.as_str(), &families::MPIN_CURVES.join(", "));
    output::print_key_value(Family::Rsa.as_str(), &sizes.join(", "));
    output::print_key_value(Family::Wrappers.as_str(), &funcsets::SET_NAMES.join(", "));

    output::print_header("Built-in templates");
    for name in embedded::NAMES {
        println!("  {BUILTIN_PREFIX}{name}");
    }
}
