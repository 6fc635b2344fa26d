use anyhow::Result;

use amcl_gen_core::families::{self, Family};

use super::Options;
use crate::output;

/// Generate every file of one family.
///
/// Falls back to the family's built-in template when `template` is `None`. Output goes
/// to `--out-dir` or the current directory.
pub fn run(family: Family, template: Option<&str>, set: Option<&str>, opts: &Options) -> Result<()> {
    let template = template.unwrap_or(family.default_template());
    let title = match set {
        Some(set) => format!("amcl-gen {family} {set}"),
        None => format!("amcl-gen {family}"),
    };
    output::print_header(&title);
    output::print_key_value("Template", template);

    let mut requests = families::build(family, template, set)?;
    if let Some(dir) = &opts.out_dir {
        output::print_key_value("Output", &dir.display().to_string());
        requests = families::in_dir(requests, dir);
    }

    super::generate(&requests, opts.transactional)?;
    Ok(())
}
