use std::path::Path;

use anyhow::Result;

use amcl_gen_core::config::GenConfig;

use super::Options;
use crate::output;

/// Run every job in a manifest as one batch.
///
/// Relative paths in the manifest resolve against the manifest's directory. A global
/// `--out-dir` replaces every output directory the manifest names, and `--transactional`
/// on the command line overrides a `false` in the manifest.
pub fn run(config_path: &Path, opts: &Options) -> Result<()> {
    output::print_header("amcl-gen run");
    output::print_key_value("Manifest", &config_path.display().to_string());

    let config = GenConfig::load(config_path)?;
    let base_dir = config_path.parent().unwrap_or(Path::new("."));
    let requests = config.requests(base_dir, opts.out_dir.as_deref())?;
    if let Some(dir) = &opts.out_dir {
        output::print_key_value("Output", &dir.display().to_string());
    }

    output::print_key_value("Jobs", &config.jobs.len().to_string());
    tracing::info!(
        jobs = config.jobs.len(),
        requests = requests.len(),
        "expanded manifest"
    );

    super::generate(&requests, opts.transactional || config.transactional)?;
    Ok(())
}
