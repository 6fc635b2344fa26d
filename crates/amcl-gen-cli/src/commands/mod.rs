//! CLI command implementations for amcl-gen.
//!
//! Each module corresponds to a subcommand (`amcl-gen <command>`).

pub mod family;
pub mod list;
pub mod manifest;

use std::path::PathBuf;

use anyhow::Result;

use amcl_gen_core::templates::EmbeddedSource;
use amcl_gen_core::{GenError, GenerationReport, GenerationRequest, Generator};

use crate::output;

/// Options shared by every generating subcommand.
pub struct Options {
    pub out_dir: Option<PathBuf>,
    pub transactional: bool,
}

/// Run one batch of requests and report each written file.
///
/// Templates prefixed with `builtin:` come from the binary; all others from disk.
pub fn generate(requests: &[GenerationRequest], transactional: bool) -> Result<GenerationReport> {
    let mut generator = Generator::with_source(EmbeddedSource);
    let result = if transactional {
        generator.generate_transactional(requests)
    } else {
        generator.generate(requests)
    };

    match result {
        Ok(report) => {
            let total = report.written.len();
            for (i, path) in report.written.iter().enumerate() {
                output::print_step(i + 1, total, &path.display().to_string());
            }
            output::print_success(&format!(
                "{total} file(s) generated from {} template(s)",
                report.templates_parsed
            ));
            Ok(report)
        }
        Err(e) => {
            if let GenError::Batch { failures, .. } = &e {
                for failure in failures {
                    output::print_error(&chain(failure));
                }
            }
            Err(e.into())
        }
    }
}

/// Flatten an error and its sources into one line.
fn chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
