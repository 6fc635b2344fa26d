//! amcl-gen CLI — generates per-parameter AMCL wrapper sources from templates.
//!
//! One subcommand per generation family (`ecdsa`, `mpin`, `rsa`, `wrappers`), `run` for a
//! JSON manifest, and `list` to show what is built in. Any failure stops the run and
//! exits non-zero; files written before the failure are left in place unless
//! `--transactional` is given.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use amcl_gen_core::families::Family;

#[derive(Parser)]
#[command(
    name = "amcl-gen",
    about = "Generate AMCL wrapper sources for every curve and key size",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory generated files are written to (must already exist)
    #[arg(long, short, global = true, env = "AMCL_GEN_OUT_DIR")]
    out_dir: Option<PathBuf>,

    /// Render every file before writing any; write nothing if one fails
    #[arg(long, global = true)]
    transactional: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate ECDSA sources for every supported curve
    Ecdsa {
        /// Template path (default: built-in ecdsa template)
        #[arg(long, short)]
        template: Option<String>,
    },

    /// Generate MPIN sources for every pairing-friendly curve
    Mpin {
        /// Template path (default: built-in mpin template)
        #[arg(long, short)]
        template: Option<String>,
    },

    /// Generate RSA sources for every key size
    Rsa {
        /// Template path (default: built-in rsa template)
        #[arg(long, short)]
        template: Option<String>,
    },

    /// Generate Go wrappers for a set of C functions
    Wrappers {
        /// Function set to wrap
        set: SetChoice,

        /// Template path (default: built-in wrappers template)
        #[arg(long, short)]
        template: Option<String>,
    },

    /// Run every job in a generation manifest
    Run {
        /// Path to the manifest
        #[arg(long, short, default_value = amcl_gen_core::config::CONFIG_FILE)]
        config: PathBuf,
    },

    /// List families, function sets and built-in templates
    List,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum SetChoice {
    Ecdsa,
    Mpin,
    Rand,
    Rsa,
}

impl SetChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ecdsa => "ecdsa",
            Self::Mpin => "mpin",
            Self::Rand => "rand",
            Self::Rsa => "rsa",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let opts = commands::Options {
        out_dir: cli.out_dir,
        transactional: cli.transactional,
    };

    match cli.command {
        Commands::Ecdsa { template } => {
            commands::family::run(Family::Ecdsa, template.as_deref(), None, &opts)?;
        }
        Commands::Mpin { template } => {
            commands::family::run(Family::Mpin, template.as_deref(), None, &opts)?;
        }
        Commands::Rsa { template } => {
            commands::family::run(Family::Rsa, template.as_deref(), None, &opts)?;
        }
        Commands::Wrappers { set, template } => {
            commands::family::run(
                Family::Wrappers,
                template.as_deref(),
                Some(set.as_str()),
                &opts,
            )?;
        }
        Commands::Run { config } => {
            commands::manifest::run(&config, &opts)?;
        }
        Commands::List => commands::list::run(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_wrappers_with_globals() {
        let cli = Cli::try_parse_from([
            "amcl-gen",
            "wrappers",
            "rsa",
            "--template",
            "wrap/wrappers.go.hbs",
            "--out-dir",
            "wrap",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.out_dir, Some(PathBuf::from("wrap")));
        match cli.command {
            Commands::Wrappers { set, template } => {
                assert_eq!(set.as_str(), "rsa");
                assert_eq!(template.as_deref(), Some("wrap/wrappers.go.hbs"));
            }
            _ => panic!("expected wrappers command"),
        }
    }

    #[test]
    fn test_set_choices_match_function_sets() {
        let names: Vec<_> = SetChoice::value_variants()
            .iter()
            .map(SetChoice::as_str)
            .collect();
        assert_eq!(names, amcl_gen_core::funcsets::SET_NAMES);
    }

    #[test]
    fn test_unknown_set_rejected() {
        assert!(Cli::try_parse_from(["amcl-gen", "wrappers", "pbc"]).is_err());
    }

    #[test]
    fn test_run_default_config() {
        let cli = Cli::try_parse_from(["amcl-gen", "run", "--transactional"]).unwrap();
        assert!(cli.transactional);
        match cli.command {
            Commands::Run { config } => {
                assert_eq!(config, PathBuf::from("amcl-gen.config.json"));
            }
            _ => panic!("expected run command"),
        }
    }
}
