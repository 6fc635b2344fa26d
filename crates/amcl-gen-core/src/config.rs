//! Generation manifest (`amcl-gen.config.json`).
//!
//! A manifest lists the jobs one build step runs. Relative template paths and output
//! directories are resolved against the directory containing the manifest, so a manifest
//! can be run from anywhere.
//!
//! ```json
//! {
//!   "out_dir": "wrap",
//!   "jobs": [
//!     { "family": "mpin", "template": "gen/mpin.go.hbs" },
//!     { "family": "rsa" },
//!     { "family": "wrappers", "set": "rsa", "out_dir": "wrap/internal" },
//!     { "family": "custom", "template": "gen/curve.txt.hbs",
//!       "pattern": "curve_{}.txt", "param": "curve", "values": ["BN254"] }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};
use crate::families::{self, Family};
use crate::request::GenerationRequest;
use crate::templates::BUILTIN_PREFIX;

/// Default manifest file name.
pub const CONFIG_FILE: &str = "amcl-gen.config.json";

/// A generation manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenConfig {
    /// Directory all outputs go to unless a job overrides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,
    /// Render everything before writing anything.
    #[serde(default)]
    pub transactional: bool,
    pub jobs: Vec<Job>,
}

/// One family expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum Job {
    Ecdsa {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        template: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        out_dir: Option<PathBuf>,
    },
    Mpin {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        template: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        out_dir: Option<PathBuf>,
    },
    Rsa {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        template: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        out_dir: Option<PathBuf>,
    },
    Wrappers {
        set: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        template: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        out_dir: Option<PathBuf>,
    },
    /// Any template over any list of string values, rendered with `{ param: value }`.
    Custom {
        template: String,
        pattern: String,
        param: String,
        values: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        out_dir: Option<PathBuf>,
    },
}

impl Job {
    fn out_dir(&self) -> Option<&Path> {
        match self {
            Self::Ecdsa { out_dir, .. }
            | Self::Mpin { out_dir, .. }
            | Self::Rsa { out_dir, .. }
            | Self::Wrappers { out_dir, .. }
            | Self::Custom { out_dir, .. } => out_dir.as_deref(),
        }
    }

    /// Requests for this job with template paths as written in the manifest.
    pub fn requests(&self) -> Result<Vec<GenerationRequest>> {
        let template_or_default = |template: &Option<String>, family: Family| {
            template
                .clone()
                .unwrap_or_else(|| family.default_template().to_string())
        };

        match self {
            Self::Ecdsa { template, .. } => Ok(families::ecdsa(&template_or_default(
                template,
                Family::Ecdsa,
            ))),
            Self::Mpin { template, .. } => Ok(families::mpin(&template_or_default(
                template,
                Family::Mpin,
            ))),
            Self::Rsa { template, .. } => Ok(families::rsa(&template_or_default(
                template,
                Family::Rsa,
            ))),
            Self::Wrappers { set, template, .. } => {
                families::wrappers(set, &template_or_default(template, Family::Wrappers))
            }
            Self::Custom {
                template,
                pattern,
                param,
                values,
                ..
            } => Ok(families::per_parameter(template, pattern, param, values)),
        }
    }
}

impl GenConfig {
    /// Load a manifest from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| GenError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| GenError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save the manifest as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| GenError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Expand every job, in manifest order, resolving relative paths against `base_dir`.
    ///
    /// `out_dir_override` replaces every manifest and job `out_dir` and is used as given,
    /// not joined onto `base_dir`.
    pub fn requests(
        &self,
        base_dir: &Path,
        out_dir_override: Option<&Path>,
    ) -> Result<Vec<GenerationRequest>> {
        let mut all = Vec::new();
        for job in &self.jobs {
            let dir = match (out_dir_override, job.out_dir().or(self.out_dir.as_deref())) {
                (Some(over), _) => over.to_path_buf(),
                (None, Some(d)) => base_dir.join(d),
                (None, None) => base_dir.to_path_buf(),
            };
            let requests = job
                .requests()?
                .into_iter()
                .map(|mut r| {
                    r.template_path = resolve_template(base_dir, &r.template_path);
                    r
                })
                .collect();
            all.extend(families::in_dir(requests, &dir));
        }
        Ok(all)
    }
}

fn resolve_template(base_dir: &Path, template: &str) -> String {
    if template.starts_with(BUILTIN_PREFIX) || Path::new(template).is_absolute() {
        template.to_string()
    } else {
        base_dir.join(template).to_string_lossy().into_owned()
    }
}
