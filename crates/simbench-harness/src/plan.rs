use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use simbench_core::{ErrorInfo, ParamValue, SweepError};

/// Fixed harness-side settings for one sweep batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Build system invocation; the first element is the program.
    #[serde(default = "HarnessConfig::default_build_command")]
    pub build_command: Vec<String>,
    /// Build variable receiving the joined compile-time flag definitions.
    #[serde(default = "HarnessConfig::default_flags_var")]
    pub flags_var: String,
    /// Path of the simulation binary to execute.
    #[serde(default = "HarnessConfig::default_program")]
    pub program: PathBuf,
    /// Compiled artifact removed before each rebuild; defaults to `program`.
    #[serde(default)]
    pub artifact: Option<PathBuf>,
}

impl HarnessConfig {
    fn default_build_command() -> Vec<String> {
        vec!["make".to_string()]
    }

    fn default_flags_var() -> String {
        "DFLAGS".to_string()
    }

    fn default_program() -> PathBuf {
        PathBuf::from("./brainsimulation")
    }

    /// Path guarded against stale reuse between configuration points.
    pub fn artifact_path(&self) -> &Path {
        self.artifact.as_deref().unwrap_or(&self.program)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            build_command: Self::default_build_command(),
            flags_var: Self::default_flags_var(),
            program: Self::default_program(),
            artifact: None,
        }
    }
}

/// Declarative sweep batch: harness settings plus the two disjoint
/// parameter declaration maps.
///
/// Each declared parameter is swept one-dimensionally over its value list,
/// in declaration order, with every other parameter left at build/run
/// defaults; the maps are never crossed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SweepPlan {
    /// Build and execution settings shared by every configuration point.
    #[serde(default)]
    pub harness: HarnessConfig,
    /// Compile-time declarations: flag name (with build-system prefix) to
    /// candidate values.
    #[serde(default)]
    pub compile: BTreeMap<String, Vec<ParamValue>>,
    /// Run-time declarations: parameter name to candidate counts.
    #[serde(default)]
    pub run: BTreeMap<String, Vec<u64>>,
}

impl SweepPlan {
    /// Loads a plan from a YAML document on disk.
    pub fn load(path: &Path) -> Result<Self, SweepError> {
        let text = fs::read_to_string(path).map_err(|err| {
            SweepError::Plan(
                ErrorInfo::new("plan-read", "failed to read sweep plan")
                    .with_context("path", path.display().to_string())
                    .with_hint(err.to_string()),
            )
        })?;
        Self::from_yaml(&text)
    }

    /// Decodes a plan from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, SweepError> {
        serde_yaml::from_str(text).map_err(|err| {
            SweepError::Plan(
                ErrorInfo::new("plan-decode", "failed to decode sweep plan")
                    .with_hint(err.to_string()),
            )
        })
    }
}
