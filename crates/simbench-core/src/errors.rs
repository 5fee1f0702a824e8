//! Structured error types shared across simbench crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`SweepError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (commands, paths, counts, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the operator resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " | context: [{}]", pairs.join(", "))?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the sweep harness.
///
/// Build, execution, parse, plan, table and hash failures are fatal for the
/// surrounding batch; frequency exhaustion is fatal for the affected
/// parameter only and is downgraded by the sweep controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SweepError {
    /// Rebuild step failed to spawn or exited non-zero.
    #[error("build error: {0}")]
    Build(ErrorInfo),
    /// Simulation run failed to spawn or exited non-zero.
    #[error("execution error: {0}")]
    Execution(ErrorInfo),
    /// Expected timing line absent from the program output, or unusable.
    #[error("parse error: {0}")]
    Parse(ErrorInfo),
    /// Deterministic frequency table exhausted by a node count.
    #[error("frequency error: {0}")]
    Frequency(ErrorInfo),
    /// Sweep plan could not be read or decoded.
    #[error("plan error: {0}")]
    Plan(ErrorInfo),
    /// Result table could not be written or read back.
    #[error("table error: {0}")]
    Table(ErrorInfo),
    /// Canonical serialization failure while hashing or persisting reports.
    #[error("hash error: {0}")]
    Hash(ErrorInfo),
}

impl SweepError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SweepError::Build(info)
            | SweepError::Execution(info)
            | SweepError::Parse(info)
            | SweepError::Frequency(info)
            | SweepError::Plan(info)
            | SweepError::Table(info)
            | SweepError::Hash(info) => info,
        }
    }
}
