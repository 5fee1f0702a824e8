use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Families of non-fatal conditions surfaced to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A declared run-time parameter name no kind resolves to.
    UnknownParameter,
    /// A node count outran the frequency table; the parameter was aborted.
    FrequencyExhausted,
    /// The stale-artifact guard could not remove the compiled artifact.
    ArtifactRemoval,
    /// The simulation wrote to stderr; its result was still accepted.
    StderrOutput,
}

impl DiagnosticKind {
    /// Stable snake_case label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::UnknownParameter => "unknown_parameter",
            DiagnosticKind::FrequencyExhausted => "frequency_exhausted",
            DiagnosticKind::ArtifactRemoval => "artifact_removal",
            DiagnosticKind::StderrOutput => "stderr_output",
        }
    }
}

/// Non-fatal condition recorded in the sweep report and echoed by the CLI;
/// never silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Which family of condition occurred.
    pub kind: DiagnosticKind,
    /// Human readable description.
    pub message: String,
    /// Contextual key value pairs (parameter names, paths, counts).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// Adds a context entry.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " [{}]", pairs.join(", "))?;
        }
        Ok(())
    }
}

/// Summary of one persisted result table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    /// Declared name of the swept parameter.
    pub parameter: String,
    /// Path of the written artifact.
    pub path: String,
    /// Number of (value, measurement) rows.
    pub rows: usize,
}

/// Aggregate outcome of a full sweep batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Stable hash of the executed plan, for provenance.
    pub plan_hash: String,
    /// One record per completed parameter sweep, in execution order.
    pub tables: Vec<TableRecord>,
    /// Non-fatal findings accumulated across the batch.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}
