use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use simbench_core::{ErrorInfo, SweepError};

use crate::command::CommandSpec;
use crate::parse::total_time_seconds;
use crate::process::{ProcessOutput, ProcessRunner};
use crate::report::{Diagnostic, DiagnosticKind};

const STDERR_CONTEXT_LIMIT: usize = 512;

/// Result of one configuration point: elapsed seconds plus any non-fatal
/// findings gathered along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOutcome {
    /// Duration the simulation reported for this point.
    pub seconds: f64,
    /// Non-fatal findings (artifact guard, stderr chatter).
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs one rebuild + execute cycle and extracts the reported duration.
///
/// The protocol is strictly ordered: clear the stale artifact, rebuild,
/// execute, surface stderr, parse the timing line. Build and execution
/// failures are fatal for the configuration point; the artifact guard and
/// stderr output degrade to diagnostics.
pub fn execute_point(
    runner: &dyn ProcessRunner,
    artifact: &Path,
    rebuild: &CommandSpec,
    execution: &CommandSpec,
) -> Result<PointOutcome, SweepError> {
    let mut diagnostics = Vec::new();
    if let Some(diag) = clear_artifact(artifact) {
        diagnostics.push(diag);
    }

    let build = runner
        .run(rebuild)
        .map_err(|err| SweepError::Build(spawn_info("build-spawn", rebuild, &err)))?;
    if !build.success {
        return Err(SweepError::Build(exit_info("build-exit", rebuild, &build)));
    }

    let run = runner
        .run(execution)
        .map_err(|err| SweepError::Execution(spawn_info("run-spawn", execution, &err)))?;
    if !run.success {
        return Err(SweepError::Execution(exit_info("run-exit", execution, &run)));
    }
    if !run.stderr.is_empty() {
        diagnostics.push(
            Diagnostic::new(DiagnosticKind::StderrOutput, "simulation wrote to stderr")
                .with_context("command", execution.to_string())
                .with_context("stderr", truncated(&run.stderr)),
        );
    }

    let seconds = total_time_seconds(&run.stdout)?;
    Ok(PointOutcome {
        seconds,
        diagnostics,
    })
}

// The precondition is that no stale artifact survives into the rebuild, not
// that removal itself succeeds: a failed removal still leaves the rebuild
// step to produce (and validate) a fresh artifact.
fn clear_artifact(artifact: &Path) -> Option<Diagnostic> {
    match fs::remove_file(artifact) {
        Ok(()) => None,
        Err(err) if err.kind() == ErrorKind::NotFound => None,
        Err(err) => Some(
            Diagnostic::new(
                DiagnosticKind::ArtifactRemoval,
                "could not remove the stale compiled artifact",
            )
            .with_context("path", artifact.display().to_string())
            .with_context("error", err.to_string()),
        ),
    }
}

fn spawn_info(code: &str, spec: &CommandSpec, err: &std::io::Error) -> ErrorInfo {
    ErrorInfo::new(code, "failed to spawn command")
        .with_context("command", spec.to_string())
        .with_hint(err.to_string())
}

fn exit_info(code: &str, spec: &CommandSpec, output: &ProcessOutput) -> ErrorInfo {
    let status = output.status.map_or_else(
        || "terminated by signal".to_string(),
        |status| status.to_string(),
    );
    let mut info = ErrorInfo::new(code, "command exited with a non-zero status")
        .with_context("command", spec.to_string())
        .with_context("status", status);
    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        info = info.with_hint(truncated(stderr));
    }
    info
}

fn truncated(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(STDERR_CONTEXT_LIMIT) {
        Some((offset, _)) => format!("{}...", &trimmed[..offset]),
        None => trimmed.to_string(),
    }
}
