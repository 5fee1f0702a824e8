use std::fs;
use std::path::Path;

use simbench_core::{CompileAssignment, ErrorInfo, ParamValue, RunParamKind, SweepError};

use crate::command::build_commands;
use crate::executor::execute_point;
use crate::hash::stable_hash_string;
use crate::plan::SweepPlan;
use crate::process::ProcessRunner;
use crate::report::{Diagnostic, DiagnosticKind, SweepReport, TableRecord};
use crate::table::write_table;

/// File name for one parameter's persisted table.
///
/// Leading dashes are stripped so `-DTHREADFACTOR` keeps producing the
/// artifact name `measurements-DTHREADFACTOR.csv`.
pub fn table_file_name(param: &str) -> String {
    format!("measurements-{}.csv", param.trim_start_matches('-'))
}

/// Runs every sweep declared in the plan, one result table per parameter.
///
/// Compile-time parameters are swept first, then run-time parameters, each
/// over its values in declaration order with only that parameter varying.
/// Fatal failures propagate and halt the whole batch with the in-progress
/// parameter's table unwritten; frequency exhaustion aborts only the
/// affected parameter, and unrecognized run-time names are skipped — both
/// are surfaced as diagnostics in the returned report.
pub fn run_sweep(
    plan: &SweepPlan,
    runner: &dyn ProcessRunner,
    out_dir: &Path,
) -> Result<SweepReport, SweepError> {
    fs::create_dir_all(out_dir).map_err(|err| {
        SweepError::Table(
            ErrorInfo::new("out-dir", "failed to create output directory")
                .with_context("path", out_dir.display().to_string())
                .with_hint(err.to_string()),
        )
    })?;

    let mut report = SweepReport {
        plan_hash: stable_hash_string(plan)?,
        tables: Vec::new(),
        diagnostics: Vec::new(),
    };

    for (name, values) in &plan.compile {
        let mut times = Vec::with_capacity(values.len());
        for value in values {
            let assignment = CompileAssignment::new(name.clone(), *value);
            let (rebuild, execution) = build_commands(&plan.harness, &[assignment], &[])?;
            let outcome = execute_point(
                runner,
                plan.harness.artifact_path(),
                &rebuild,
                &execution,
            )?;
            report.diagnostics.extend(outcome.diagnostics);
            times.push(outcome.seconds);
        }
        report.tables.push(persist(out_dir, name, values, &times)?);
    }

    for (name, values) in &plan.run {
        let Some(kind) = RunParamKind::from_name(name) else {
            report.diagnostics.push(
                Diagnostic::new(
                    DiagnosticKind::UnknownParameter,
                    "unrecognized run-time parameter skipped",
                )
                .with_context("parameter", name.clone()),
            );
            continue;
        };
        match sweep_run_param(plan, runner, kind, values, &mut report.diagnostics) {
            Ok(times) => {
                let declared: Vec<ParamValue> =
                    values.iter().map(|value| ParamValue::from(*value)).collect();
                report
                    .tables
                    .push(persist(out_dir, name, &declared, &times)?);
            }
            Err(SweepError::Frequency(info)) => {
                // A table computed from a truncated frequency sequence would
                // be silently biased; drop the whole parameter instead.
                let mut diag =
                    Diagnostic::new(DiagnosticKind::FrequencyExhausted, info.message.clone())
                        .with_context("parameter", name.clone());
                for (key, value) in &info.context {
                    diag = diag.with_context(key.clone(), value.clone());
                }
                report.diagnostics.push(diag);
            }
            Err(other) => return Err(other),
        }
    }

    Ok(report)
}

fn sweep_run_param(
    plan: &SweepPlan,
    runner: &dyn ProcessRunner,
    kind: RunParamKind,
    values: &[u64],
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<f64>, SweepError> {
    let mut times = Vec::with_capacity(values.len());
    for value in values {
        let param = kind.with_value(*value);
        let (rebuild, execution) = build_commands(&plan.harness, &[], &[param])?;
        let outcome = execute_point(
            runner,
            plan.harness.artifact_path(),
            &rebuild,
            &execution,
        )?;
        diagnostics.extend(outcome.diagnostics);
        times.push(outcome.seconds);
    }
    Ok(times)
}

fn persist(
    out_dir: &Path,
    name: &str,
    values: &[ParamValue],
    times: &[f64],
) -> Result<TableRecord, SweepError> {
    let path = out_dir.join(table_file_name(name));
    write_table(&path, values, times)?;
    Ok(TableRecord {
        parameter: name.to_string(),
        path: path.display().to_string(),
        rows: times.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_strip_the_flag_prefix() {
        assert_eq!(
            table_file_name("-DTHREADFACTOR"),
            "measurements-DTHREADFACTOR.csv"
        );
        assert_eq!(table_file_name("ticks"), "measurements-ticks.csv");
    }
}
