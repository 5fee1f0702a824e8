use simbench_core::{ErrorInfo, SweepError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("command", "make")
        .with_hint("inspect the build log")
}

#[test]
fn build_error_surface() {
    let err = SweepError::Build(sample_info("build-exit", "make exited non-zero"));
    assert_eq!(err.info().code, "build-exit");
    assert!(err.info().context.contains_key("command"));
}

#[test]
fn execution_error_surface() {
    let err = SweepError::Execution(sample_info("run-exit", "simulation crashed"));
    assert_eq!(err.info().code, "run-exit");
}

#[test]
fn parse_error_surface() {
    let err = SweepError::Parse(sample_info("timing-line-missing", "no timing line"));
    assert_eq!(err.info().code, "timing-line-missing");
}

#[test]
fn frequency_error_surface() {
    let err = SweepError::Frequency(sample_info("freq-table-exhausted", "too many nodes"));
    assert_eq!(err.info().hint.as_deref(), Some("inspect the build log"));
}

#[test]
fn display_carries_code_context_and_hint() {
    let err = SweepError::Table(sample_info("table-shape", "column length mismatch"));
    let rendered = err.to_string();
    assert!(rendered.contains("table error"));
    assert!(rendered.contains("table-shape"));
    assert!(rendered.contains("command=make"));
    assert!(rendered.contains("inspect the build log"));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = SweepError::Plan(sample_info("plan-decode", "bad yaml"));
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "Plan");
    assert_eq!(json["detail"]["code"], "plan-decode");
}
