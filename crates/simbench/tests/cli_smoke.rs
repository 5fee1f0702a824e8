use std::fs;
use std::process::Command;

fn simbench() -> Command {
    Command::new(env!("CARGO_BIN_EXE_simbench"))
}

#[test]
fn encode_prints_the_argument_tokens() {
    let output = simbench()
        .args(["encode", "--param", "ticks", "--value", "100"])
        .output()
        .expect("run");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "--ticks 100"
    );
}

#[test]
fn encode_rejects_unknown_parameters() {
    let output = simbench()
        .args(["encode", "--param", "warp", "--value", "1"])
        .output()
        .expect("run");
    assert!(!output.status.success());
}

#[test]
fn check_accepts_a_well_formed_plan() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plan = dir.path().join("plan.yaml");
    fs::write(&plan, "run:\n  ticks: [50, 100]\n").expect("write plan");

    let output = simbench()
        .args(["check", "--plan"])
        .arg(&plan)
        .arg("--quiet")
        .output()
        .expect("run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"status\":\"ok\""));
    assert!(stdout.contains("\"configuration_points\":2"));
}

#[test]
fn check_rejects_unknown_run_parameters() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plan = dir.path().join("plan.yaml");
    fs::write(&plan, "run:\n  warp: [1]\n").expect("write plan");

    let output = simbench()
        .args(["check", "--plan"])
        .arg(&plan)
        .output()
        .expect("run");
    assert!(!output.status.success());
}

#[test]
fn check_flags_node_counts_past_the_frequency_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plan = dir.path().join("plan.yaml");
    fs::write(&plan, "run:\n  inputs: [100]\n").expect("write plan");

    let output = simbench()
        .args(["check", "--plan"])
        .arg(&plan)
        .output()
        .expect("run");
    assert!(!output.status.success());
}

#[cfg(unix)]
#[test]
fn run_sweeps_a_stub_simulation_end_to_end() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let program = dir.path().join("fakesim");
    fs::write(&program, "#!/bin/sh\necho 'Total time = 1.5 seconds'\n").expect("write script");
    fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).expect("chmod");

    let plan = dir.path().join("plan.yaml");
    let artifact = dir.path().join("artifact");
    fs::write(
        &plan,
        format!(
            "harness:\n  build_command: [\"true\"]\n  program: \"{}\"\n  artifact: \"{}\"\nrun:\n  ticks: [50, 100]\n",
            program.display(),
            artifact.display()
        ),
    )
    .expect("write plan");

    let out_dir = dir.path().join("measurements");
    let output = simbench()
        .args(["run", "--plan"])
        .arg(&plan)
        .arg("--out")
        .arg(&out_dir)
        .output()
        .expect("run");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let table = fs::read_to_string(out_dir.join("measurements-ticks.csv")).expect("table");
    assert_eq!(table, "50,1.5\n100,1.5\n");
    assert!(out_dir.join("sweep_report.json").exists());
}
