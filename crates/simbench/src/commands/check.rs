use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use simbench_core::RunParamKind;
use simbench_harness::{frequency_capacity, to_canonical_json_bytes, SweepPlan};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// YAML plan to validate.
    #[arg(long)]
    pub plan: PathBuf,
    /// Emit only JSON without additional context.
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct PlanCheck {
    name: String,
    ok: bool,
    detail: String,
}

#[derive(Debug, Serialize)]
struct PlanReport {
    status: String,
    configuration_points: usize,
    checks: Vec<PlanCheck>,
}

pub fn run(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    let plan = SweepPlan::load(&args.plan)?;
    let report = validate(&plan);
    let rendered = String::from_utf8(to_canonical_json_bytes(&report)?)?;
    if args.quiet {
        println!("{rendered}");
    } else {
        println!("simbench check status: {}", report.status);
        println!("{rendered}");
    }
    if report.status != "ok" {
        return Err("plan validation failed".into());
    }
    Ok(())
}

fn validate(plan: &SweepPlan) -> PlanReport {
    let mut checks = Vec::new();
    let mut points = 0usize;

    checks.push(PlanCheck {
        name: "build-command".to_string(),
        ok: !plan.harness.build_command.is_empty(),
        detail: plan.harness.build_command.join(" "),
    });

    for (name, values) in &plan.compile {
        points += values.len();
        checks.push(PlanCheck {
            name: format!("compile:{name}"),
            ok: !values.is_empty(),
            detail: format!("{} values", values.len()),
        });
    }

    for (name, values) in &plan.run {
        points += values.len();
        let check = match RunParamKind::from_name(name) {
            Some(RunParamKind::Inputs) | Some(RunParamKind::Starts) => {
                let capacity = frequency_capacity() as u64;
                let oversized: Vec<&u64> =
                    values.iter().filter(|value| **value > capacity).collect();
                if oversized.is_empty() {
                    PlanCheck {
                        name: format!("run:{name}"),
                        ok: true,
                        detail: format!("{} values", values.len()),
                    }
                } else {
                    PlanCheck {
                        name: format!("run:{name}"),
                        ok: false,
                        detail: format!(
                            "{} value(s) exceed the frequency table capacity of {capacity}",
                            oversized.len()
                        ),
                    }
                }
            }
            Some(_) => PlanCheck {
                name: format!("run:{name}"),
                ok: !values.is_empty(),
                detail: format!("{} values", values.len()),
            },
            None => PlanCheck {
                name: format!("run:{name}"),
                ok: false,
                detail: "unrecognized parameter name".to_string(),
            },
        };
        checks.push(check);
    }

    let status = if checks.iter().all(|check| check.ok) {
        "ok"
    } else {
        "failed"
    };
    PlanReport {
        status: status.to_string(),
        configuration_points: points,
        checks,
    }
}
