use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use simbench_harness::{run_sweep, to_canonical_json_bytes, SweepPlan, SystemRunner};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// YAML plan declaring the harness settings and parameter grids.
    #[arg(long)]
    pub plan: PathBuf,
    /// Output directory receiving the result tables.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let plan = SweepPlan::load(&args.plan)?;
    let report = run_sweep(&plan, &SystemRunner, &args.out)?;

    for diagnostic in &report.diagnostics {
        eprintln!("warning: {diagnostic}");
    }
    for table in &report.tables {
        println!("wrote {} ({} rows)", table.path, table.rows);
    }

    let bytes = to_canonical_json_bytes(&report)?;
    fs::write(args.out.join("sweep_report.json"), bytes)?;
    println!(
        "sweep complete: {} tables, plan hash {}",
        report.tables.len(),
        report.plan_hash
    );
    Ok(())
}
