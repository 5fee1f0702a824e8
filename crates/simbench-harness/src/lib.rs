//! Measurement sweep orchestration for an external simulation executable.
//!
//! The harness drives a pre-built simulation binary through one-dimensional
//! parameter sweeps: each configuration point is a rebuild with one
//! compile-time flag or an invocation with one encoded run-time argument,
//! followed by extraction of the binary's self-reported elapsed time. One
//! comma-delimited result table is persisted per swept parameter.

mod command;
mod encode;
mod executor;
mod hash;
mod parse;
mod plan;
mod process;
mod report;
mod sweep;
mod table;

pub use command::{build_commands, CommandSpec};
pub use encode::{encode, frequency_capacity};
pub use executor::{execute_point, PointOutcome};
pub use hash::{stable_hash_string, to_canonical_json_bytes};
pub use parse::total_time_seconds;
pub use plan::{HarnessConfig, SweepPlan};
pub use process::{ProcessOutput, ProcessRunner, SystemRunner};
pub use report::{Diagnostic, DiagnosticKind, SweepReport, TableRecord};
pub use sweep::{run_sweep, table_file_name};
pub use table::{read_table, write_table};
