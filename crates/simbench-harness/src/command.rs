use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use simbench_core::{CompileAssignment, ErrorInfo, RunParam, SweepError};

use crate::encode::encode;
use crate::plan::HarnessConfig;

/// One concrete command line: program plus argument vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Program to invoke.
    pub program: String,
    /// Arguments, in invocation order.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Creates a command with no arguments yet.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }
}

impl Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Synthesizes the rebuild and execution command pair for one configuration
/// point.
///
/// The rebuild command is the configured build invocation, augmented with a
/// single `FLAGS_VAR=NAME1=VALUE1 NAME2=VALUE2 ...` argument when
/// compile-time assignments are present. The execution command is the
/// program path followed by every run-time assignment's encoded tokens, in
/// input order. Identical inputs always yield byte-identical commands.
pub fn build_commands(
    config: &HarnessConfig,
    compile: &[CompileAssignment],
    run: &[RunParam],
) -> Result<(CommandSpec, CommandSpec), SweepError> {
    let mut argv = config.build_command.iter();
    let Some(build_program) = argv.next() else {
        return Err(SweepError::Plan(ErrorInfo::new(
            "build-command-empty",
            "the harness build command must name a program",
        )));
    };
    let mut rebuild = CommandSpec::new(build_program);
    rebuild.args.extend(argv.cloned());
    if !compile.is_empty() {
        let pairs: Vec<String> = compile.iter().map(CompileAssignment::to_string).collect();
        rebuild
            .args
            .push(format!("{}={}", config.flags_var, pairs.join(" ")));
    }

    let mut execution = CommandSpec::new(config.program.display().to_string());
    for param in run {
        execution.args.extend(encode(param)?);
    }
    Ok((rebuild, execution))
}

#[cfg(test)]
mod tests {
    use simbench_core::ParamValue;

    use super::*;

    #[test]
    fn bare_build_when_no_compile_assignments() {
        let config = HarnessConfig::default();
        let (rebuild, execution) = build_commands(&config, &[], &[]).expect("build");
        assert_eq!(rebuild.to_string(), "make");
        assert_eq!(execution.to_string(), "./brainsimulation");
    }

    #[test]
    fn compile_assignments_join_into_one_flags_argument() {
        let config = HarnessConfig::default();
        let compile = [
            CompileAssignment::new("-DTHREADFACTOR", ParamValue::Float(0.25)),
            CompileAssignment::new("-DMULTITHREADING", ParamValue::Int(1)),
        ];
        let (rebuild, _) = build_commands(&config, &compile, &[]).expect("build");
        assert_eq!(
            rebuild.args,
            vec!["DFLAGS=-DTHREADFACTOR=0.25 -DMULTITHREADING=1"]
        );
    }

    #[test]
    fn run_tokens_concatenate_in_input_order() {
        let config = HarnessConfig::default();
        let run = [RunParam::Ticks(100), RunParam::GridCells(15000)];
        let (_, execution) = build_commands(&config, &[], &run).expect("build");
        assert_eq!(
            execution.args,
            vec!["--ticks", "100", "-x", "122", "-y", "122"]
        );
    }

    #[test]
    fn identical_inputs_yield_identical_commands() {
        let config = HarnessConfig::default();
        let compile = [CompileAssignment::new("-DTHREADFACTOR", ParamValue::Int(4))];
        let first = build_commands(&config, &compile, &[RunParam::Ticks(50)]).expect("build");
        let second = build_commands(&config, &compile, &[RunParam::Ticks(50)]).expect("build");
        assert_eq!(first, second);
    }

    #[test]
    fn empty_build_command_is_rejected() {
        let mut config = HarnessConfig::default();
        config.build_command.clear();
        let result = build_commands(&config, &[], &[]);
        assert!(matches!(result, Err(SweepError::Plan(_))));
    }
}
