use std::error::Error;

use clap::Args;
use simbench_core::RunParamKind;
use simbench_harness::encode;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Run-time parameter name (gridcells, ticks, observations, inputs, starts).
    #[arg(long)]
    pub param: String,
    /// Swept value to encode.
    #[arg(long)]
    pub value: u64,
}

pub fn run(args: &EncodeArgs) -> Result<(), Box<dyn Error>> {
    let Some(kind) = RunParamKind::from_name(&args.param) else {
        return Err(format!("unrecognized run-time parameter `{}`", args.param).into());
    };
    let tokens = encode(&kind.with_value(args.value))?;
    println!("{}", tokens.join(" "));
    Ok(())
}
