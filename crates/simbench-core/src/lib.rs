#![deny(missing_docs)]
#![doc = "Core error and parameter vocabulary for the simbench measurement harness."]

pub mod errors;
mod types;

pub use errors::{ErrorInfo, SweepError};
pub use types::{CompileAssignment, NodeKind, ParamValue, RunParam, RunParamKind};
