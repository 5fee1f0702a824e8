//! Parameter vocabulary shared by the sweep harness and the CLI.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A declared parameter value: a small integer count or a floating point factor.
///
/// Integers keep their integral rendering when stringified into command
/// arguments and result tables (`1`, never `1.0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Integer-valued setting.
    Int(i64),
    /// Floating point setting.
    Float(f64),
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(value) => write!(f, "{value}"),
            ParamValue::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Int(value as i64)
    }
}

/// Kinds of logical node a run-time count parameter expands into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Nodes whose activity is sampled during the run.
    Observation,
    /// Nodes injecting a periodic signal at a fixed frequency.
    Input,
    /// Nodes seeded with an initial level at a fixed frequency.
    Start,
}

/// Closed set of run-time parameters the simulation binary understands.
///
/// Declared parameter names are resolved into this enum once, at the plan
/// boundary; everything downstream dispatches by exhaustive matching, so an
/// unrecognized parameter cannot reach the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunParamKind {
    /// Total cell count for a square grid.
    GridCells,
    /// Number of simulation ticks.
    Ticks,
    /// Count of observation nodes.
    Observations,
    /// Count of signal input nodes.
    Inputs,
    /// Count of start level nodes.
    Starts,
}

impl RunParamKind {
    /// Resolves a declared parameter name; `None` when unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gridcells" => Some(RunParamKind::GridCells),
            "ticks" => Some(RunParamKind::Ticks),
            "observations" => Some(RunParamKind::Observations),
            "inputs" => Some(RunParamKind::Inputs),
            "starts" => Some(RunParamKind::Starts),
            _ => None,
        }
    }

    /// Canonical plan-file name for the kind.
    pub fn name(&self) -> &'static str {
        match self {
            RunParamKind::GridCells => "gridcells",
            RunParamKind::Ticks => "ticks",
            RunParamKind::Observations => "observations",
            RunParamKind::Inputs => "inputs",
            RunParamKind::Starts => "starts",
        }
    }

    /// Binds the kind to one concrete swept value.
    pub fn with_value(&self, value: u64) -> RunParam {
        match self {
            RunParamKind::GridCells => RunParam::GridCells(value),
            RunParamKind::Ticks => RunParam::Ticks(value),
            RunParamKind::Observations => RunParam::Nodes {
                kind: NodeKind::Observation,
                count: value,
            },
            RunParamKind::Inputs => RunParam::Nodes {
                kind: NodeKind::Input,
                count: value,
            },
            RunParamKind::Starts => RunParam::Nodes {
                kind: NodeKind::Start,
                count: value,
            },
        }
    }
}

/// One concrete run-time assignment for a configuration point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunParam {
    /// Total cell count, encoded as a pair of floor-sqrt side lengths.
    GridCells(u64),
    /// Tick count, passed through unchanged.
    Ticks(u64),
    /// Count of logical nodes of one kind, expanded per index.
    Nodes {
        /// Which node population the count describes.
        kind: NodeKind,
        /// How many nodes to derive.
        count: u64,
    },
}

impl RunParam {
    /// Kind discriminant for this assignment.
    pub fn kind(&self) -> RunParamKind {
        match self {
            RunParam::GridCells(_) => RunParamKind::GridCells,
            RunParam::Ticks(_) => RunParamKind::Ticks,
            RunParam::Nodes {
                kind: NodeKind::Observation,
                ..
            } => RunParamKind::Observations,
            RunParam::Nodes {
                kind: NodeKind::Input,
                ..
            } => RunParamKind::Inputs,
            RunParam::Nodes {
                kind: NodeKind::Start,
                ..
            } => RunParamKind::Starts,
        }
    }

    /// The raw swept value behind the assignment.
    pub fn value(&self) -> u64 {
        match self {
            RunParam::GridCells(value) | RunParam::Ticks(value) => *value,
            RunParam::Nodes { count, .. } => *count,
        }
    }
}

/// One compile-time `NAME=VALUE` assignment handed to the build system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileAssignment {
    /// Flag name, carrying the build system prefix (e.g. `-DTHREADFACTOR`).
    pub name: String,
    /// Assigned value, stringified into the flags argument.
    pub value: ParamValue,
}

impl CompileAssignment {
    /// Creates a new assignment.
    pub fn new(name: impl Into<String>, value: ParamValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Display for CompileAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
