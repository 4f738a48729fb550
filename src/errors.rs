//! Construction and playback errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the possible issues we might encounter while building or replaying a construction
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstructionError {
    /// (InvalidRadius) A radius is zero, negative, or non-finite
    InvalidRadius(Real),
    /// (InvalidAngle) The base angle is zero/negative or exceeds the total sweep
    InvalidAngle { base: Real, total: Real },
    /// (InvalidRingStep) Rings are requested but the ring spacing is degenerate
    InvalidRingStep(Real),
    /// (StepOutOfRange) A step index points past the end of the plan
    StepOutOfRange { index: usize, len: usize },
    /// (EmptyPlan) A replay was requested on a plan with no steps
    EmptyPlan,
    /// (InvalidTransition) A playback action is not valid in the current state
    InvalidTransition { from: &'static str, action: &'static str },
}

impl Display for ConstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstructionError::InvalidRadius(radius) => {
                write!(f, "(InvalidRadius) A radius must be positive and finite, got: {}", radius)
            },
            ConstructionError::InvalidAngle { base, total } => {
                write!(f, "(InvalidAngle) Base angle {}° must be positive and no larger than the total sweep {}°", base, total)
            },
            ConstructionError::InvalidRingStep(step) => {
                write!(f, "(InvalidRingStep) Ring spacing must be positive when rings are requested, got: {}", step)
            },
            ConstructionError::StepOutOfRange { index, len } => {
                write!(f, "(StepOutOfRange) Step index {} is out of range (plan has {} steps)", index, len)
            },
            ConstructionError::EmptyPlan => {
                write!(f, "(EmptyPlan) The construction plan has no steps")
            },
            ConstructionError::InvalidTransition { from, action } => {
                write!(f, "(InvalidTransition) Cannot {} while {}", action, from)
            },
        }
    }
}
