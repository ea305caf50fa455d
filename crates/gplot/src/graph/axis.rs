//! Per-axis sampling options for function graphs.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sampling control for a single axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum AxisOption {
    /// Closed sampling interval `[lower, upper]`.
    Range(f64, f64),
    /// Explicit sample points.
    Values(Vec<f64>),
    /// Spacing between samples.
    Step(f64),
}

/// Axis options of a 2D graph always refer to the x axis.
pub type AxisOption2D = AxisOption;

/// Axis option of a 3D graph, tagged with the axis it applies to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum AxisOption3D {
    X(AxisOption),
    Y(AxisOption),
}

impl AxisOption3D {
    pub fn x(&self) -> Option<&AxisOption> {
        match self {
            AxisOption3D::X(option) => Some(option),
            AxisOption3D::Y(_) => None,
        }
    }

    pub fn y(&self) -> Option<&AxisOption> {
        match self {
            AxisOption3D::Y(option) => Some(option),
            AxisOption3D::X(_) => None,
        }
    }
}
