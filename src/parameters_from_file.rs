//! Supports reading the velocity problem from JSON file (optional)

use std::path::Path;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::jacobian::LinearJacobianMode;
use crate::kinematic_error::KinematicError;
use crate::kinematic_traits::MAX_JOINTS;
use crate::parameter_error::ParameterError;
use crate::parameters::dh_kinematics::{joint_count, KinematicChain};

#[derive(Deserialize)]
struct Root {
    pub dh_params: Vec<Value>,
    #[serde(alias = "q_dot")]
    pub velocity: Vec<Value>,
    #[serde(rename = "degType", alias = "deg_type")]
    pub deg_type: Vec<Value>,
    /// Optional; the command line may override it
    #[serde(default)]
    pub jacobian_mode: Option<LinearJacobianMode>,
}

/// Chain, joint rates and optional Jacobian mode as read from the parameter file.
#[derive(Debug, Clone)]
pub struct VelocityProblem {
    pub chain: KinematicChain,
    pub joint_velocities: Vec<f32>,
    pub jacobian_mode: Option<LinearJacobianMode>,
}

impl VelocityProblem {
    /// Read the problem from JSON file. A file like this is supported:
    /// ```json
    /// {
    ///   "dh_params": [0, 0, 1, 0,
    ///                 0, 0, 1, 0],
    ///   "velocity": [1, 1],
    ///   "degType": [1, 1],
    ///   "jacobian_mode": "reference"
    /// }
    /// ```
    /// `dh_params` lists `theta` (degrees), `d`, `a`, `alpha` (degrees) for each joint, base to tip.
    /// `velocity` (or `q_dot`) gives the joint rates, `degType` (or `deg_type`) the joint types,
    /// 1 for revolute and 0 for prismatic. `jacobian_mode` is optional (`reference` or
    /// `by_joint_type`).
    ///
    /// Values may be numbers or strings holding numbers.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading velocity problem");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Same as [`VelocityProblem::from_json_file`] but from the JSON text.
    pub fn from_json_str(contents: &str) -> Result<Self, ParameterError> {
        let root: Root = serde_json::from_str(contents)?;

        // The count is checked before any element is converted
        joint_count(root.dh_params.len(), MAX_JOINTS)?;

        let dh_params = to_reals("dh_params", &root.dh_params)?;
        let deg_type = to_reals("degType", &root.deg_type)?;
        let joint_velocities = to_reals("velocity", &root.velocity)?;

        let chain = KinematicChain::from_flat(&dh_params, &deg_type)?;
        if joint_velocities.len() != chain.dof() {
            return Err(KinematicError::DimensionMismatch {
                field: "velocity",
                expected: chain.dof(),
                found: joint_velocities.len(),
            }.into());
        }

        Ok(VelocityProblem {
            chain,
            joint_velocities,
            jacobian_mode: root.jacobian_mode,
        })
    }
}

/// Converts JSON values into single precision reals. Numbers and numeric strings are
/// accepted, anything else (or a value that does not fit into f32) is reported with its
/// position.
fn to_reals(field: &'static str, values: &[Value]) -> Result<Vec<f32>, KinematicError> {
    values.iter().enumerate().map(|(index, value)| {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed.map(|x| x as f32) {
            Some(x) if x.is_finite() => Ok(x),
            _ => Err(KinematicError::ParameterConversion {
                field,
                index,
                value: value.to_string(),
            }),
        }
    }).collect()
}
