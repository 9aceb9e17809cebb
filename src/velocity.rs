//! End-effector velocity from the Jacobian blocks and joint rates

use std::fmt;

use nalgebra::{DVector, Matrix3xX};

use crate::jacobian::Jacobian;
use crate::kinematic_error::KinematicError;
use crate::kinematic_traits::{JointVelocities, Vec3};
use crate::utils::{format_vector, round3};

/// Linear and angular velocity of the end-effector, components rounded to 3 decimals,
/// in `[x, y, z]` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityResult {
    pub linear: Vec3,
    pub angular: Vec3,
}

impl fmt::Display for VelocityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Linear velocity: {}", format_vector(self.linear.as_slice()))?;
        write!(f, "Angular velocity: {}", format_vector(self.angular.as_slice()))
    }
}

fn apply(block: &Matrix3xX<f32>, qdot: &JointVelocities) -> Result<Vec3, KinematicError> {
    if qdot.len() != block.ncols() {
        return Err(KinematicError::DimensionMismatch {
            field: "q_dot",
            expected: block.ncols(),
            found: qdot.len(),
        });
    }
    if let Some(index) = qdot.iter().position(|q| !q.is_finite()) {
        return Err(KinematicError::ParameterConversion {
            field: "q_dot",
            index,
            value: qdot[index].to_string(),
        });
    }
    let v: Vec3 = block * DVector::from_column_slice(qdot);
    Ok(v.map(round3))
}

/// `v = Jv · q̇`, rounded to 3 decimals.
pub fn linear_velocity(jv: &Matrix3xX<f32>, qdot: &JointVelocities) -> Result<Vec3, KinematicError> {
    apply(jv, qdot)
}

/// `w = Jw · q̇`, rounded to 3 decimals.
pub fn angular_velocity(jw: &Matrix3xX<f32>, qdot: &JointVelocities) -> Result<Vec3, KinematicError> {
    apply(jw, qdot)
}

/// Both velocities at once.
pub fn evaluate(jacobian: &Jacobian, qdot: &JointVelocities) -> Result<VelocityResult, KinematicError> {
    Ok(VelocityResult {
        linear: linear_velocity(jacobian.linear(), qdot)?,
        angular: angular_velocity(jacobian.angular(), qdot)?,
    })
}
