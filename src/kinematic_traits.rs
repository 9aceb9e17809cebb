extern crate nalgebra as na;

use na::{Matrix4, Vector3};
use crate::kinematic_error::KinematicError;
use crate::velocity::VelocityResult;

/// Homogeneous transform between two link frames. Single precision is used through the whole
/// pipeline so that the 3-decimal rounding behaves the same on every run.
/// ```
/// extern crate nalgebra as na;
/// use na::Matrix4;
///
/// type Transform = Matrix4<f32>;
///
/// // Pure translation by 1 along x
/// let t = Transform::new(
///     1.0, 0.0, 0.0, 1.0,
///     0.0, 1.0, 0.0, 0.0,
///     0.0, 0.0, 1.0, 0.0,
///     0.0, 0.0, 0.0, 1.0,
/// );
/// assert_eq!(t[(0, 3)], 1.0);
/// ```
pub type Transform = Matrix4<f32>;

/// Axis or position vector expressed in the base frame.
pub type Vec3 = Vector3<f32>;

/// Joint rates, rad/s for revolute joints and length units per second for prismatic.
pub type JointVelocities = [f32];

/// Upper bound on the joint count accepted by default, checked before anything is allocated.
pub const MAX_JOINTS: usize = 64;

/// Anything that maps joint rates of a serial chain into the end-effector velocity.
pub trait VelocityKinematics {
    /// Number of joints (columns of the Jacobian).
    fn dof(&self) -> usize;

    /// Linear and angular velocity of the end-effector for the given joint rates,
    /// listed base to tip.
    fn velocity(&self, qdot: &JointVelocities) -> Result<VelocityResult, KinematicError>;
}
