//! Homogeneous transforms of the chain, built from DH parameters.
//!
//! Every entry of a per-joint transform is rounded to 3 decimals right after it is computed.
//! The rounded matrices are then multiplied left to right (base to tip) into the chain
//! transform, so the order of joints matters.

use nalgebra::Matrix3;
use tracing::debug;

use crate::kinematic_error::KinematicError;
use crate::kinematic_traits::{Transform, Vec3};
use crate::parameters::dh_kinematics::DhParameter;
use crate::utils::round3;

/// Per-joint transforms together with their product.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformChain {
    /// Transform of each joint frame relative to the previous one, base to tip.
    pub joints: Vec<Transform>,

    /// Product of all joint transforms: pose of the end-effector frame in the base frame.
    pub chain: Transform,
}

impl TransformChain {
    /// Number of joints in the chain.
    pub fn dof(&self) -> usize {
        self.joints.len()
    }
}

fn to_radians(deg: f32) -> f32 {
    (f64::from(deg) * std::f64::consts::PI / 180.0) as f32
}

/// Builds the standard DH transform for a single joint, each entry rounded to 3 decimals.
///
/// ```
/// use rs_dh_velocity::parameters::dh_kinematics::DhParameter;
/// use rs_dh_velocity::transform::dh_transform;
///
/// let t = dh_transform(&DhParameter::new(30.0, 0.0, 1.0, 0.0));
/// assert_eq!(t[(0, 0)], 0.866);
/// assert_eq!(t[(1, 3)], 0.5);
/// ```
pub fn dh_transform(p: &DhParameter) -> Transform {
    let theta = to_radians(p.theta_deg);
    let alpha = to_radians(p.alpha_deg);
    let (st, ct) = theta.sin_cos();
    let (sa, ca) = alpha.sin_cos();

    Transform::new(
        ct, -ca * st, sa * st, p.a * ct,
        st, ca * ct, -sa * ct, p.a * st,
        0.0, sa, ca, p.d,
        0.0, 0.0, 0.0, 1.0,
    ).map(round3)
}

/// Builds per-joint transforms and the chain transform T1·T2·…·TN.
pub fn build_chain(params: &[DhParameter]) -> Result<TransformChain, KinematicError> {
    if params.is_empty() {
        return Err(KinematicError::ParameterCount("at least one joint is required".into()));
    }
    let joints: Vec<Transform> = params.iter().map(dh_transform).collect();
    let chain = joints.iter().fold(Transform::identity(), |acc, t| acc * t);

    debug!(joints = joints.len(), orthonormality_error = orthonormality_error(&chain),
        "built transform chain");
    Ok(TransformChain { joints, chain })
}

/// Upper-left 3x3 rotation block.
pub fn rotation_block(t: &Transform) -> Matrix3<f32> {
    t.fixed_view::<3, 3>(0, 0).into_owned()
}

/// Translation column, first three rows.
pub fn translation(t: &Transform) -> Vec3 {
    t.fixed_view::<3, 1>(0, 3).into_owned()
}

/// Third column of the rotation block, the z axis of the frame.
pub fn z_axis(t: &Transform) -> Vec3 {
    t.fixed_view::<3, 1>(0, 2).into_owned()
}

/// Largest absolute deviation of `R·Rᵗ` from identity.
pub fn orthonormality_error(t: &Transform) -> f32 {
    let r = rotation_block(t);
    (r * r.transpose() - Matrix3::identity()).amax()
}

/// True if the rotation block is orthonormal, right-handed and the last row is `[0, 0, 0, 1]`,
/// all within the given tolerance.
pub fn is_valid_transform(t: &Transform, tolerance: f32) -> bool {
    let bottom_ok = t.fixed_view::<1, 4>(3, 0).iter()
        .zip([0.0f32, 0.0, 0.0, 1.0])
        .all(|(a, b)| (*a - b).abs() <= tolerance);
    let r = rotation_block(t);
    bottom_ok
        && orthonormality_error(t) <= tolerance
        && (r.determinant() - 1.0).abs() <= tolerance
        && translation(t).iter().all(|x| x.is_finite())
}
