extern crate nalgebra as na;
use na::{Matrix3xX, Matrix6xX};
use tracing::debug;
use crate::frames::FrameSet;
use crate::kinematic_error::KinematicError;
use crate::kinematic_traits::{JointVelocities, Vec3};
use crate::parameters::dh_kinematics::JointType;
use crate::velocity::{self, VelocityResult};

/// How the linear block of the Jacobian treats prismatic joints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "allow_filesystem", derive(serde::Deserialize, clap::ValueEnum))]
#[cfg_attr(feature = "allow_filesystem", serde(rename_all = "snake_case"))]
pub enum LinearJacobianMode {
    /// `zn[i] × (on[N] - on[i])` for every joint regardless of its type. This reproduces the
    /// established results bit for bit, but a prismatic joint then contributes as if it were
    /// revolute.
    #[default]
    Reference,

    /// Revolute joints as above, prismatic joints contribute `zn[i]` (translation along
    /// the joint axis).
    ByJointType,
}

/// Struct representing the geometric Jacobian, split into the linear and angular blocks
pub struct Jacobian {
    /// 3xN block mapping joint rates to the linear velocity of the end-effector.
    /// Each column corresponds to a joint.
    linear: Matrix3xX<f32>,

    /// 3xN block mapping joint rates to the angular velocity of the end-effector.
    angular: Matrix3xX<f32>,
}

impl Jacobian {
    /// Assembles the Jacobian from extracted frames and joint types.
    ///
    /// # Arguments
    ///
    /// * `joint_types` - Type of each joint, base to tip
    /// * `frames` - Axes and origins, as produced by `FrameSet::extract`
    /// * `mode` - Treatment of prismatic joints in the linear block
    ///
    /// # Returns
    ///
    /// The Jacobian, or `DimensionMismatch` if the joint types do not match the frames.
    pub fn new(joint_types: &[JointType], frames: &FrameSet, mode: LinearJacobianMode) -> Result<Self, KinematicError> {
        if joint_types.len() != frames.dof() {
            return Err(KinematicError::DimensionMismatch {
                field: "degType",
                expected: frames.dof(),
                found: joint_types.len(),
            });
        }
        let linear = match mode {
            LinearJacobianMode::Reference => linear_jacobian(&frames.zn, &frames.on)?,
            LinearJacobianMode::ByJointType => linear_jacobian_by_joint_type(&frames.zn, &frames.on, joint_types)?,
        };
        let angular = angular_jacobian(joint_types, &frames.zn)?;
        debug!(columns = linear.ncols(), ?mode, "assembled jacobian");
        Ok(Self { linear, angular })
    }

    pub fn linear(&self) -> &Matrix3xX<f32> {
        &self.linear
    }

    pub fn angular(&self) -> &Matrix3xX<f32> {
        &self.angular
    }

    /// Number of columns (joints).
    pub fn dof(&self) -> usize {
        self.linear.ncols()
    }

    /// Both blocks stacked into one 6xN matrix, linear rows first.
    pub fn matrix(&self) -> Matrix6xX<f32> {
        let mut m = Matrix6xX::zeros(self.dof());
        m.fixed_rows_mut::<3>(0).copy_from(&self.linear);
        m.fixed_rows_mut::<3>(3).copy_from(&self.angular);
        m
    }

    /// Computes the end-effector velocity produced by the given joint rates
    ///
    /// # Returns
    ///
    /// Linear and angular velocity rounded to 3 decimals, or `DimensionMismatch` if the
    /// number of rates differs from the number of joints.
    pub fn velocities(&self, qdot: &JointVelocities) -> Result<VelocityResult, KinematicError> {
        velocity::evaluate(self, qdot)
    }
}

/// Checks that there is one origin more than axes and at least one axis.
fn check_frames(zn: &[Vec3], on: &[Vec3]) -> Result<(), KinematicError> {
    if zn.is_empty() {
        return Err(KinematicError::DimensionMismatch { field: "zn", expected: 1, found: 0 });
    }
    if on.len() != zn.len() + 1 {
        return Err(KinematicError::DimensionMismatch {
            field: "on",
            expected: zn.len() + 1,
            found: on.len(),
        });
    }
    Ok(())
}

fn check_joint_types(joint_types: &[JointType], zn: &[Vec3]) -> Result<(), KinematicError> {
    if joint_types.len() != zn.len() {
        return Err(KinematicError::DimensionMismatch {
            field: "degType",
            expected: zn.len(),
            found: joint_types.len(),
        });
    }
    Ok(())
}

/// Linear block, column i being `zn[i] × (on[N] - on[i])` for every joint.
///
/// `on` must hold one origin more than `zn` (the end-effector last), otherwise
/// `DimensionMismatch` is returned.
pub fn linear_jacobian(zn: &[Vec3], on: &[Vec3]) -> Result<Matrix3xX<f32>, KinematicError> {
    check_frames(zn, on)?;
    let end = on[zn.len()];
    Ok(Matrix3xX::from_columns(&zn.iter().zip(on)
        .map(|(z, o)| z.cross(&(end - o)))
        .collect::<Vec<_>>()))
}

/// Linear block where prismatic columns are the joint axis itself.
pub fn linear_jacobian_by_joint_type(zn: &[Vec3], on: &[Vec3], joint_types: &[JointType])
                                     -> Result<Matrix3xX<f32>, KinematicError> {
    check_frames(zn, on)?;
    check_joint_types(joint_types, zn)?;
    let end = on[zn.len()];
    Ok(Matrix3xX::from_columns(&zn.iter().zip(on).zip(joint_types)
        .map(|((z, o), t)| match t {
            JointType::Revolute => z.cross(&(end - o)),
            JointType::Prismatic => *z,
        })
        .collect::<Vec<_>>()))
}

/// Angular block, column i being the joint axis weighted by the joint flag
/// (prismatic joints impart no angular velocity).
pub fn angular_jacobian(joint_types: &[JointType], zn: &[Vec3]) -> Result<Matrix3xX<f32>, KinematicError> {
    if zn.is_empty() {
        return Err(KinematicError::DimensionMismatch { field: "zn", expected: 1, found: 0 });
    }
    check_joint_types(joint_types, zn)?;
    Ok(Matrix3xX::from_columns(&joint_types.iter().zip(zn)
        .map(|(t, z)| z * t.flag())
        .collect::<Vec<_>>()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;
    use crate::parameters::dh_kinematics::{DhParameter, KinematicChain};
    use crate::transform::build_chain;

    fn jacobian_of(chain: &KinematicChain, mode: LinearJacobianMode) -> Jacobian {
        let frames = FrameSet::extract(&build_chain(chain.params()).unwrap());
        Jacobian::new(chain.joint_types(), &frames, mode).unwrap()
    }

    #[test]
    fn test_single_revolute_joint() {
        let chain = KinematicChain::revolute(vec![DhParameter::new(0.0, 0.0, 1.0, 0.0)]).unwrap();
        let jacobian = jacobian_of(&chain, LinearJacobianMode::Reference);

        // Joint one meter away from the tip: rotating it moves the tip along y
        assert_eq!(jacobian.linear().column(0).into_owned(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(jacobian.angular().column(0).into_owned(), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_planar_2r() {
        let jacobian = jacobian_of(&KinematicChain::planar_2r(), LinearJacobianMode::Reference);
        let expected_linear = Matrix3xX::from_columns(&[
            Vector3::new(0.0, 2.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ]);
        let expected_angular = Matrix3xX::from_columns(&[Vector3::z(), Vector3::z()]);
        assert_abs_diff_eq!(jacobian.linear(), &expected_linear, epsilon = 1e-6);
        assert_abs_diff_eq!(jacobian.angular(), &expected_angular, epsilon = 1e-6);
    }

    #[test]
    fn test_stacked_matrix() {
        let jacobian = jacobian_of(&KinematicChain::planar_2r(), LinearJacobianMode::Reference);
        let m: Matrix6xX<f32> = jacobian.matrix();
        assert_eq!(m.ncols(), 2);
        assert_eq!(m[(1, 0)], 2.0);
        assert_eq!(m[(1, 1)], 1.0);
        assert_eq!(m[(5, 0)], 1.0);
        assert_eq!(m[(5, 1)], 1.0);
        assert_eq!(m.fixed_rows::<3>(0).into_owned(), *jacobian.linear());
    }

    #[test]
    fn test_prismatic_columns_by_mode() {
        let chain = KinematicChain::scara();

        let reference = jacobian_of(&chain, LinearJacobianMode::Reference);
        assert_abs_diff_eq!(reference.linear().column(0).into_owned(), Vector3::new(0.0, 0.55, 0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(reference.linear().column(1).into_owned(), Vector3::new(0.0, 0.225, 0.0), epsilon = 1e-6);
        // Quill axis passes through the tip, the cross product vanishes
        assert_abs_diff_eq!(reference.linear().column(2).into_owned(), Vector3::zeros(), epsilon = 1e-6);

        let by_type = jacobian_of(&chain, LinearJacobianMode::ByJointType);
        assert_abs_diff_eq!(by_type.linear().column(2).into_owned(), Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
        // Revolute columns are the same in both modes
        for i in [0, 1, 3] {
            assert_eq!(by_type.linear().column(i), reference.linear().column(i));
        }
        assert_eq!(by_type.angular(), reference.angular());
    }

    #[test]
    fn test_prismatic_joint_has_no_angular_column() {
        let jacobian = jacobian_of(&KinematicChain::scara(), LinearJacobianMode::Reference);
        assert_eq!(jacobian.angular().column(2).into_owned(), Vector3::zeros());
        assert_eq!(jacobian.angular().column(3).into_owned(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_all_prismatic_angular_is_zero() {
        let chain = KinematicChain::from_flat(
            &[0.0, 0.3, 0.0, -90.0, -90.0, 0.2, 0.0, -90.0, 0.0, 0.1, 0.0, 0.0],
            &[0.0, 0.0, 0.0]).unwrap();
        for mode in [LinearJacobianMode::Reference, LinearJacobianMode::ByJointType] {
            let jacobian = jacobian_of(&chain, mode);
            assert!(jacobian.angular().iter().all(|x| *x == 0.0));
        }
    }

    #[test]
    fn test_joint_type_count_checked() {
        let chain = KinematicChain::planar_2r();
        let frames = FrameSet::extract(&build_chain(chain.params()).unwrap());
        let result = Jacobian::new(&[JointType::Revolute], &frames, LinearJacobianMode::Reference);
        assert!(matches!(result, Err(KinematicError::DimensionMismatch { expected: 2, found: 1, .. })));
    }

    #[test]
    fn test_block_functions_reject_mismatched_lengths() {
        let z = Vector3::z();
        let x = Vector3::x();

        let result = angular_jacobian(&[JointType::Revolute], &[z, z, z]);
        assert_eq!(result, Err(KinematicError::DimensionMismatch { field: "degType", expected: 3, found: 1 }));

        let result = linear_jacobian(&[z, z, z], &[Vector3::zeros(), x]);
        assert_eq!(result, Err(KinematicError::DimensionMismatch { field: "on", expected: 4, found: 2 }));

        let result = linear_jacobian_by_joint_type(&[z, z], &[Vector3::zeros(), x, x * 2.0],
                                                   &[JointType::Prismatic]);
        assert_eq!(result, Err(KinematicError::DimensionMismatch { field: "degType", expected: 2, found: 1 }));
    }

    #[test]
    fn test_block_functions_reject_empty_input() {
        assert!(matches!(linear_jacobian(&[], &[]),
            Err(KinematicError::DimensionMismatch { field: "zn", .. })));
        assert!(matches!(linear_jacobian_by_joint_type(&[], &[Vector3::zeros()], &[]),
            Err(KinematicError::DimensionMismatch { field: "zn", .. })));
        assert!(matches!(angular_jacobian(&[], &[]),
            Err(KinematicError::DimensionMismatch { field: "zn", .. })));
    }

    #[test]
    fn test_block_functions_on_matching_input() {
        let z = Vector3::z();
        let on = [Vector3::zeros(), Vector3::x(), Vector3::x() * 2.0];
        let linear = linear_jacobian(&[z, z], &on).unwrap();
        assert_eq!(linear.ncols(), 2);
        assert_eq!(linear.column(0).into_owned(), Vector3::new(0.0, 2.0, 0.0));
        let angular = angular_jacobian(&[JointType::Revolute, JointType::Prismatic], &[z, z]).unwrap();
        assert_eq!(angular.column(1).into_owned(), Vector3::zeros());
    }
}
