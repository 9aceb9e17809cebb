//! Joint axes and frame origins expressed in the base frame.
//!
//! Frame 0 coincides with the base, so its axis and origin are fixed. Frame `i` for
//! `i = 1..N-1` is taken from the running product of the first `i` joint transforms, and the
//! origin of the last frame `N` (the end-effector) comes from the chain transform.

use tracing::debug;

use crate::kinematic_traits::{Transform, Vec3};
use crate::transform::{translation, z_axis, TransformChain};
use crate::utils::round3;

/// Axes `zn` (N entries) and origins `on` (N + 1 entries), all rounded to 3 decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSet {
    /// Rotation axis of joint i (z axis of frame i) in the base frame.
    pub zn: Vec<Vec3>,

    /// Origin of frame i in the base frame, from the base (0) to the end-effector (N).
    pub on: Vec<Vec3>,
}

impl FrameSet {
    pub fn extract(transforms: &TransformChain) -> Self {
        let frames = FrameSet {
            zn: z_axes(&transforms.joints),
            on: origins(&transforms.chain, &transforms.joints),
        };
        debug!(axes = frames.zn.len(), origins = frames.on.len(), "extracted frames");
        frames
    }

    /// Number of joints the frames were extracted for.
    pub fn dof(&self) -> usize {
        self.zn.len()
    }

    /// End-effector origin.
    pub fn end_effector(&self) -> &Vec3 {
        &self.on[self.on.len() - 1]
    }
}

fn rounded(v: Vec3) -> Vec3 {
    v.map(round3)
}

/// Running products T1, T1·T2, … over all joints but the last.
fn intermediate_frames(joints: &[Transform]) -> impl Iterator<Item = Transform> + '_ {
    let intermediate = joints.len().saturating_sub(1);
    joints[..intermediate].iter().scan(Transform::identity(), |cumulative, t| {
        *cumulative *= t;
        Some(*cumulative)
    })
}

/// Rotation axes of all joints: `[0, 0, 1]` for the first one, then the z column of each
/// intermediate frame.
pub fn z_axes(joints: &[Transform]) -> Vec<Vec3> {
    let mut zn = Vec::with_capacity(joints.len());
    zn.push(Vec3::z());
    zn.extend(intermediate_frames(joints).map(|t| rounded(z_axis(&t))));
    zn
}

/// Frame origins: base origin, the translation of each intermediate frame, and the
/// end-effector position from the chain transform.
pub fn origins(chain: &Transform, joints: &[Transform]) -> Vec<Vec3> {
    let mut on = Vec::with_capacity(joints.len() + 1);
    on.push(Vec3::zeros());
    on.extend(intermediate_frames(joints).map(|t| rounded(translation(&t))));
    on.push(rounded(translation(chain)));
    on
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::parameters::dh_kinematics::{DhParameter, KinematicChain};
    use crate::transform::build_chain;

    fn frames_of(chain: &KinematicChain) -> FrameSet {
        FrameSet::extract(&build_chain(chain.params()).unwrap())
    }

    #[test]
    fn test_single_joint() {
        let chain = KinematicChain::revolute(vec![DhParameter::new(0.0, 0.0, 1.0, 0.0)]).unwrap();
        let frames = frames_of(&chain);
        assert_eq!(frames.zn, vec![Vec3::new(0.0, 0.0, 1.0)]);
        assert_eq!(frames.on, vec![Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_frame_counts() {
        for chain in [
            KinematicChain::planar_2r(),
            KinematicChain::planar_3r(),
            KinematicChain::scara(),
            KinematicChain::stanford_arm(),
            KinematicChain::puma560(),
        ] {
            let frames = frames_of(&chain);
            assert_eq!(frames.zn.len(), chain.dof());
            assert_eq!(frames.on.len(), chain.dof() + 1);
            assert_eq!(frames.dof(), chain.dof());
        }
    }

    #[test]
    fn test_scara_frames() {
        let frames = frames_of(&KinematicChain::scara());
        let z = Vec3::new(0.0, 0.0, 1.0);
        let expected_zn = [z, z, -z, -z];
        for (actual, expected) in frames.zn.iter().zip(expected_zn.iter()) {
            assert_abs_diff_eq!(actual, expected, epsilon = 1e-6);
        }
        let expected_on = [
            Vec3::zeros(),
            Vec3::new(0.325, 0.0, 0.387),
            Vec3::new(0.55, 0.0, 0.387),
            Vec3::new(0.55, 0.0, 0.287),
            Vec3::new(0.55, 0.0, 0.287),
        ];
        for (actual, expected) in frames.on.iter().zip(expected_on.iter()) {
            assert_abs_diff_eq!(actual, expected, epsilon = 1e-6);
        }
        assert_abs_diff_eq!(frames.end_effector(), &expected_on[4], epsilon = 1e-6);
    }

    #[test]
    fn test_rotated_base_joint_moves_later_frames() {
        // First joint turned by 90°, so the second frame origin lies on y
        let chain = KinematicChain::planar_2r().at_positions(&[90.0, 0.0]).unwrap();
        let frames = frames_of(&chain);
        assert_abs_diff_eq!(frames.on[1], Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(frames.on[2], Vec3::new(0.0, 2.0, 0.0), epsilon = 1e-6);
        assert_eq!(frames.zn[1], Vec3::z());
    }

    #[test]
    fn test_outputs_rounded() {
        let chain = KinematicChain::planar_2r().at_positions(&[30.0, 30.0]).unwrap();
        let frames = frames_of(&chain);
        for v in frames.on.iter().chain(frames.zn.iter()) {
            for x in v.iter() {
                assert_eq!(*x, round3(*x));
            }
        }
    }
}
