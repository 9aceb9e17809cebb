//! Runs the whole pipeline: transforms, frames, Jacobian and velocity.
//!
//! The computation is a pure function of the chain, the joint rates and the configuration.
//! Nothing is cached between calls, so independent configurations may be evaluated in
//! parallel, see [`evaluate_batch`].

use rayon::prelude::*;
use tracing::debug;

use crate::frames::FrameSet;
use crate::jacobian::{Jacobian, LinearJacobianMode};
use crate::kinematic_error::KinematicError;
use crate::kinematic_traits::{JointVelocities, VelocityKinematics, MAX_JOINTS};
use crate::parameters::dh_kinematics::KinematicChain;
use crate::transform::{build_chain, TransformChain};
use crate::velocity::VelocityResult;

/// Settings of the velocity analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Treatment of prismatic joints in the linear Jacobian.
    pub mode: LinearJacobianMode,

    /// Chains with more joints are rejected before any computation.
    pub max_joints: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            mode: LinearJacobianMode::default(),
            max_joints: MAX_JOINTS,
        }
    }
}

/// Every intermediate of one evaluation, mostly for diagnostics.
pub struct Analysis {
    pub transforms: TransformChain,
    pub frames: FrameSet,
    pub jacobian: Jacobian,
    pub velocity: VelocityResult,
}

/// Velocity kinematics of one manipulator.
#[derive(Debug, Clone)]
pub struct VelocityAnalysis {
    pub chain: KinematicChain,
    pub config: AnalysisConfig,
}

impl VelocityAnalysis {
    /// Creates the analysis, rejecting chains longer than `config.max_joints`.
    pub fn new(chain: KinematicChain, config: AnalysisConfig) -> Result<Self, KinematicError> {
        if chain.dof() > config.max_joints {
            return Err(KinematicError::ParameterCount(format!(
                "{} joints given, at most {} allowed", chain.dof(), config.max_joints
            )));
        }
        Ok(VelocityAnalysis { chain, config })
    }

    /// Runs the pipeline and keeps all intermediate results.
    pub fn analyze(&self, qdot: &JointVelocities) -> Result<Analysis, KinematicError> {
        // Checked once at entry so that nothing is computed for mismatching input
        if qdot.len() != self.chain.dof() {
            return Err(KinematicError::DimensionMismatch {
                field: "q_dot",
                expected: self.chain.dof(),
                found: qdot.len(),
            });
        }
        debug!(joints = self.chain.dof(), mode = ?self.config.mode, "velocity analysis");

        let transforms = build_chain(self.chain.params())?;
        let frames = FrameSet::extract(&transforms);
        let jacobian = Jacobian::new(self.chain.joint_types(), &frames, self.config.mode)?;
        let velocity = jacobian.velocities(qdot)?;
        Ok(Analysis { transforms, frames, jacobian, velocity })
    }
}

impl VelocityKinematics for VelocityAnalysis {
    fn dof(&self) -> usize {
        self.chain.dof()
    }

    fn velocity(&self, qdot: &JointVelocities) -> Result<VelocityResult, KinematicError> {
        self.analyze(qdot).map(|analysis| analysis.velocity)
    }
}

/// Computes the end-effector velocity from the flat representation with default settings:
/// `dh_params` holds `[theta_deg, d, a, alpha_deg]` per joint, `q_dot` the joint rates and
/// `deg_type` the joint flags (1 = revolute, 0 = prismatic), all listed base to tip.
///
/// ```
/// use rs_dh_velocity::analysis::velocity_analysis;
///
/// let result = velocity_analysis(&[0.0, 0.0, 1.0, 0.0], &[1.0], &[1.0]).unwrap();
/// assert_eq!(result.linear.as_slice(), &[0.0, 1.0, 0.0]);
/// assert_eq!(result.angular.as_slice(), &[0.0, 0.0, 1.0]);
/// ```
pub fn velocity_analysis(dh_params: &[f32], q_dot: &[f32], deg_type: &[f32]) -> Result<VelocityResult, KinematicError> {
    let chain = KinematicChain::from_flat(dh_params, deg_type)?;
    VelocityAnalysis::new(chain, AnalysisConfig::default())?.velocity(q_dot)
}

/// Evaluates many independent configurations in parallel. Results are returned in the input
/// order, each case failing or succeeding on its own.
pub fn evaluate_batch(config: AnalysisConfig, cases: &[(KinematicChain, Vec<f32>)])
                      -> Vec<Result<VelocityResult, KinematicError>> {
    cases.par_iter()
        .map(|(chain, qdot)| VelocityAnalysis::new(chain.clone(), config)?.velocity(qdot))
        .collect()
}
