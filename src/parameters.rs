//! Defines the DH parameter data structure and the kinematic chain

pub mod dh_kinematics {
    use crate::kinematic_error::KinematicError;
    use crate::kinematic_traits::MAX_JOINTS;

    /// Denavit–Hartenberg parameters of one joint. Angles are given in degrees and are
    /// converted to radians only when the transform is built.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DhParameter {
        /// Rotation about the previous z axis, degrees.
        pub theta_deg: f32,

        /// Offset along the previous z axis to the common normal.
        pub d: f32,

        /// Length of the common normal (link length).
        pub a: f32,

        /// Rotation about the common normal from the old z axis to the new one, degrees.
        pub alpha_deg: f32,
    }

    impl DhParameter {
        pub const fn new(theta_deg: f32, d: f32, a: f32, alpha_deg: f32) -> Self {
            DhParameter { theta_deg, d, a, alpha_deg }
        }

        /// Splits the flat `[theta_deg, d, a, alpha_deg, ...]` sequence into per-joint
        /// parameters. The length must be a non-zero multiple of 4 and every value finite.
        pub fn from_flat(flat: &[f32]) -> Result<Vec<Self>, KinematicError> {
            let joints = joint_count(flat.len(), MAX_JOINTS)?;
            if let Some((index, value)) = flat.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(KinematicError::ParameterConversion {
                    field: "dh_params",
                    index,
                    value: value.to_string(),
                });
            }
            let mut params = Vec::with_capacity(joints);
            for p in flat.chunks_exact(4) {
                params.push(DhParameter::new(p[0], p[1], p[2], p[3]));
            }
            Ok(params)
        }

        fn is_finite(&self) -> bool {
            self.theta_deg.is_finite() && self.d.is_finite()
                && self.a.is_finite() && self.alpha_deg.is_finite()
        }
    }

    /// Number of joints described by `len` flat DH values. Rejects counts that are not
    /// a multiple of 4, empty chains and chains longer than `max_joints`.
    pub fn joint_count(len: usize, max_joints: usize) -> Result<usize, KinematicError> {
        if len % 4 != 0 {
            return Err(KinematicError::ParameterCount(format!(
                "{} DH values given, must be a multiple of 4", len
            )));
        }
        let joints = len / 4;
        if joints == 0 {
            return Err(KinematicError::ParameterCount("at least one joint is required".into()));
        }
        if joints > max_joints {
            return Err(KinematicError::ParameterCount(format!(
                "{} joints given, at most {} supported", joints, max_joints
            )));
        }
        Ok(joints)
    }

    /// Type of the joint. Revolute joints rotate about their z axis, prismatic joints
    /// slide along it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum JointType {
        Revolute,
        Prismatic,
    }

    impl JointType {
        /// Decodes the external flag, 1 for revolute and 0 for prismatic.
        pub fn from_flag(index: usize, flag: f32) -> Result<Self, KinematicError> {
            if flag == 1.0 {
                Ok(JointType::Revolute)
            } else if flag == 0.0 {
                Ok(JointType::Prismatic)
            } else {
                Err(KinematicError::ParameterConversion {
                    field: "degType",
                    index,
                    value: flag.to_string(),
                })
            }
        }

        /// The flag value, also the weight of the joint axis in the angular Jacobian.
        pub fn flag(self) -> f32 {
            match self {
                JointType::Revolute => 1.0,
                JointType::Prismatic => 0.0,
            }
        }
    }

    /// Single open serial chain, joints ordered base to tip. The order defines frame numbering
    /// and the column order of the Jacobian. Instances are always consistent: both arrays
    /// have the same non-zero length and all values are finite.
    #[derive(Debug, Clone, PartialEq)]
    pub struct KinematicChain {
        params: Vec<DhParameter>,
        joint_types: Vec<JointType>,
    }

    impl KinematicChain {
        pub fn new(params: Vec<DhParameter>, joint_types: Vec<JointType>) -> Result<Self, KinematicError> {
            if params.is_empty() {
                return Err(KinematicError::ParameterCount("at least one joint is required".into()));
            }
            if params.len() > MAX_JOINTS {
                return Err(KinematicError::ParameterCount(format!(
                    "{} joints given, at most {} supported", params.len(), MAX_JOINTS
                )));
            }
            if joint_types.len() != params.len() {
                return Err(KinematicError::DimensionMismatch {
                    field: "degType",
                    expected: params.len(),
                    found: joint_types.len(),
                });
            }
            if let Some(index) = params.iter().position(|p| !p.is_finite()) {
                return Err(KinematicError::ParameterConversion {
                    field: "dh_params",
                    index,
                    value: format!("{:?}", params[index]),
                });
            }
            Ok(KinematicChain { params, joint_types })
        }

        /// Builds the chain from the flat representation: `4·N` DH values and `N` joint type
        /// flags (1 = revolute, 0 = prismatic).
        ///
        /// ```
        /// use rs_dh_velocity::parameters::dh_kinematics::{JointType, KinematicChain};
        ///
        /// let chain = KinematicChain::from_flat(&[0.0, 0.0, 1.0, 0.0], &[1.0]).unwrap();
        /// assert_eq!(chain.dof(), 1);
        /// assert_eq!(chain.joint_types(), &[JointType::Revolute]);
        /// ```
        pub fn from_flat(dh_params: &[f32], deg_type: &[f32]) -> Result<Self, KinematicError> {
            let params = DhParameter::from_flat(dh_params)?;
            if deg_type.len() != params.len() {
                return Err(KinematicError::DimensionMismatch {
                    field: "degType",
                    expected: params.len(),
                    found: deg_type.len(),
                });
            }
            let joint_types = deg_type.iter().enumerate()
                .map(|(i, &flag)| JointType::from_flag(i, flag))
                .collect::<Result<Vec<_>, _>>()?;
            KinematicChain::new(params, joint_types)
        }

        /// Chain where every joint is revolute.
        pub fn revolute(params: Vec<DhParameter>) -> Result<Self, KinematicError> {
            let joint_types = vec![JointType::Revolute; params.len()];
            KinematicChain::new(params, joint_types)
        }

        /// Number of joints.
        pub fn dof(&self) -> usize {
            self.params.len()
        }

        pub fn params(&self) -> &[DhParameter] {
            &self.params
        }

        pub fn joint_types(&self) -> &[JointType] {
            &self.joint_types
        }

        /// Returns the copy of this chain with joint angles (revolute) or offsets (prismatic)
        /// replaced by the given joint positions, degrees for revolute joints.
        pub fn at_positions(&self, positions: &[f32]) -> Result<Self, KinematicError> {
            if positions.len() != self.dof() {
                return Err(KinematicError::DimensionMismatch {
                    field: "positions",
                    expected: self.dof(),
                    found: positions.len(),
                });
            }
            let params = self.params.iter().zip(&self.joint_types).zip(positions)
                .map(|((p, t), &q)| match t {
                    JointType::Revolute => DhParameter { theta_deg: q, ..*p },
                    JointType::Prismatic => DhParameter { d: q, ..*p },
                })
                .collect();
            KinematicChain::new(params, self.joint_types.clone())
        }

        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            let mut yaml = String::from("dh_kinematics_chain:\n");
            for (p, t) in self.params.iter().zip(&self.joint_types) {
                yaml.push_str(&format!(
                    "  - {{ theta: deg({}), d: {}, a: {}, alpha: deg({}), type: {} }}\n",
                    p.theta_deg, p.d, p.a, p.alpha_deg,
                    match t {
                        JointType::Revolute => "revolute",
                        JointType::Prismatic => "prismatic",
                    }
                ));
            }
            yaml.push_str(&format!("dof: {}\n", self.dof()));
            yaml
        }
    }

}
