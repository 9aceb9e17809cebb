//! Hardcoded DH chains for a few common manipulators, all in their zero configuration
//! (link lengths in meters)

pub mod dh_kinematics {
    use crate::parameters::dh_kinematics::{DhParameter, JointType, KinematicChain};

    // The tables below are consistent by construction, so building them cannot fail.
    fn preset(params: Vec<DhParameter>, joint_types: Vec<JointType>) -> KinematicChain {
        match KinematicChain::new(params, joint_types) {
            Ok(chain) => chain,
            Err(e) => unreachable!("invalid preset chain: {}", e),
        }
    }

    impl KinematicChain {
        /// Two unit links moving in the XY plane.
        pub fn planar_2r() -> Self {
            preset(
                vec![
                    DhParameter::new(0.0, 0.0, 1.0, 0.0),
                    DhParameter::new(0.0, 0.0, 1.0, 0.0),
                ],
                vec![JointType::Revolute; 2],
            )
        }

        /// Three link planar arm, links 1.0, 0.8 and 0.3 (the last one being the hand).
        pub fn planar_3r() -> Self {
            preset(
                vec![
                    DhParameter::new(0.0, 0.0, 1.0, 0.0),
                    DhParameter::new(0.0, 0.0, 0.8, 0.0),
                    DhParameter::new(0.0, 0.0, 0.3, 0.0),
                ],
                vec![JointType::Revolute; 3],
            )
        }

        /// SCARA arm (RRPR) with quill extended by 0.1.
        pub fn scara() -> Self {
            preset(
                vec![
                    DhParameter::new(0.0, 0.387, 0.325, 0.0),
                    DhParameter::new(0.0, 0.0, 0.225, 180.0),
                    DhParameter::new(0.0, 0.1, 0.0, 0.0),
                    DhParameter::new(0.0, 0.0, 0.0, 0.0),
                ],
                vec![JointType::Revolute, JointType::Revolute, JointType::Prismatic, JointType::Revolute],
            )
        }

        /// Stanford arm (RRPRRR), the prismatic joint extended by 0.5.
        pub fn stanford_arm() -> Self {
            preset(
                vec![
                    DhParameter::new(0.0, 0.412, 0.0, -90.0),
                    DhParameter::new(0.0, 0.154, 0.0, 90.0),
                    DhParameter::new(0.0, 0.5, 0.0, 0.0),
                    DhParameter::new(0.0, 0.0, 0.0, -90.0),
                    DhParameter::new(0.0, 0.0, 0.0, 90.0),
                    DhParameter::new(0.0, 0.263, 0.0, 0.0),
                ],
                vec![
                    JointType::Revolute, JointType::Revolute, JointType::Prismatic,
                    JointType::Revolute, JointType::Revolute, JointType::Revolute,
                ],
            )
        }

        /// Unimation PUMA 560, standard DH table.
        pub fn puma560() -> Self {
            preset(
                vec![
                    DhParameter::new(0.0, 0.0, 0.0, 90.0),
                    DhParameter::new(0.0, 0.0, 0.4318, 0.0),
                    DhParameter::new(0.0, 0.15005, 0.0203, -90.0),
                    DhParameter::new(0.0, 0.4318, 0.0, 90.0),
                    DhParameter::new(0.0, 0.0, 0.0, -90.0),
                    DhParameter::new(0.0, 0.0, 0.0, 0.0),
                ],
                vec![JointType::Revolute; 6],
            )
        }
    }
}
