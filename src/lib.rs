//! Rust implementation of velocity kinematics for serial manipulators described with
//! Denavit–Hartenberg (DH) parameters.
//!
//! Given the DH table of a single open serial chain, the type of each joint and the current
//! joint rates, this crate computes the instantaneous linear and angular velocity of the
//! end-effector using the geometric Jacobian.
//!
//! # Features
//!
//! - Standard DH transforms, with every matrix entry rounded to 3 decimals so that results are
//!   reproducible to the last printed digit. Single precision is used throughout.
//! - Joint axes and frame origins expressed in the base frame.
//! - Linear and angular Jacobian blocks, also available as a single 6xN matrix.
//! - Two treatments of prismatic joints in the linear Jacobian, see
//!   [`jacobian::LinearJacobianMode`].
//! - Errors are returned as values (`KinematicError`), never by terminating the process.
//! - Parallel evaluation of many independent configurations with rayon.
//! - Reading problems from JSON files and a small command line tool (feature `allow_filesystem`).
//!
//! # Pipeline
//!
//! 1. [`transform`]: DH parameters to per-joint and chain transforms.
//! 2. [`frames`]: rotation axes `zn` and origins `on` in the base frame.
//! 3. [`jacobian`]: linear `Jv` and angular `Jw` blocks.
//! 4. [`velocity`]: `v = Jv·q̇`, `w = Jw·q̇`.
//!
//! [`analysis`] runs all four stages.
//!
//! ```
//! use rs_dh_velocity::analysis::{AnalysisConfig, VelocityAnalysis};
//! use rs_dh_velocity::kinematic_traits::VelocityKinematics;
//! use rs_dh_velocity::parameters::dh_kinematics::KinematicChain;
//!
//! // Two unit links, both revolute, all angles zero
//! let robot = VelocityAnalysis::new(KinematicChain::planar_2r(), AnalysisConfig::default()).unwrap();
//! let velocity = robot.velocity(&[1.0, 1.0]).unwrap();
//! assert_eq!(velocity.linear.as_slice(), &[0.0, 3.0, 0.0]);
//! assert_eq!(velocity.angular.as_slice(), &[0.0, 0.0, 2.0]);
//! ```
//!
//! ## Examples
//!
//! - **velocity.rs**: velocities of a few common manipulators, in both Jacobian modes.
//! - **batch.rs**: evaluating many configurations in parallel.

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

pub mod kinematic_error;
pub mod kinematic_traits;

pub mod utils;

pub mod transform;
pub mod frames;
pub mod jacobian;
pub mod velocity;

pub mod analysis;
