use rs_dh_velocity::analysis::{AnalysisConfig, VelocityAnalysis};
use rs_dh_velocity::jacobian::LinearJacobianMode;
use rs_dh_velocity::kinematic_traits::VelocityKinematics;
use rs_dh_velocity::parameters::dh_kinematics::KinematicChain;
use rs_dh_velocity::utils::dump_matrix;

/// End-effector velocities of a few common manipulators.
fn main() {
    let robots = [
        ("Planar 2R", KinematicChain::planar_2r(), vec![1.0_f32, 1.0]),
        ("SCARA", KinematicChain::scara(), vec![0.5, -0.25, 0.1, 1.0]),
        ("Stanford arm", KinematicChain::stanford_arm(), vec![0.1, 0.2, 0.05, 0.3, 0.0, 0.5]),
        ("PUMA 560", KinematicChain::puma560(), vec![0.1, 0.2, 0.3, 0.0, 0.0, 0.5]),
    ];

    for (name, chain, qdot) in robots {
        println!("{}:\n{}", name, chain.to_yaml());
        for mode in [LinearJacobianMode::Reference, LinearJacobianMode::ByJointType] {
            let config = AnalysisConfig { mode, ..AnalysisConfig::default() };
            let robot = VelocityAnalysis::new(chain.clone(), config).unwrap();
            match robot.velocity(&qdot) {
                Ok(velocity) => println!("{:?}:\n{}", mode, velocity),
                Err(e) => println!("{:?}: {}", mode, e),
            }
        }
        println!();
    }

    // Joint positions can be changed without rebuilding the table by hand
    let bent = KinematicChain::planar_2r().at_positions(&[90.0, -45.0]).unwrap();
    let robot = VelocityAnalysis::new(bent, AnalysisConfig::default()).unwrap();
    let analysis = robot.analyze(&[1.0, 1.0]).unwrap();
    dump_matrix("Jacobian (6xN)", &analysis.jacobian.matrix());
    println!("{}", analysis.velocity);
}
