use rs_dh_velocity::analysis::{evaluate_batch, AnalysisConfig};
use rs_dh_velocity::parameters::dh_kinematics::KinematicChain;

/// Evaluating many independent configurations in parallel.
fn main() {
    let base = KinematicChain::puma560();
    let cases: Vec<(KinematicChain, Vec<f32>)> = (0..360)
        .step_by(15)
        .map(|angle| {
            let q = angle as f32;
            let chain = base.at_positions(&[q, -q / 2.0, q / 3.0, 0.0, 45.0, 0.0]).unwrap();
            (chain, vec![0.5, 0.5, 0.5, 0.0, 0.0, 1.0])
        })
        .collect();

    let results = evaluate_batch(AnalysisConfig::default(), &cases);
    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(velocity) => println!("J1 = {:3} deg\n{}", i * 15, velocity),
            Err(e) => println!("J1 = {:3} deg: {}", i * 15, e),
        }
    }
}
