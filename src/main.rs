use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rs_dh_velocity::analysis::{AnalysisConfig, VelocityAnalysis};
use rs_dh_velocity::jacobian::LinearJacobianMode;
use rs_dh_velocity::kinematic_traits::MAX_JOINTS;
use rs_dh_velocity::parameters_from_file::VelocityProblem;
use rs_dh_velocity::utils::{dump_matrix, dump_vector};

/// End-effector velocity of a serial manipulator from its DH parameters and joint rates.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with `dh_params`, `velocity` and `degType`
    #[arg(default_value = "data.json")]
    file: PathBuf,

    /// Treatment of prismatic joints in the linear Jacobian, overrides the file
    #[arg(long, value_enum)]
    mode: Option<LinearJacobianMode>,

    /// Reject chains with more joints than this (1 to 64)
    #[arg(long, default_value_t = MAX_JOINTS, value_parser = parse_max_joints)]
    max_joints: usize,

    /// Also print the chain, transforms, frames and Jacobian
    #[arg(short, long)]
    verbose: bool,
}

/// Accepts 1 to `MAX_JOINTS`, the longest chain the library builds.
fn parse_max_joints(s: &str) -> Result<usize, String> {
    let value: usize = s.parse().map_err(|e| format!("{}", e))?;
    if value == 0 || value > MAX_JOINTS {
        return Err(format!("must be between 1 and {}", MAX_JOINTS));
    }
    Ok(value)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let problem = VelocityProblem::from_json_file(&args.file)
        .with_context(|| format!("Failed to read parameters from {}", args.file.display()))?;

    let config = AnalysisConfig {
        mode: args.mode.or(problem.jacobian_mode).unwrap_or_default(),
        max_joints: args.max_joints,
    };
    let robot = VelocityAnalysis::new(problem.chain, config)?;
    let analysis = robot.analyze(&problem.joint_velocities)
        .context("Velocity analysis failed")?;

    if args.verbose {
        print!("{}", robot.chain.to_yaml());
        for (i, t) in analysis.transforms.joints.iter().enumerate() {
            dump_matrix(&format!("T{}", i + 1), t);
        }
        dump_matrix("Chain transform", &analysis.transforms.chain);
        for (i, z) in analysis.frames.zn.iter().enumerate() {
            dump_vector(&format!("z{}", i), z.as_slice());
        }
        for (i, o) in analysis.frames.on.iter().enumerate() {
            dump_vector(&format!("o{}", i), o.as_slice());
        }
        dump_matrix("Jv", analysis.jacobian.linear());
        dump_matrix("Jw", analysis.jacobian.angular());
    }
    println!("{}", analysis.velocity);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_joints_limited_to_supported_range() {
        assert_eq!(parse_max_joints("6"), Ok(6));
        assert_eq!(parse_max_joints(&MAX_JOINTS.to_string()), Ok(MAX_JOINTS));
        assert!(parse_max_joints("0").is_err());
        assert!(parse_max_joints("65").is_err());
        assert!(parse_max_joints("six").is_err());
    }

    #[test]
    fn test_max_joints_flag() {
        let args = Args::try_parse_from(["dh-velocity", "--max-joints", "12"]).unwrap();
        assert_eq!(args.max_joints, 12);
        assert_eq!(args.file, PathBuf::from("data.json"));
        assert!(Args::try_parse_from(["dh-velocity", "--max-joints", "100"]).is_err());
    }
}
