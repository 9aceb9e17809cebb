//! Errors reported by the velocity pipeline

use std::fmt;

/// Failure of the velocity computation. The pipeline fails fast: no partial result is produced
/// and mismatched arrays are never truncated, padded or broadcast.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicError {
    /// DH parameter count is not a multiple of 4, the chain is empty or longer than allowed.
    ParameterCount(String),

    /// A DH value, joint velocity or joint type flag cannot be taken as a real number
    /// (or, for joint types, as a valid flag).
    ParameterConversion {
        field: &'static str,
        index: usize,
        value: String,
    },

    /// Per-joint array length differs from the joint count implied by the DH parameters.
    DimensionMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for KinematicError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            KinematicError::ParameterCount(ref msg) =>
                write!(f, "Parameter Count Error: {}", msg),
            KinematicError::ParameterConversion { field, index, ref value } =>
                write!(f, "Parameter Conversion Error: {}[{}] = {} is not a real number", field, index, value),
            KinematicError::DimensionMismatch { field, expected, found } =>
                write!(f, "Dimension Mismatch: {} has {} entries, expected {}", field, found, expected),
        }
    }
}

impl std::error::Error for KinematicError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_offending_detail() {
        let e = KinematicError::DimensionMismatch { field: "q_dot", expected: 2, found: 3 };
        assert_eq!(e.to_string(), "Dimension Mismatch: q_dot has 3 entries, expected 2");

        let e = KinematicError::ParameterConversion { field: "dh_params", index: 5, value: "\"abc\"".into() };
        assert!(e.to_string().contains("dh_params[5]"));
    }
}
