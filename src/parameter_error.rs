//! Error handling for the parameter file reader

use std::io;

use crate::kinematic_error::KinematicError;

/// Unified error to report failures while reading the parameter file.
#[derive(Debug)]
pub enum ParameterError {
    IoError(io::Error),
    ParseError(String),
    Kinematics(KinematicError),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ParameterError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            ParameterError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            ParameterError::Kinematics(ref err) =>
                write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ParameterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParameterError::IoError(err) => Some(err),
            ParameterError::ParseError(_) => None,
            ParameterError::Kinematics(err) => Some(err),
        }
    }
}

impl From<io::Error> for ParameterError {
    fn from(err: io::Error) -> Self {
        ParameterError::IoError(err)
    }
}

impl From<serde_json::Error> for ParameterError {
    fn from(err: serde_json::Error) -> Self {
        ParameterError::ParseError(format!("{}", err))
    }
}

impl From<KinematicError> for ParameterError {
    fn from(err: KinematicError) -> Self {
        ParameterError::Kinematics(err)
    }
}
