use std::fmt;
use std::path::{Path, PathBuf};

/// Reasons a dataset run may abort.
///
/// Every variant is fatal for the run; nothing is retried because all inputs
/// are local and re-running reproduces the same outcome.
#[derive(Debug)]
pub enum DatasetError {
    /// A batch source could not be read or a point record is malformed.
    InputMalformed { path: PathBuf, reason: String },
    /// A coordinate fell outside the canvas while the reject policy is active.
    OutOfBounds {
        sequence: usize,
        index: usize,
        x: f64,
        y: f64,
    },
    /// An output directory or file could not be written.
    Storage { path: PathBuf, reason: String },
    /// The tool configuration could not be read or parsed.
    Config { path: PathBuf, reason: String },
}

impl DatasetError {
    pub fn input(path: &Path, reason: impl fmt::Display) -> Self {
        DatasetError::InputMalformed {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn storage(path: &Path, reason: impl fmt::Display) -> Self {
        DatasetError::Storage {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn config(path: &Path, reason: impl fmt::Display) -> Self {
        DatasetError::Config {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::InputMalformed { path, reason } => {
                write!(f, "malformed input {}: {reason}", path.display())
            }
            DatasetError::OutOfBounds {
                sequence,
                index,
                x,
                y,
            } => write!(
                f,
                "point {index} of sequence {sequence} is off canvas ({x:.2}, {y:.2})"
            ),
            DatasetError::Storage { path, reason } => {
                write!(f, "failed to write {}: {reason}", path.display())
            }
            DatasetError::Config { path, reason } => {
                write!(f, "bad config {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for DatasetError {}

pub type Result<T> = std::result::Result<T, DatasetError>;
