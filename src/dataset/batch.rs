use crate::error::{DatasetError, Result};
use crate::types::{Point, PointSequence};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One dataset partition: its name (used for the image directory and the
/// annotation file) and the source file it is read from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSpec {
    pub name: String,
    pub source: PathBuf,
}

impl BatchSpec {
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// The fixed train / valid pair, read from `train.json` and `valid.json`.
    pub fn defaults() -> Vec<BatchSpec> {
        vec![
            BatchSpec::new("train", "train.json"),
            BatchSpec::new("valid", "valid.json"),
        ]
    }
}

/// What to do with a point that truncates to a pixel outside the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    /// Clamp onto the nearest edge pixel and log a warning.
    #[default]
    Clamp,
    /// Abort the run with `DatasetError::OutOfBounds`.
    Reject,
}

/// Grid points of one sequence, labels stripped and bounds enforced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridPath {
    pub points: Vec<Point>,
    /// Number of points moved onto the canvas.
    pub clamped: usize,
}

/// Strip labels, truncate to the grid and apply `policy` against a square
/// canvas of side `canvas`. `origin` names the input for error reporting.
pub fn to_grid_path(
    sequence: &PointSequence,
    sequence_index: usize,
    canvas: usize,
    policy: BoundsPolicy,
    origin: &Path,
) -> Result<GridPath> {
    let mut path = GridPath {
        points: Vec::with_capacity(sequence.len()),
        clamped: 0,
    };
    for (index, traced) in sequence.points.iter().enumerate() {
        if !traced.x.is_finite() || !traced.y.is_finite() {
            return Err(DatasetError::input(
                origin,
                format!("point {index} of sequence {sequence_index} is not finite"),
            ));
        }
        let point = traced.grid();
        if point.in_canvas(canvas) {
            path.points.push(point);
            continue;
        }
        match policy {
            BoundsPolicy::Reject => {
                return Err(DatasetError::OutOfBounds {
                    sequence: sequence_index,
                    index,
                    x: traced.x,
                    y: traced.y,
                })
            }
            BoundsPolicy::Clamp => {
                let clamped = point.clamped(canvas);
                warn!(
                    "sequence {sequence_index}: clamping point {index} ({:.2}, {:.2}) to ({}, {})",
                    traced.x, traced.y, clamped.x, clamped.y
                );
                path.points.push(clamped);
                path.clamped += 1;
            }
        }
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PathType, TracedPoint};

    fn seq(raw: &[(f64, f64)]) -> PointSequence {
        raw.iter()
            .map(|&(x, y)| TracedPoint::new(x, y, PathType::Line))
            .collect()
    }

    #[test]
    fn in_canvas_points_pass_through_truncated() {
        let path = to_grid_path(
            &seq(&[(0.0, 0.0), (10.9, 255.5)]),
            0,
            256,
            BoundsPolicy::Reject,
            Path::new("train.json"),
        )
        .unwrap();
        assert_eq!(path.points, vec![Point::new(0, 0), Point::new(10, 255)]);
        assert_eq!(path.clamped, 0);
    }

    #[test]
    fn clamp_policy_moves_points_onto_edge() {
        let _ = env_logger::builder().is_test(true).try_init();
        let path = to_grid_path(
            &seq(&[(-4.0, 12.0), (300.2, 256.0), (5.0, 5.0)]),
            2,
            256,
            BoundsPolicy::Clamp,
            Path::new("train.json"),
        )
        .unwrap();
        assert_eq!(
            path.points,
            vec![Point::new(0, 12), Point::new(255, 255), Point::new(5, 5)]
        );
        assert_eq!(path.clamped, 2);
    }

    #[test]
    fn reject_policy_reports_offending_point() {
        let err = to_grid_path(
            &seq(&[(1.0, 1.0), (1.0, 256.0)]),
            4,
            256,
            BoundsPolicy::Reject,
            Path::new("valid.json"),
        )
        .unwrap_err();
        match err {
            DatasetError::OutOfBounds {
                sequence, index, ..
            } => assert_eq!((sequence, index), (4, 1)),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn non_finite_coordinates_are_malformed() {
        let err = to_grid_path(
            &seq(&[(f64::NAN, 1.0)]),
            0,
            256,
            BoundsPolicy::Clamp,
            Path::new("valid.json"),
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::InputMalformed { .. }));
    }

    #[test]
    fn policy_parses_lowercase() {
        let p: BoundsPolicy = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(p, BoundsPolicy::Reject);
    }
}
