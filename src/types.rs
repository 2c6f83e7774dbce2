use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer pixel coordinate on the canvas grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncate floating coordinates toward zero.
    ///
    /// Non-finite inputs saturate the same way `as` casts do; callers that care
    /// must reject them first.
    #[inline]
    pub fn truncate(x: f64, y: f64) -> Self {
        Self {
            x: x.trunc() as i32,
            y: y.trunc() as i32,
        }
    }

    /// Clamp both coordinates into `[0, size - 1]`.
    #[inline]
    pub fn clamped(self, size: usize) -> Self {
        let max = size.saturating_sub(1) as i32;
        Self {
            x: self.x.clamp(0, max),
            y: self.y.clamp(0, max),
        }
    }

    #[inline]
    pub fn in_canvas(&self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.x as i64)) && (0..size).contains(&(self.y as i64))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Per-point label attached by the tracing tool. Carried through the input
/// but never consulted when drawing or canonicalizing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PathType {
    None = 0,
    /// Corner / turning point.
    Keypoint = 1,
    Line = 2,
    Arc = 3,
    Bspline = 4,
}

impl PathType {
    pub const ALL: [PathType; 5] = [
        PathType::None,
        PathType::Keypoint,
        PathType::Line,
        PathType::Arc,
        PathType::Bspline,
    ];

    /// Number of path-type classes.
    pub const COUNT: usize = Self::ALL.len();

    pub fn name(self) -> &'static str {
        match self {
            PathType::None => "NONE",
            PathType::Keypoint => "KEYPOINT",
            PathType::Line => "LINE",
            PathType::Arc => "ARC",
            PathType::Bspline => "BSPLINE",
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for PathType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        PathType::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| format!("unknown path type code {code}"))
    }
}

impl From<PathType> for u8 {
    fn from(kind: PathType) -> u8 {
        kind.code()
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PathType.{}", self.name())
    }
}

/// One input sample: raw floating coordinates plus its path-type label.
/// Serialized as the array `[x, y, path_type]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64, PathType)", into = "(f64, f64, PathType)")]
pub struct TracedPoint {
    pub x: f64,
    pub y: f64,
    pub kind: PathType,
}

impl TracedPoint {
    pub fn new(x: f64, y: f64, kind: PathType) -> Self {
        Self { x, y, kind }
    }

    /// Grid point with the label stripped.
    pub fn grid(&self) -> Point {
        Point::truncate(self.x, self.y)
    }
}

impl From<(f64, f64, PathType)> for TracedPoint {
    fn from((x, y, kind): (f64, f64, PathType)) -> Self {
        Self { x, y, kind }
    }
}

impl From<TracedPoint> for (f64, f64, PathType) {
    fn from(p: TracedPoint) -> Self {
        (p.x, p.y, p.kind)
    }
}

/// One traced path. Point order defines which points are joined.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSequence {
    pub points: Vec<TracedPoint>,
}

impl PointSequence {
    pub fn new(points: Vec<TracedPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<TracedPoint> for PointSequence {
    fn from_iter<I: IntoIterator<Item = TracedPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
