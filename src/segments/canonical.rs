use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Segment in direction-normalized form: anchor plus displacement.
///
/// The anchor is the endpoint that is smaller under (x, then y) ordering, so
/// `dx >= 0` and `dx == 0` implies `dy >= 0`. Serialized as `[x, y, dx, dy]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[i32; 4]", into = "[i32; 4]")]
pub struct CanonicalSegment {
    anchor_x: i32,
    anchor_y: i32,
    dx: i32,
    dy: i32,
}

impl CanonicalSegment {
    /// Canonicalize the segment joining `p1` and `p2`. Endpoint order does not matter.
    pub fn from_endpoints(p1: Point, p2: Point) -> Self {
        let (anchor, other) = match p1.x.cmp(&p2.x) {
            Ordering::Less => (p1, p2),
            Ordering::Greater => (p2, p1),
            Ordering::Equal if p1.y < p2.y => (p1, p2),
            Ordering::Equal => (p2, p1),
        };
        Self {
            anchor_x: anchor.x,
            anchor_y: anchor.y,
            dx: other.x - anchor.x,
            dy: other.y - anchor.y,
        }
    }

    /// Build from already-canonical parts; `None` if the displacement points
    /// the wrong way.
    pub fn new(anchor: Point, dx: i32, dy: i32) -> Option<Self> {
        (dx > 0 || (dx == 0 && dy >= 0)).then_some(Self {
            anchor_x: anchor.x,
            anchor_y: anchor.y,
            dx,
            dy,
        })
    }

    pub fn anchor(&self) -> Point {
        Point::new(self.anchor_x, self.anchor_y)
    }

    /// The endpoint reached by following the displacement.
    pub fn other(&self) -> Point {
        Point::new(self.anchor_x + self.dx, self.anchor_y + self.dy)
    }

    pub fn displacement(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    pub fn to_array(self) -> [i32; 4] {
        [self.anchor_x, self.anchor_y, self.dx, self.dy]
    }
}

impl From<CanonicalSegment> for [i32; 4] {
    fn from(seg: CanonicalSegment) -> Self {
        seg.to_array()
    }
}

impl TryFrom<[i32; 4]> for CanonicalSegment {
    type Error = String;

    fn try_from([x, y, dx, dy]: [i32; 4]) -> Result<Self, Self::Error> {
        Self::new(Point::new(x, y), dx, dy)
            .ok_or_else(|| format!("segment [{x}, {y}, {dx}, {dy}] is not canonical"))
    }
}

/// Canonicalize a single endpoint pair.
#[inline]
pub fn canonicalize_pair(p1: Point, p2: Point) -> CanonicalSegment {
    CanonicalSegment::from_endpoints(p1, p2)
}

/// One canonical segment per consecutive pair, in pair order.
pub fn canonicalize(points: &[Point]) -> Vec<CanonicalSegment> {
    points
        .windows(2)
        .map(|pair| canonicalize_pair(pair[0], pair[1]))
        .collect()
}
