use crate::types::Point;

/// Integer Bresenham walk from `start` to `end`, yielding both endpoints.
///
/// The walk is 8-connected and visits `max(|dx|, |dy|) + 1` pixels. A
/// zero-length segment yields its single point.
#[derive(Clone, Debug)]
pub struct LinePixels {
    x: i32,
    y: i32,
    end: Point,
    // Error terms are kept in i64 so any pair of i32 endpoints is safe.
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl LinePixels {
    pub fn new(start: Point, end: Point) -> Self {
        let dx = (end.x as i64 - start.x as i64).abs();
        let dy = -(end.y as i64 - start.y as i64).abs();
        Self {
            x: start.x,
            y: start.y,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePixels {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let current = Point::new(self.x, self.y);
        if current == self.end {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let rx = (self.end.x as i64 - self.x as i64).abs();
        let ry = (self.end.y as i64 - self.y as i64).abs();
        let left = usize::try_from(rx.max(ry) + 1).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for LinePixels {}
