use serde_json::{json, Value};

/// Encode `(x, y, path_type)` triples the way the tracing tool exports them.
pub fn sequence(points: &[(f64, f64, u8)]) -> Value {
    Value::Array(points.iter().map(|&(x, y, k)| json!([x, y, k])).collect())
}

/// Closed square outline starting and ending at `(x0, y0)`.
pub fn square(x0: f64, y0: f64, side: f64) -> Value {
    sequence(&[
        (x0, y0, 1),
        (x0 + side, y0, 2),
        (x0 + side, y0 + side, 2),
        (x0, y0 + side, 2),
        (x0, y0, 1),
    ])
}

/// Zig-zag with `steps` points, alternating between two rows.
pub fn zigzag(steps: usize) -> Value {
    let pts: Vec<(f64, f64, u8)> = (0..steps)
        .map(|i| {
            let x = 5.0 + 20.0 * i as f64 + 0.75;
            let y = if i % 2 == 0 { 30.4 } else { 90.9 };
            (x, y, 2)
        })
        .collect();
    sequence(&pts)
}
