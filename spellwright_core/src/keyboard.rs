//! QWERTY key-position distance. Not consulted by the default ranking
//! formula; kept as a utility for callers that want a typo-plausibility
//! signal keyed to physical key layout rather than edit distance alone.

const ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Characters outside the 26-letter layout don't have a real key position.
const MISSING_DISTANCE: f64 = 10.0;

fn position(c: char) -> Option<(i32, i32)> {
    let lower = c.to_ascii_lowercase();
    for (row_idx, row) in ROWS.iter().enumerate() {
        if let Some(col_idx) = row.find(lower) {
            return Some((col_idx as i32, row_idx as i32));
        }
    }
    None
}

/// Euclidean distance between two keys' integer `(row, column)` positions
/// on a standard QWERTY layout. Either character missing from the layout
/// yields the sentinel distance `10.0`.
pub fn qwerty_distance(a: char, b: char) -> f64 {
    match (position(a), position(b)) {
        (Some((ax, ay)), Some((bx, by))) => {
            (((ax - bx).pow(2) + (ay - by).pow(2)) as f64).sqrt()
        }
        _ => MISSING_DISTANCE,
    }
}
