//! Square rings of grid offsets around an anchor.
//!
//! Ring `l` holds the `8·l` offsets at Chebyshev distance `l`. They are
//! produced side by side in a fixed order: the top side walking right, the
//! right side walking down, the bottom side walking left, then the left side
//! walking up. Each side starts one step past the corner the previous side
//! ended on, so every offset appears exactly once.
//!
//! ```text
//! l = 1        side index per offset
//!              3 0 0
//!              3 * 1
//!              2 2 1
//! ```

/// Offsets `(dx, dy)` on ring `level` (>= 1) in search order.
pub fn ring_offsets(level: i32) -> Vec<(i32, i32)> {
    if level <= 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(8 * level as usize);
    for side in 0..4 {
        let forward = side < 2;
        let step = if forward { 1 } else { -1 };
        let start = -step * (level - 1);
        let stop = step * (level + 1);
        let fixed = if (side + 1) % 4 < 2 { -level } else { level };
        let mut along = start;
        while along != stop {
            if side % 2 == 0 {
                out.push((along, fixed));
            } else {
                out.push((fixed, along));
            }
            along += step;
        }
    }
    out
}
