//! Reflective boundary index mapping.

/// Mirror an out-of-range index back into `[0, n - 1]`.
///
/// Reflection is about the edge samples themselves, so the edge is not
/// repeated: for `n = 10`, `-1 -> 1` and `10 -> 8`. Indices far outside the
/// range are reflected repeatedly until they land inside. A single-sample
/// extent maps everything to 0.
///
/// # Panics
///
/// Panics if `n == 0`.
pub fn reflect_index(i: i64, n: usize) -> usize {
    assert!(n > 0, "cannot reflect into an empty extent");
    if n == 1 {
        return 0;
    }
    let last = (n - 1) as i64;
    let mut i = i;
    loop {
        if i < 0 {
            i = -i;
        } else if i > last {
            i = 2 * last - i;
        } else {
            return i as usize;
        }
    }
}
