/// Normalize an interpolated `begin`/`end` pair before rendering it.
///
/// Outside circular mode each endpoint is clamped into `[0, total_length]`; circular pairs are
/// left for [`crate::compute_descriptor`] to fold. A pair whose span lies in `(0, total_length]`
/// is returned as is. Otherwise a circular pair spanning more than the path collapses to the full
/// range, and anything else is returned reordered.
pub fn normalize_range(begin: f64, end: f64, total_length: f64, circular: bool) -> (f64, f64) {
    let (begin, end) = if circular {
        (begin, end)
    } else {
        let hi = total_length.max(0.0);
        (begin.clamp(0.0, hi), end.clamp(0.0, hi))
    };

    let span = end - begin;
    if span > 0.0 && span <= total_length {
        return (begin, end);
    }
    if circular && span > total_length {
        return (0.0, total_length);
    }
    (end, begin)
}

/// Interpolate from `a` to `b`; exact at both `t = 0` and `t = 1`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/normalize.rs"]
mod tests;
