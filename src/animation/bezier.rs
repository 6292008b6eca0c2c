const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f64 = 1e-6;
const SUBDIVISION_PRECISION: f64 = 1e-9;
const SUBDIVISION_MAX_ITERATIONS: usize = 48;

const fn coeff_a(a1: f64, a2: f64) -> f64 {
    1.0 - 3.0 * a2 + 3.0 * a1
}

const fn coeff_b(a1: f64, a2: f64) -> f64 {
    3.0 * a2 - 6.0 * a1
}

const fn coeff_c(a1: f64) -> f64 {
    3.0 * a1
}

fn calc_bezier(t: f64, a1: f64, a2: f64) -> f64 {
    ((coeff_a(a1, a2) * t + coeff_b(a1, a2)) * t + coeff_c(a1)) * t
}

fn slope(t: f64, a1: f64, a2: f64) -> f64 {
    3.0 * coeff_a(a1, a2) * t * t + 2.0 * coeff_b(a1, a2) * t + coeff_c(a1)
}

/// Solve `x(t) = x` for the curve parameter: Newton first, bisection when the slope is flat or
/// Newton leaves `[0, 1]`.
fn t_for_x(x: f64, x1: f64, x2: f64) -> f64 {
    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = calc_bezier(t, x1, x2) - x;
        if err.abs() <= SUBDIVISION_PRECISION {
            return t;
        }
        let d = slope(t, x1, x2);
        if d.abs() < NEWTON_MIN_SLOPE {
            break;
        }
        t -= err / d;
        if !(0.0..=1.0).contains(&t) {
            break;
        }
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..SUBDIVISION_MAX_ITERATIONS {
        let err = calc_bezier(t, x1, x2) - x;
        if err.abs() <= SUBDIVISION_PRECISION {
            break;
        }
        if err > 0.0 {
            hi = t;
        } else {
            lo = t;
        }
        t = lo + (hi - lo) / 2.0;
    }
    t
}

/// Evaluate a CSS-style cubic Bézier timing function at progress `x` in `[0, 1]`.
pub(crate) fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    if x1 == y1 && x2 == y2 {
        return x;
    }
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);
    calc_bezier(t_for_x(x, x1, x2), y1, y2)
}
