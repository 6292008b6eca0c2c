use std::{f64::consts::PI, str::FromStr};

use crate::{
    animation::bezier::cubic_bezier,
    foundation::error::{SegmentError, SegmentResult},
};

/// Built-in easing curves, addressable by name from JSON and the command line.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    Linear,
    /// Quadratic, accelerating.
    InQuad,
    /// Quadratic, decelerating.
    OutQuad,
    /// Quadratic, accelerating then decelerating.
    InOutQuad,
    /// Cubic, accelerating.
    InCubic,
    /// Cubic, decelerating.
    OutCubic,
    /// Cubic, accelerating then decelerating.
    InOutCubic,
    /// Sinusoidal, accelerating.
    InSine,
    /// Sinusoidal, decelerating.
    OutSine,
    /// Sinusoidal, accelerating then decelerating.
    InOutSine,
    /// Overshoots past 1 before settling.
    OutBack,
    /// Oscillates around 1 before settling.
    OutElastic,
    /// Bounces against 1 before settling.
    OutBounce,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier {
        /// First control point, x (in `[0, 1]`).
        x1: f64,
        /// First control point, y.
        y1: f64,
        /// Second control point, x (in `[0, 1]`).
        x2: f64,
        /// Second control point, y.
        y2: f64,
    },
}

impl Ease {
    /// Map linear progress in `[0, 1]` to eased progress. Input is clamped; output may leave
    /// `[0, 1]` for the overshooting curves.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InSine => 1.0 - (t * PI / 2.0).cos(),
            Self::OutSine => (t * PI / 2.0).sin(),
            Self::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::OutBack => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
            Self::OutElastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let c4 = (2.0 * PI) / 3.0;
                2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
            }
            Self::OutBounce => out_bounce(t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn out_bounce(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

impl FromStr for Ease {
    type Err = SegmentError;

    /// Accepts snake_case or kebab-case names (`out_cubic`, `in-out-sine`) and CSS
    /// `cubic-bezier(x1, y1, x2, y2)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("cubic-bezier(")
            .or_else(|| lower.strip_prefix("cubic_bezier("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_bezier_args(args, s);
        }
        let name = lower.replace('-', "_");
        let ease = match name.as_str() {
            "linear" => Self::Linear,
            "in_quad" => Self::InQuad,
            "out_quad" => Self::OutQuad,
            "in_out_quad" => Self::InOutQuad,
            "in_cubic" => Self::InCubic,
            "out_cubic" => Self::OutCubic,
            "in_out_cubic" => Self::InOutCubic,
            "in_sine" => Self::InSine,
            "out_sine" => Self::OutSine,
            "in_out_sine" => Self::InOutSine,
            "out_back" => Self::OutBack,
            "out_elastic" => Self::OutElastic,
            "out_bounce" => Self::OutBounce,
            _ => return Err(SegmentError::validation(format!("unknown ease '{s}'"))),
        };
        Ok(ease)
    }
}

fn parse_bezier_args(args: &str, input: &str) -> SegmentResult<Ease> {
    let nums = args
        .split(',')
        .map(|a| a.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SegmentError::validation(format!("ease '{input}': {e}")))?;
    let &[x1, y1, x2, y2] = nums.as_slice() else {
        return Err(SegmentError::validation(format!(
            "ease '{input}': expected 4 control values"
        )));
    };
    if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) || !y1.is_finite() || !y2.is_finite()
    {
        return Err(SegmentError::validation(format!(
            "ease '{input}': x control values must lie in [0, 1]"
        )));
    }
    Ok(Ease::CubicBezier { x1, y1, x2, y2 })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
