use std::{fmt, ops::Range};

use smallvec::SmallVec;

const MAX_WALK_STEPS: usize = 1 << 16;

/// Alternating dash/gap lengths as applied to a stroke (`stroke-dasharray`).
///
/// Descriptors produced by [`compute_descriptor`] are meant to be applied together with the
/// offset returned by [`dash_offset`]. Read from that offset, the pattern hides everything outside
/// the requested sub-range and repeats past the end of the path without leaving visible artifacts.
#[derive(Clone, Debug, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DashArray(SmallVec<[f64; 6]>);

impl DashArray {
    /// Build a descriptor from raw lengths.
    pub fn from_slice(lengths: &[f64]) -> Self {
        Self(SmallVec::from_slice(lengths))
    }

    /// Descriptor showing the whole path.
    pub fn full(total_length: f64) -> Self {
        Self::from_slice(&[total_length, total_length, total_length])
    }

    /// Descriptor showing nothing (a zero-length dash at the start of the path).
    pub fn hidden(total_length: f64) -> Self {
        Self::from_slice(&[total_length, total_length, 0.0])
    }

    /// Raw lengths in application order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the descriptor has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sub-ranges of `[0, total_length]` a renderer shows when this descriptor is applied with
    /// [`dash_offset`]`(total_length)`.
    ///
    /// Follows SVG dashing rules: entries alternate dash/gap starting with a dash, an odd-length
    /// list is repeated once to make it even, and a pattern that sums to zero renders solid.
    /// Adjacent visible runs are merged. Negative or non-finite entries invalidate the whole
    /// pattern, which then also renders solid. So does a pattern that would need more than 65 536
    /// dash entries to cover the path, since it is too fine to resolve run by run.
    pub fn visible_ranges(&self, total_length: f64) -> Vec<Range<f64>> {
        self.visible_ranges_at(total_length, dash_offset(total_length))
    }

    /// Like [`DashArray::visible_ranges`] with an explicit dash offset.
    pub fn visible_ranges_at(&self, total_length: f64, offset: f64) -> Vec<Range<f64>> {
        let mut out: Vec<Range<f64>> = Vec::new();
        if !(total_length > 0.0) || !total_length.is_finite() {
            return out;
        }

        let mut pattern: SmallVec<[f64; 12]> = self.0.iter().copied().collect();
        if pattern.len() % 2 == 1 {
            pattern.extend_from_slice(&self.0);
        }
        let period: f64 = pattern.iter().sum();
        let invalid = pattern.iter().any(|v| !v.is_finite() || *v < 0.0);
        if pattern.is_empty() || invalid || !(period > 0.0) {
            out.push(0.0..total_length);
            return out;
        }

        // Dash entries the walk may visit; finer patterns are treated as solid.
        let steps_needed = (total_length / period).ceil() * pattern.len() as f64;
        if !(steps_needed <= MAX_WALK_STEPS as f64) {
            tracing::debug!(total_length, period, "dash pattern too fine to walk; rendering solid");
            out.push(0.0..total_length);
            return out;
        }

        let mut idx = 0usize;
        let mut into = if offset.is_finite() {
            offset.rem_euclid(period)
        } else {
            0.0
        };
        for _ in 0..pattern.len() {
            if into < pattern[idx] {
                break;
            }
            into -= pattern[idx];
            idx = (idx + 1) % pattern.len();
        }
        let mut remaining = (pattern[idx] - into).max(0.0);

        let mut pos = 0.0;
        let mut steps = 0usize;
        while pos < total_length && steps <= MAX_WALK_STEPS + pattern.len() {
            let step = remaining.min(total_length - pos);
            if idx % 2 == 0 && step > 0.0 {
                match out.last_mut() {
                    Some(last) if last.end == pos => last.end = pos + step,
                    _ => out.push(pos..pos + step),
                }
            }
            pos += step;
            idx = (idx + 1) % pattern.len();
            remaining = pattern[idx];
            steps += 1;
        }
        out
    }
}

impl fmt::Display for DashArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Dash offset paired with every descriptor: two full path lengths into the pattern.
pub fn dash_offset(total_length: f64) -> f64 {
    total_length * 2.0
}

/// Shift a pair by whole multiples of `total_length` into the canonical window.
///
/// The multiple is taken from `begin` when the pair is reversed or `begin` lies more than one
/// length before the start; otherwise from `end`. Division truncates toward zero.
pub fn fold_range(begin: f64, end: f64, total_length: f64) -> (f64, f64) {
    if !(total_length > 0.0) {
        return (begin, end);
    }
    let division = if begin > end || begin < -total_length {
        (begin / total_length).trunc()
    } else {
        (end / total_length).trunc()
    };
    if division == 0.0 {
        return (begin, end);
    }
    let shift = total_length * division;
    (begin - shift, end - shift)
}

/// Encode the sub-range `begin..end` of a path of `total_length` as a dash descriptor.
///
/// In circular mode the pair is first folded with [`fold_range`]. Then:
///
/// - `0 <= begin <= end <= total_length` yields `[L, L + begin, end - begin]`.
/// - `end > total_length` yields `[L, L, plus, begin - plus, end - begin]` where
///   `plus = end - total_length` is the part that reappears at the start.
/// - `begin < 0` yields `[L, L + begin, end - begin, L + begin - end, L]`, or with a trailing
///   `end - begin` dash before the final `L` when `end` is negative too.
///
/// Degenerate input never fails: a non-positive length gives an all-zero descriptor, non-finite
/// endpoints give [`DashArray::hidden`], a reversed pair is encoded in ascending order, and a span
/// longer than the path gives [`DashArray::full`]. Pairs outside `[-L, 2L]` are folded even when
/// not circular, so no entry is ever negative.
pub fn compute_descriptor(begin: f64, end: f64, total_length: f64, circular: bool) -> DashArray {
    let length = total_length;
    if !(length > 0.0) {
        return DashArray::from_slice(&[0.0, 0.0, 0.0]);
    }
    if !begin.is_finite() || !end.is_finite() {
        return DashArray::hidden(length);
    }

    let (mut begin, mut end) = if circular {
        fold_range(begin, end, length)
    } else {
        (begin, end)
    };
    if end < begin {
        std::mem::swap(&mut begin, &mut end);
    }
    if begin < -length || end > length * 2.0 {
        (begin, end) = fold_range(begin, end, length);
    }

    let span = end - begin;
    if span > length {
        return DashArray::full(length);
    }

    if end > length {
        let plus = end - length;
        return DashArray::from_slice(&[length, length, plus, begin - plus, span]);
    }
    if begin < 0.0 {
        let minus = length + begin;
        if end < 0.0 {
            return DashArray::from_slice(&[length, minus, span, minus - end, span, length]);
        }
        return DashArray::from_slice(&[length, minus, span, minus - end, length]);
    }
    DashArray::from_slice(&[length, length + begin, span])
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/dash.rs"]
mod tests;
