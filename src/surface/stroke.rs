use std::ops::Range;

use kurbo::{ParamCurve, ParamCurveArclen};

use crate::{
    foundation::core::{BezPath, PathSeg, Point},
    foundation::error::{SegmentError, SegmentResult},
    geometry::dash::DashArray,
    surface::PathSurface,
};

const ARCLEN_ACCURACY: f64 = 1e-6;
const PEN_EPSILON: f64 = 1e-9;

/// A stroked [`BezPath`] that keeps the dash state applied to it.
///
/// Length is measured once, by summing segment arc lengths across all subpaths (closing segments
/// included), and treated as one continuous parameterization.
#[derive(Clone, Debug)]
pub struct StrokePath {
    path: BezPath,
    seg_lengths: Vec<f64>,
    dash: Option<DashArray>,
    offset: f64,
}

impl StrokePath {
    /// Wrap a path and measure its segments.
    pub fn new(path: BezPath) -> Self {
        let seg_lengths = path
            .segments()
            .map(|seg| seg.arclen(ARCLEN_ACCURACY))
            .collect();
        Self {
            path,
            seg_lengths,
            dash: None,
            offset: 0.0,
        }
    }

    /// Parse SVG path data (`d` attribute).
    pub fn from_svg(d: &str) -> SegmentResult<Self> {
        let path = BezPath::from_svg(d.trim())
            .map_err(|e| SegmentError::validation(format!("invalid svg path data: {e}")))?;
        Ok(Self::new(path))
    }

    /// The underlying geometry.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Last applied dash descriptor, if any.
    pub fn dash_array(&self) -> Option<&DashArray> {
        self.dash.as_ref()
    }

    /// Last applied dash offset.
    pub fn dash_offset(&self) -> f64 {
        self.offset
    }

    /// Visible sub-ranges of the stroke under the current dash state. An undashed stroke is
    /// fully visible.
    pub fn visible_ranges(&self) -> Vec<Range<f64>> {
        let total = self.total_length();
        match &self.dash {
            Some(dash) => dash.visible_ranges_at(total, self.offset),
            None if total > 0.0 => vec![0.0..total],
            None => Vec::new(),
        }
    }

    /// The visible portion of the stroke as geometry, one subpath per visible run.
    pub fn visible_path(&self) -> BezPath {
        let mut out = BezPath::new();
        for range in self.visible_ranges() {
            let mut pen: Option<Point> = None;
            let mut seg_start = 0.0;
            for (seg, &len) in self.path.segments().zip(&self.seg_lengths) {
                let seg_end = seg_start + len;
                let lo = range.start.max(seg_start);
                let hi = range.end.min(seg_end);
                if hi > lo && len > 0.0 {
                    let t0 = if lo <= seg_start {
                        0.0
                    } else {
                        seg.inv_arclen(lo - seg_start, ARCLEN_ACCURACY)
                    };
                    let t1 = if hi >= seg_end {
                        1.0
                    } else {
                        seg.inv_arclen(hi - seg_start, ARCLEN_ACCURACY)
                    };
                    let sub = seg.subsegment(t0..t1);
                    let start = sub.start();
                    if !pen.is_some_and(|p| p.distance(start) < PEN_EPSILON) {
                        out.move_to(start);
                    }
                    push_seg(&mut out, sub);
                    pen = Some(sub.end());
                }
                seg_start = seg_end;
            }
        }
        out
    }
}

fn push_seg(out: &mut BezPath, seg: PathSeg) {
    match seg {
        PathSeg::Line(l) => out.line_to(l.p1),
        PathSeg::Quad(q) => out.quad_to(q.p1, q.p2),
        PathSeg::Cubic(c) => out.curve_to(c.p1, c.p2, c.p3),
    }
}

impl PathSurface for StrokePath {
    fn total_length(&self) -> f64 {
        self.seg_lengths.iter().sum()
    }

    fn apply_dash_array(&mut self, dash: &DashArray) {
        self.dash = Some(dash.clone());
    }

    fn apply_dash_offset(&mut self, offset: f64) {
        self.offset = offset;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/stroke.rs"]
mod tests;
