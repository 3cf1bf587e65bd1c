use std::f64::consts::PI;

use study_core::model::{SessionStatus, StatusBreakdown};

/// Center and radius of the pie chart in SVG user units (view box is 200x200).
pub const PIE_CENTER: f64 = 100.0;
pub const PIE_RADIUS: f64 = 90.0;

/// A slice of the status distribution pie, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusSliceVm {
    pub label: &'static str,
    pub count: u32,
    pub percent_str: String,
    pub color: &'static str,
    /// SVG path for the slice. Empty when the slice covers the whole circle.
    pub path: String,
    pub sweep_degrees: f64,
}

impl StatusSliceVm {
    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        self.path.is_empty()
    }
}

/// One row of the count-by-status table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusCountRowVm {
    pub status: &'static str,
    pub count: u32,
}

#[must_use]
pub fn status_color(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Planned => "#5DADE2",
        SessionStatus::InProgress => "#F5B041",
        SessionStatus::Completed => "#58D68D",
    }
}

#[must_use]
pub fn map_status_counts(breakdown: &StatusBreakdown) -> Vec<StatusCountRowVm> {
    breakdown
        .entries()
        .iter()
        .map(|entry| StatusCountRowVm {
            status: entry.status.as_str(),
            count: entry.count,
        })
        .collect()
}

/// Lay out pie slices clockwise from twelve o'clock, in breakdown order.
#[must_use]
pub fn map_status_slices(breakdown: &StatusBreakdown) -> Vec<StatusSliceVm> {
    let mut start = 0.0_f64;
    let mut slices = Vec::with_capacity(breakdown.entries().len());
    for entry in breakdown.entries() {
        let share = breakdown.share(entry.status);
        let sweep = share * 360.0;
        let end = start + sweep;
        let path = if share >= 1.0 {
            String::new()
        } else {
            slice_path(start, end)
        };
        slices.push(StatusSliceVm {
            label: entry.status.as_str(),
            count: entry.count,
            percent_str: format!("{:.1}%", share * 100.0),
            color: status_color(entry.status),
            path,
            sweep_degrees: sweep,
        });
        start = end;
    }
    slices
}

fn point_at(degrees: f64) -> (f64, f64) {
    // 0 degrees is twelve o'clock; SVG y grows downwards.
    let radians = (degrees - 90.0) * PI / 180.0;
    (
        PIE_CENTER + PIE_RADIUS * radians.cos(),
        PIE_CENTER + PIE_RADIUS * radians.sin(),
    )
}

fn slice_path(start: f64, end: f64) -> String {
    let (x1, y1) = point_at(start);
    let (x2, y2) = point_at(end);
    let large_arc = u8::from(end - start > 180.0);
    format!(
        "M {c:.3} {c:.3} L {x1:.3} {y1:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x2:.3} {y2:.3} Z",
        c = PIE_CENTER,
        r = PIE_RADIUS,
    )
}
