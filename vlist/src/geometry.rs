//! Reference window math.
//!
//! These functions recompute everything from the size model on each call: O(1) for fixed-size
//! lists, an O(n) scan from index 0 for variable-size lists. [`crate::Layout`] caches prefix
//! sums for the variable path and must agree with these functions exactly.

use crate::{ExtentFn, Overscan, SizeModel, Window};

/// Total content extent of a list with `len` items.
pub fn total_extent(len: usize, model: &SizeModel) -> f64 {
    match model {
        SizeModel::Fixed(h) => len as f64 * h,
        SizeModel::Variable(f) => (0..len).fold(0.0, |acc, i| acc + f(i)),
    }
}

/// Computes the overscanned window for a scroll position.
///
/// - Fixed size: `first = trunc(offset / h)` and `visible = trunc(viewport / h)`.
/// - Variable size: `first` is the first item whose span reaches past `offset`; items are then
///   counted while their start lies before `offset + viewport_extent`.
///
/// Both paths then widen by `overscan` and clamp to `[0, len]`. An offset past the end of the
/// content clamps `first` to `len` on either path and yields the trailing range
/// `[len - overscan.before, len)`.
pub fn compute_window(
    offset: f64,
    viewport_extent: f64,
    len: usize,
    model: &SizeModel,
    overscan: Overscan,
) -> Window {
    if len == 0 {
        return Window::EMPTY;
    }
    let offset = non_negative(offset);
    let viewport_extent = non_negative(viewport_extent);

    let (first, visible) = match model {
        SizeModel::Fixed(h) => (trunc_index(offset / h), trunc_index(viewport_extent / h)),
        SizeModel::Variable(f) => scan_visible(f, len, offset, viewport_extent),
    };
    vtrace!(offset, viewport_extent, first, visible, "compute_window");
    Window::overscanned(first, visible, overscan, len)
}

/// Scroll offset at which item `index` starts. `index` is clamped to `len`, so any index past the
/// end maps to the bottom of the list.
pub fn offset_for_index(index: usize, len: usize, model: &SizeModel) -> f64 {
    let index = index.min(len);
    match model {
        SizeModel::Fixed(h) => index as f64 * h,
        SizeModel::Variable(f) => (0..index).fold(0.0, |acc, i| acc + f(i)),
    }
}

fn scan_visible(f: &ExtentFn, len: usize, offset: f64, viewport_extent: f64) -> (usize, usize) {
    let mut start = 0.0;
    let mut first = len;
    for i in 0..len {
        let end = start + f(i);
        if end > offset {
            first = i;
            break;
        }
        start = end;
    }
    if first == len || viewport_extent <= 0.0 {
        return (first, 0);
    }

    let limit = offset + viewport_extent;
    let mut visible = 0;
    for i in first..len {
        if start >= limit {
            break;
        }
        visible += 1;
        start += f(i);
    }
    (first, visible)
}

/// `trunc` for non-negative ratios. NaN maps to 0, infinities saturate.
pub(crate) fn trunc_index(ratio: f64) -> usize {
    if ratio.is_nan() || ratio <= 0.0 {
        0
    } else {
        ratio as usize
    }
}

/// Negative and NaN offsets/extents are treated as 0.
pub(crate) fn non_negative(v: f64) -> f64 {
    if v > 0.0 { v } else { 0.0 }
}
