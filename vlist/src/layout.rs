use crate::geometry::{non_negative, trunc_index};
use crate::prefix::PrefixSums;
use crate::{ConfigError, Overscan, SizeModel, ViewportState, Window};

/// The geometry engine for one list instance.
///
/// Pairs an immutable [`SizeModel`] with the current dataset length. For variable-size models it
/// caches a prefix-sum table so window and offset queries are `O(log n)` instead of a full scan;
/// the results are identical to the functions in [`crate::geometry`].
///
/// The cache is rebuilt when the dataset is replaced ([`Layout::set_len`]) or when the caller
/// signals that per-index extents may have changed ([`Layout::refresh`]).
#[derive(Clone, Debug)]
pub struct Layout {
    model: SizeModel,
    len: usize,
    sums: PrefixSums, // empty for fixed-size models
}

impl Layout {
    pub fn new(model: SizeModel, len: usize) -> Self {
        let mut layout = Self {
            model,
            len,
            sums: PrefixSums::default(),
        };
        layout.rebuild();
        layout
    }

    /// Like [`Layout::new`], but checks the size model against every index first.
    pub fn try_new(model: SizeModel, len: usize) -> Result<Self, ConfigError> {
        model.validate(len)?;
        Ok(Self::new(model, len))
    }

    pub fn model(&self) -> &SizeModel {
        &self.model
    }

    pub fn is_fixed(&self) -> bool {
        self.model.is_fixed()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Updates the item count after the dataset was replaced.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.rebuild();
    }

    /// Re-reads every per-index extent. No-op for fixed-size models.
    pub fn refresh(&mut self) {
        self.rebuild();
    }

    pub fn total_extent(&self) -> f64 {
        match &self.model {
            SizeModel::Fixed(h) => self.len as f64 * h,
            SizeModel::Variable(_) => self.sums.total(),
        }
    }

    pub fn extent_of(&self, index: usize) -> Option<f64> {
        if index >= self.len {
            return None;
        }
        match &self.model {
            SizeModel::Fixed(h) => Some(*h),
            SizeModel::Variable(_) => self.sums.extent(index),
        }
    }

    /// Start offset of item `index`, or `None` if out of bounds.
    pub fn start_of(&self, index: usize) -> Option<f64> {
        if index >= self.len {
            return None;
        }
        Some(self.offset_for_index(index))
    }

    /// Scroll offset for `index`, clamped to `[0, len]`; `len` maps to the bottom of the list.
    pub fn offset_for_index(&self, index: usize) -> f64 {
        let index = index.min(self.len);
        match &self.model {
            SizeModel::Fixed(h) => index as f64 * h,
            SizeModel::Variable(_) => self.sums.prefix_sum(index),
        }
    }

    /// Computes the overscanned window for a scroll offset and viewport extent.
    pub fn window(&self, offset: f64, viewport_extent: f64, overscan: Overscan) -> Window {
        if self.len == 0 {
            return Window::EMPTY;
        }
        let offset = non_negative(offset);
        let viewport_extent = non_negative(viewport_extent);

        let (first, visible) = match &self.model {
            SizeModel::Fixed(h) => (trunc_index(offset / h), trunc_index(viewport_extent / h)),
            SizeModel::Variable(_) => {
                let first = self.sums.first_ending_after(offset);
                if first == self.len || viewport_extent <= 0.0 {
                    (first, 0)
                } else {
                    let limit = offset + viewport_extent;
                    (first, self.sums.count_starting_before(first, limit))
                }
            }
        };
        Window::overscanned(first, visible, overscan, self.len)
    }

    pub fn window_for(&self, viewport: ViewportState, overscan: Overscan) -> Window {
        self.window(viewport.scroll_offset, viewport.viewport_extent, overscan)
    }

    fn rebuild(&mut self) {
        vdebug!(len = self.len, fixed = self.model.is_fixed(), "Layout::rebuild");
        self.sums = match &self.model {
            SizeModel::Fixed(_) => PrefixSums::default(),
            SizeModel::Variable(f) => PrefixSums::from_fn(self.len, |i| f(i)),
        };
    }
}
