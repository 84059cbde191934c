use core::ops::Range;

/// Extra items kept mounted outside the strictly visible range.
///
/// `before` widens the window towards index 0, `after` towards the end of the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overscan {
    pub before: usize,
    pub after: usize,
}

impl Overscan {
    pub const NONE: Self = Self {
        before: 0,
        after: 0,
    };

    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Same overscan on both sides.
    pub fn symmetric(n: usize) -> Self {
        Self::new(n, n)
    }
}

/// A contiguous range of item indexes eligible for rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start: usize,
    pub end: usize, // exclusive
}

impl Window {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Window: start > end ({start} > {end})");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn indexes(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Applies overscan around a visible run `[first, first + visible)` and clamps to `[0, len]`.
    ///
    /// A `first` past the end counts as `len`, so overscan still reaches back into the tail.
    pub(crate) fn overscanned(first: usize, visible: usize, overscan: Overscan, len: usize) -> Self {
        let first = first.min(len);
        let start = first.saturating_sub(overscan.before);
        let end = first
            .saturating_add(visible)
            .saturating_add(overscan.after)
            .min(len);
        Self {
            start,
            end: end.max(start),
        }
    }
}

impl IntoIterator for Window {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.indexes()
    }
}
