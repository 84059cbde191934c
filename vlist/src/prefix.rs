use alloc::vec::Vec;

/// Cumulative item offsets for a variable-size strip.
///
/// `starts[i]` is the offset at which item `i` begins and `starts[len]` is the total extent. The
/// table is accumulated left to right, in the same order as the reference scan in
/// `crate::geometry`, so lookups reproduce its results bit for bit.
///
/// The raw extents are kept alongside: `starts[i + 1] - starts[i]` loses precision once the
/// running sum dwarfs an item.
#[derive(Clone, Debug, Default)]
pub(crate) struct PrefixSums {
    starts: Vec<f64>,
    extents: Vec<f64>,
}

impl PrefixSums {
    pub(crate) fn from_fn(len: usize, mut extent_of: impl FnMut(usize) -> f64) -> Self {
        let mut starts = Vec::with_capacity(len + 1);
        let mut extents = Vec::with_capacity(len);
        let mut acc = 0.0;
        starts.push(acc);
        for i in 0..len {
            let extent = extent_of(i);
            acc += extent;
            starts.push(acc);
            extents.push(extent);
        }
        Self { starts, extents }
    }

    pub(crate) fn len(&self) -> usize {
        self.starts.len().saturating_sub(1)
    }

    /// Sum of the first `count` extents (clamped to `len`).
    pub(crate) fn prefix_sum(&self, count: usize) -> f64 {
        let i = count.min(self.len());
        self.starts.get(i).copied().unwrap_or(0.0)
    }

    pub(crate) fn total(&self) -> f64 {
        self.prefix_sum(self.len())
    }

    /// Extent of item `index`, or `None` if out of bounds.
    pub(crate) fn extent(&self, index: usize) -> Option<f64> {
        self.extents.get(index).copied()
    }

    /// Index of the first item whose end lies strictly after `offset`, or `len` if none does.
    pub(crate) fn first_ending_after(&self, offset: f64) -> usize {
        self.starts
            .get(1..)
            .map_or(0, |ends| ends.partition_point(|&end| end <= offset))
    }

    /// Number of items, starting at `from`, whose start lies strictly before `limit`.
    pub(crate) fn count_starting_before(&self, from: usize, limit: f64) -> usize {
        let len = self.len();
        if from >= len {
            return 0;
        }
        self.starts[from..len].partition_point(|&start| start < limit)
    }
}
