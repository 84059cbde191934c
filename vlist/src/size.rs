use alloc::sync::Arc;
use core::fmt;

use crate::ConfigError;

/// A per-index extent function for heterogeneous item heights.
///
/// The function is assumed to be pure for a given dataset length.
pub type ExtentFn = Arc<dyn Fn(usize) -> f64 + Send + Sync>;

/// The item size as supplied by the caller, before it is checked against `fixed_size`.
#[derive(Clone)]
pub enum ItemSize {
    /// Every item has the same extent.
    Fixed(f64),
    /// Each item's extent comes from a function of its index.
    PerIndex(ExtentFn),
}

impl ItemSize {
    pub fn per_index(f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::PerIndex(Arc::new(f))
    }
}

impl From<f64> for ItemSize {
    fn from(extent: f64) -> Self {
        Self::Fixed(extent)
    }
}

impl fmt::Debug for ItemSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::PerIndex(_) => f.write_str("PerIndex(..)"),
        }
    }
}

/// A validated size model. Immutable for the lifetime of a list.
///
/// Invariants:
/// - `Fixed(h)`: `h` is finite and `> 0`.
/// - `Variable(f)`: `f(i)` is finite and `>= 0` for every valid index (checked per dataset via
///   [`SizeModel::validate`]).
#[derive(Clone)]
pub enum SizeModel {
    Fixed(f64),
    Variable(ExtentFn),
}

impl SizeModel {
    /// Creates a fixed-size model. Fails unless `extent` is positive and finite.
    pub fn fixed(extent: f64) -> Result<Self, ConfigError> {
        if !(extent.is_finite() && extent > 0.0) {
            vwarn!(extent, "SizeModel::fixed: rejected extent");
            return Err(ConfigError::NonPositiveExtent(extent));
        }
        Ok(Self::Fixed(extent))
    }

    pub fn variable(f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::Variable(Arc::new(f))
    }

    /// Resolves a caller-supplied item size against the `fixed_size` flag.
    ///
    /// The shape of `item_size` must agree with the flag: a number for fixed-size lists, a
    /// per-index function otherwise.
    pub fn from_item_size(item_size: ItemSize, fixed_size: bool) -> Result<Self, ConfigError> {
        match (item_size, fixed_size) {
            (ItemSize::Fixed(extent), true) => Self::fixed(extent),
            (ItemSize::PerIndex(f), false) => Ok(Self::Variable(f)),
            (_, fixed_size) => {
                vwarn!(fixed_size, "item size does not match fixed_size");
                Err(ConfigError::SizeModelMismatch { fixed_size })
            }
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// The uniform extent, if this is a fixed-size model.
    pub fn fixed_extent(&self) -> Option<f64> {
        match self {
            Self::Fixed(h) => Some(*h),
            Self::Variable(_) => None,
        }
    }

    /// Extent of the item at `index`. Does not bounds-check; the caller owns the dataset length.
    pub fn extent_of(&self, index: usize) -> f64 {
        match self {
            Self::Fixed(h) => *h,
            Self::Variable(f) => f(index),
        }
    }

    /// Checks the per-index invariant for a dataset of `len` items.
    ///
    /// Fixed models were validated on construction and always pass.
    pub fn validate(&self, len: usize) -> Result<(), ConfigError> {
        let Self::Variable(f) = self else {
            return Ok(());
        };
        for index in 0..len {
            let extent = f(index);
            if !(extent.is_finite() && extent >= 0.0) {
                vwarn!(index, extent, "SizeModel::validate: invalid extent");
                return Err(ConfigError::InvalidData { index, extent });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SizeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::Variable(_) => f.write_str("Variable(..)"),
        }
    }
}
