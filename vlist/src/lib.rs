//! Windowing geometry for virtual lists.
//!
//! For the render reconciler (mounted elements, frame coalescing, scroll settling), see the
//! `vlist-adapter` crate.
//!
//! This crate answers one question as cheaply as possible: given a scroll offset and a viewport
//! extent, which contiguous range of item indexes should be rendered? It covers:
//! - total content extent for fixed-size and variable-size (per-index) lists
//! - the visible window, widened by asymmetric overscan
//! - index → scroll offset conversion for scroll-to-index
//!
//! It is UI-agnostic and holds no UI objects. [`geometry`] contains the reference math;
//! [`Layout`] wraps a [`SizeModel`] and caches prefix sums for variable-size lists.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
pub mod geometry;
mod layout;
mod prefix;
mod size;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use layout::Layout;
pub use size::{ExtentFn, ItemSize, SizeModel};
pub use state::{ScrollPhase, ScrollState, ViewportState};
pub use types::{Overscan, Window};
