//! Render reconciler for the `vlist` crate.
//!
//! `vlist` answers which indexes are visible; this crate keeps a set of rendered elements in
//! step with that answer as the user scrolls:
//!
//! - mounted element bookkeeping with a declarative plan per pass ([`Reconciler`])
//! - flicker-free replacement: outgoing elements are hidden, then removed in one batch on the
//!   next frame
//! - scroll signal coalescing (at most one render per frame) and a debounced "settled" pass
//! - data replacement and scroll-to-index ([`VirtualList`])
//!
//! Concrete UI work goes through two small capabilities supplied by the adapter: a
//! [`VisualHost`] (attach/hide/detach elements, size the content, scroll the viewport) and a
//! [`FrameScheduler`] (clock, next-frame request, one-shot wakeup). [`MemoryHost`] and
//! [`ManualScheduler`] are headless implementations for terminal UIs and tests.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod host;
mod list;
mod options;
mod reconciler;
mod scheduler;
mod style;


pub use host::{ElementId, HostedElement, MemoryHost, Mount, VisualHost};
pub use list::VirtualList;
pub use options::{DEFAULT_QUIET_PERIOD_MS, RenderItem, VirtualListOptions};
pub use reconciler::{PassReport, Reconciler};
pub use scheduler::{FrameScheduler, ManualScheduler};
pub use style::{Dimension, ItemStyle, ViewportStyle};
