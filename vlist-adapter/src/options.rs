use alloc::sync::Arc;
use alloc::vec::Vec;

use vlist::{ItemSize, Overscan};

use crate::{ItemStyle, VisualHost};

/// Builds the element for one item.
///
/// Arguments: `(index, is_scrolling, item, style)`. Must return a newly created element on every
/// call; elements are never reused across passes. `is_scrolling` lets callers render cheaper
/// placeholders mid-scroll; a full-fidelity pass follows once scrolling settles.
pub type RenderItem<T, E> = Arc<dyn Fn(usize, bool, &T, &ItemStyle) -> E + Send + Sync>;

/// Quiet period after the last scroll signal before the list settles.
pub const DEFAULT_QUIET_PERIOD_MS: u64 = 150;

/// Configuration for [`crate::VirtualList`].
///
/// Everything is validated eagerly by `VirtualList::new`: a missing container or item factory,
/// and an item size whose shape disagrees with `fixed_size`, are reported as
/// [`vlist::ConfigError`].
pub struct VirtualListOptions<T, H: VisualHost> {
    /// The viewport the list binds to. Required.
    pub container: Option<H>,
    pub data: Vec<T>,
    /// A number when `fixed_size` is set, a per-index function otherwise. Required.
    pub item_size: Option<ItemSize>,
    pub fixed_size: bool,
    pub overscan: Overscan,
    /// Viewport height in pixels; `None` fills the available space.
    pub height: Option<f64>,
    /// Viewport width in pixels; `None` fills the available space.
    pub width: Option<f64>,
    /// Required.
    pub render_item: Option<RenderItem<T, H::Element>>,

    /// Debounce for resetting `is_scrolling` after the last scroll signal.
    pub quiet_period_ms: u64,

    /// Whether `set_data` scrolls back to the top.
    ///
    /// Off by default: replacing the data keeps the current scroll offset, and the new data is
    /// rendered at that position.
    pub reset_scroll_on_set_data: bool,
}

impl<T, H: VisualHost> VirtualListOptions<T, H> {
    pub fn new() -> Self {
        Self {
            container: None,
            data: Vec::new(),
            item_size: None,
            fixed_size: false,
            overscan: Overscan::NONE,
            height: None,
            width: None,
            render_item: None,
            quiet_period_ms: DEFAULT_QUIET_PERIOD_MS,
            reset_scroll_on_set_data: false,
        }
    }

    pub fn with_container(mut self, container: H) -> Self {
        self.container = Some(container);
        self
    }

    pub fn with_data(mut self, data: Vec<T>) -> Self {
        self.data = data;
        self
    }

    /// Sets the raw item size. Pair with [`VirtualListOptions::with_fixed_size`].
    pub fn with_item_size(mut self, item_size: impl Into<ItemSize>) -> Self {
        self.item_size = Some(item_size.into());
        self
    }

    pub fn with_fixed_size(mut self, fixed_size: bool) -> Self {
        self.fixed_size = fixed_size;
        self
    }

    /// Every item is `extent` tall.
    pub fn with_fixed_item_size(self, extent: f64) -> Self {
        self.with_item_size(ItemSize::Fixed(extent))
            .with_fixed_size(true)
    }

    /// Item `i` is `extent_of(i)` tall.
    pub fn with_variable_item_size(
        self,
        extent_of: impl Fn(usize) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.with_item_size(ItemSize::per_index(extent_of))
            .with_fixed_size(false)
    }

    pub fn with_overscan(mut self, overscan: Overscan) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_height(mut self, height: Option<f64>) -> Self {
        self.height = height;
        self
    }

    pub fn with_width(mut self, width: Option<f64>) -> Self {
        self.width = width;
        self
    }

    pub fn with_render_item(
        mut self,
        render_item: impl Fn(usize, bool, &T, &ItemStyle) -> H::Element + Send + Sync + 'static,
    ) -> Self {
        let render_item: RenderItem<T, H::Element> = Arc::new(render_item);
        self.render_item = Some(render_item);
        self
    }

    pub fn with_quiet_period_ms(mut self, quiet_period_ms: u64) -> Self {
        self.quiet_period_ms = quiet_period_ms;
        self
    }

    pub fn with_reset_scroll_on_set_data(mut self, reset: bool) -> Self {
        self.reset_scroll_on_set_data = reset;
        self
    }
}

impl<T, H: VisualHost> Default for VirtualListOptions<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, H: VisualHost> core::fmt::Debug for VirtualListOptions<T, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualListOptions")
            .field("has_container", &self.container.is_some())
            .field("len", &self.data.len())
            .field("item_size", &self.item_size)
            .field("fixed_size", &self.fixed_size)
            .field("overscan", &self.overscan)
            .field("height", &self.height)
            .field("width", &self.width)
            .field("quiet_period_ms", &self.quiet_period_ms)
            .field("reset_scroll_on_set_data", &self.reset_scroll_on_set_data)
            .finish_non_exhaustive()
    }
}
