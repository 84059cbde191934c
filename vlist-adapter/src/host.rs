use alloc::vec::Vec;

use crate::ViewportStyle;

/// Identifies an element the reconciler asked the host to attach.
///
/// Ids are unique for the lifetime of a list instance and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(pub(crate) u64);

impl ElementId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// One element to append to the content container.
#[derive(Clone, Debug, PartialEq)]
pub struct Mount<E> {
    pub id: ElementId,
    pub index: usize,
    pub element: E,
}

/// The rendering target a list binds to.
///
/// This is the only place concrete UI work happens. The reconciler decides *what* to attach,
/// hide and remove; the host decides *how* (DOM nodes, terminal rows, retained widgets...).
/// All batch methods are called with every element of one pass at once, so hosts can apply them
/// in a single layout operation.
pub trait VisualHost {
    /// The element type produced by the item factory.
    type Element;

    /// Applies viewport size and vertical scrolling. Called once on construction.
    fn configure_viewport(&mut self, style: ViewportStyle);

    /// Current size of the viewport along the scroll axis.
    fn viewport_extent(&self) -> f64;

    /// Sizes the content container to the total content extent.
    fn set_content_extent(&mut self, extent: f64);

    /// Appends a batch of new elements without touching existing ones.
    fn attach(&mut self, batch: Vec<Mount<Self::Element>>);

    /// Hides superseded elements. They stay attached until a later [`VisualHost::detach`].
    fn retire(&mut self, ids: &[ElementId]);

    /// Removes elements from the content container.
    fn detach(&mut self, ids: &[ElementId]);

    /// Moves the viewport's scroll position and returns the offset actually applied.
    ///
    /// Hosts that echo programmatic scrolls back as scroll signals are fine: a repeated signal
    /// for the same offset only restarts the quiet period.
    fn scroll_to(&mut self, offset: f64) -> f64;
}

/// A retained element in a [`MemoryHost`].
#[derive(Clone, Debug, PartialEq)]
pub struct HostedElement<E> {
    pub id: ElementId,
    pub index: usize,
    pub element: E,
    pub hidden: bool,
}

/// A headless [`VisualHost`] that keeps elements in memory.
///
/// Useful for terminal UIs that repaint from a list of rows, and for tests. Scroll positions are
/// clamped to `[0, content_extent - viewport_extent]` like a browser scroll container.
#[derive(Clone, Debug)]
pub struct MemoryHost<E> {
    viewport_extent: f64,
    viewport_style: Option<ViewportStyle>,
    content_extent: f64,
    scroll_offset: f64,
    elements: Vec<HostedElement<E>>,
    attach_batches: usize,
    detach_batches: usize,
}

impl<E> MemoryHost<E> {
    pub fn new(viewport_extent: f64) -> Self {
        Self {
            viewport_extent,
            viewport_style: None,
            content_extent: 0.0,
            scroll_offset: 0.0,
            elements: Vec::new(),
            attach_batches: 0,
            detach_batches: 0,
        }
    }

    /// Simulates a resize of the viewport.
    pub fn set_viewport_extent(&mut self, viewport_extent: f64) {
        self.viewport_extent = viewport_extent;
    }

    pub fn viewport_style(&self) -> Option<ViewportStyle> {
        self.viewport_style
    }

    pub fn content_extent(&self) -> f64 {
        self.content_extent
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn max_scroll_offset(&self) -> f64 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }

    /// Every attached element, hidden ones included, in attachment order.
    pub fn elements(&self) -> &[HostedElement<E>] {
        &self.elements
    }

    /// Attached elements that are not hidden.
    pub fn visible_elements(&self) -> impl Iterator<Item = &HostedElement<E>> {
        self.elements.iter().filter(|e| !e.hidden)
    }

    /// Indexes of the visible elements, in attachment order.
    pub fn visible_indexes(&self) -> Vec<usize> {
        self.visible_elements().map(|e| e.index).collect()
    }

    pub fn attach_batches(&self) -> usize {
        self.attach_batches
    }

    pub fn detach_batches(&self) -> usize {
        self.detach_batches
    }
}

impl<E> VisualHost for MemoryHost<E> {
    type Element = E;

    fn configure_viewport(&mut self, style: ViewportStyle) {
        self.viewport_style = Some(style);
        if let crate::Dimension::Px(h) = style.height {
            self.viewport_extent = h;
        }
    }

    fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    fn set_content_extent(&mut self, extent: f64) {
        self.content_extent = extent;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    fn attach(&mut self, batch: Vec<Mount<E>>) {
        self.attach_batches += 1;
        self.elements
            .extend(batch.into_iter().map(|m| HostedElement {
                id: m.id,
                index: m.index,
                element: m.element,
                hidden: false,
            }));
    }

    fn retire(&mut self, ids: &[ElementId]) {
        for e in self.elements.iter_mut() {
            if ids.contains(&e.id) {
                e.hidden = true;
            }
        }
    }

    fn detach(&mut self, ids: &[ElementId]) {
        self.detach_batches += 1;
        self.elements.retain(|e| !ids.contains(&e.id));
    }

    fn scroll_to(&mut self, offset: f64) -> f64 {
        self.scroll_offset = offset.clamp(0.0, self.max_scroll_offset());
        self.scroll_offset
    }
}
