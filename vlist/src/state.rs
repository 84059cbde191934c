/// A lightweight, serializable snapshot of the viewport geometry.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    /// Distance scrolled from the top of the content, in the list's units (usually pixels).
    pub scroll_offset: f64,
    /// Size of the visible area along the scroll axis.
    pub viewport_extent: f64,
}

impl ViewportState {
    pub fn new(scroll_offset: f64, viewport_extent: f64) -> Self {
        Self {
            scroll_offset,
            viewport_extent,
        }
    }

    /// End of the visible area (`scroll_offset + viewport_extent`).
    pub fn scroll_end(&self) -> f64 {
        self.scroll_offset + self.viewport_extent
    }
}

/// Where a list is in its scroll lifecycle.
///
/// `Idle → Scrolling` on the first scroll signal, `Scrolling → Settling` once the quiet period
/// elapses, and `Settling → Idle` after the final full-fidelity render. A scroll signal in any
/// state moves back to `Scrolling`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    #[default]
    Idle,
    Scrolling,
    Settling,
}

impl ScrollPhase {
    /// The flag handed to item factories: `true` only while scroll signals keep arriving.
    pub fn is_scrolling(self) -> bool {
        matches!(self, Self::Scrolling)
    }
}

/// A combined snapshot of viewport geometry and scroll lifecycle.
///
/// Useful for restoring UI state across sessions without coupling to a rendering target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub viewport: ViewportState,
    pub phase: ScrollPhase,
}
