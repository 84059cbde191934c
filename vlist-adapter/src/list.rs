use alloc::vec::Vec;

use vlist::{ConfigError, Layout, Overscan, ScrollPhase, ScrollState, SizeModel, ViewportState};

use crate::{
    Dimension, FrameScheduler, PassReport, Reconciler, RenderItem, ViewportStyle, VirtualListOptions,
    VisualHost,
};

/// A virtual list bound to a [`VisualHost`].
///
/// Renders only the items in the current window (plus overscan) and keeps them in step with the
/// scroll position. The host event loop drives it:
/// - `on_scroll(offset)` for every scroll signal from the viewport
/// - `on_frame()` when a frame requested through the [`FrameScheduler`] fires
/// - `on_wakeup()` when the scheduled wakeup fires
///
/// Scroll signals are coalesced into at most one render per frame. Once no signal has arrived
/// for the quiet period, the list settles: `is_scrolling` drops to `false` and one final pass
/// re-renders the window at full fidelity.
///
/// Construction and [`VirtualList::set_data`] render synchronously before returning.
pub struct VirtualList<T, H: VisualHost, S: FrameScheduler> {
    host: H,
    scheduler: S,
    data: Vec<T>,
    layout: Layout,
    overscan: Overscan,
    render_item: RenderItem<T, H::Element>,
    quiet_period_ms: u64,
    reset_scroll_on_set_data: bool,

    viewport: ViewportState,
    phase: ScrollPhase,
    quiet_deadline_ms: Option<u64>,
    render_pending: bool,
    rendered_offset: Option<f64>,
    reconciler: Reconciler,
    disposed: bool,
}

impl<T, H: VisualHost, S: FrameScheduler> VirtualList<T, H, S> {
    /// Validates `options`, binds to the container and runs the first render pass.
    pub fn new(options: VirtualListOptions<T, H>, scheduler: S) -> Result<Self, ConfigError> {
        let VirtualListOptions {
            container,
            data,
            item_size,
            fixed_size,
            overscan,
            height,
            width,
            render_item,
            quiet_period_ms,
            reset_scroll_on_set_data,
        } = options;

        let mut host = container.ok_or(ConfigError::MissingOption("container"))?;
        let render_item = render_item.ok_or(ConfigError::MissingOption("render_item"))?;
        let item_size = item_size.ok_or(ConfigError::MissingOption("item_size"))?;
        let model = SizeModel::from_item_size(item_size, fixed_size)?;
        let layout = Layout::try_new(model, data.len())?;

        vdebug!(
            len = data.len(),
            fixed_size,
            before = overscan.before,
            after = overscan.after,
            quiet_period_ms,
            "VirtualList::new"
        );

        host.configure_viewport(ViewportStyle {
            width: Dimension::from_option(width),
            height: Dimension::from_option(height),
        });
        host.set_content_extent(layout.total_extent());
        let viewport_extent = host.viewport_extent();

        let mut list = Self {
            host,
            scheduler,
            data,
            layout,
            overscan,
            render_item,
            quiet_period_ms,
            reset_scroll_on_set_data,
            viewport: ViewportState::new(0.0, viewport_extent),
            phase: ScrollPhase::Idle,
            quiet_deadline_ms: None,
            render_pending: false,
            rendered_offset: None,
            reconciler: Reconciler::new(),
            disposed: false,
        };
        list.render();
        Ok(list)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to resize the viewport.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    pub fn overscan(&self) -> Overscan {
        self.overscan
    }

    pub fn total_extent(&self) -> f64 {
        self.layout.total_extent()
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn scroll_offset(&self) -> f64 {
        self.viewport.scroll_offset
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_scrolling(&self) -> bool {
        self.phase.is_scrolling()
    }

    /// Returns a snapshot of viewport geometry and scroll lifecycle.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            viewport: self.viewport,
            phase: self.phase,
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Handles a scroll signal from the viewport.
    ///
    /// Marks the list as scrolling, restarts the quiet period and requests a render frame unless
    /// one is already pending.
    pub fn on_scroll(&mut self, offset: f64) {
        if self.disposed {
            return;
        }
        let now_ms = self.scheduler.now_ms();
        vtrace!(offset, now_ms, "VirtualList::on_scroll");

        self.viewport.scroll_offset = offset;
        self.phase = ScrollPhase::Scrolling;

        let deadline = now_ms.saturating_add(self.quiet_period_ms);
        self.scheduler.cancel_wakeup();
        self.scheduler.schedule_wakeup(deadline);
        self.quiet_deadline_ms = Some(deadline);

        if !self.render_pending {
            self.render_pending = true;
            self.scheduler.request_frame();
        }
    }

    /// Runs the work deferred to this display refresh.
    ///
    /// A pending stale disposal runs first, then a pending scroll render. A render skips when the
    /// offset has not moved since the last pass. Elements retired by this frame's render are
    /// disposed on the next frame.
    pub fn on_frame(&mut self) {
        if self.disposed {
            return;
        }
        self.reconciler.dispose_stale(&mut self.host);

        if core::mem::take(&mut self.render_pending)
            && self.rendered_offset != Some(self.viewport.scroll_offset)
        {
            self.render();
        }
    }

    /// Handles the quiet-period wakeup.
    ///
    /// Settles the list when the deadline has passed; an early or stale wakeup re-arms the
    /// timer for the current deadline.
    pub fn on_wakeup(&mut self) {
        if self.disposed {
            return;
        }
        let Some(deadline) = self.quiet_deadline_ms else {
            return;
        };
        let now_ms = self.scheduler.now_ms();
        if now_ms < deadline {
            self.scheduler.schedule_wakeup(deadline);
            return;
        }
        self.quiet_deadline_ms = None;
        self.settle();
    }

    /// Replaces the dataset wholesale.
    ///
    /// The new data is assumed to be unrelated to the old: every mounted element is detached
    /// synchronously, the total extent is recomputed and the window is rendered immediately.
    /// The scroll offset is kept unless `reset_scroll_on_set_data` was configured.
    ///
    /// Fails with [`ConfigError::InvalidData`] when an item's extent breaks the size model; the
    /// list is left untouched in that case.
    pub fn set_data(&mut self, data: Vec<T>) -> Result<(), ConfigError> {
        if self.disposed {
            return Ok(());
        }
        self.layout.model().validate(data.len())?;
        vdebug!(
            prev_len = self.data.len(),
            len = data.len(),
            reset_scroll = self.reset_scroll_on_set_data,
            "VirtualList::set_data"
        );

        self.reconciler.clear(&mut self.host);
        self.data = data;
        self.layout.set_len(self.data.len());
        self.host.set_content_extent(self.layout.total_extent());

        if self.reset_scroll_on_set_data {
            self.viewport.scroll_offset = self.host.scroll_to(0.0);
        }
        self.render();
        Ok(())
    }

    /// Re-reads per-index extents after the caller changed what the size function returns.
    ///
    /// Rebuilds the cached layout, resizes the content container and re-renders.
    pub fn refresh_extents(&mut self) -> Result<(), ConfigError> {
        if self.disposed {
            return Ok(());
        }
        self.layout.model().validate(self.data.len())?;
        self.layout.refresh();
        self.host.set_content_extent(self.layout.total_extent());
        self.render();
        Ok(())
    }

    /// Scrolls so that `index` sits at the top of the viewport.
    ///
    /// `index` is clamped to `[0, len]`; `len` scrolls to the bottom of the list. The host applies
    /// the offset, and the applied position then goes through the regular scroll signal path.
    ///
    /// Returns the applied offset, or the last known offset once disposed.
    pub fn scroll_to_index(&mut self, index: usize) -> f64 {
        if self.disposed {
            return self.viewport.scroll_offset;
        }
        let target = self.layout.offset_for_index(index);
        let applied = self.host.scroll_to(target);
        vdebug!(index, target, applied, "VirtualList::scroll_to_index");
        self.on_scroll(applied);
        applied
    }

    /// Cancels the pending frame and wakeup. Every later callback, data replacement, extent refresh
    /// and scroll request becomes a no-op.
    ///
    /// Call this before dropping the container so no deferred work touches it. Also runs on drop.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        vdebug!(
            render_pending = self.render_pending,
            disposal_pending = self.reconciler.disposal_pending(),
            quiet_timer = self.quiet_deadline_ms.is_some(),
            "VirtualList::dispose"
        );
        self.disposed = true;
        self.render_pending = false;
        self.quiet_deadline_ms = None;
        self.scheduler.cancel_frame();
        self.scheduler.cancel_wakeup();
    }

    fn settle(&mut self) {
        vdebug!(offset = self.viewport.scroll_offset, "VirtualList::settle");
        self.phase = ScrollPhase::Settling;
        self.render();
        self.phase = ScrollPhase::Idle;
    }

    fn render(&mut self) -> PassReport {
        self.viewport.viewport_extent = self.host.viewport_extent();
        let state = self.scroll_state();
        let report = self.reconciler.render(
            &mut self.host,
            &self.layout,
            &self.data,
            state,
            self.overscan,
            &self.render_item,
        );
        self.rendered_offset = Some(self.viewport.scroll_offset);
        if report.disposal_scheduled {
            self.scheduler.request_frame();
        }
        report
    }
}

impl<T, H: VisualHost, S: FrameScheduler> Drop for VirtualList<T, H, S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<T, H: VisualHost, S: FrameScheduler> core::fmt::Debug for VirtualList<T, H, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualList")
            .field("len", &self.data.len())
            .field("layout", &self.layout)
            .field("overscan", &self.overscan)
            .field("viewport", &self.viewport)
            .field("phase", &self.phase)
            .field("quiet_deadline_ms", &self.quiet_deadline_ms)
            .field("render_pending", &self.render_pending)
            .field("reconciler", &self.reconciler)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
