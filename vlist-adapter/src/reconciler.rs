use alloc::vec::Vec;

use vlist::{Layout, Overscan, ScrollState, Window};

use crate::{ElementId, ItemStyle, Mount, RenderItem, VisualHost};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Mounted {
    id: ElementId,
    index: usize,
    stale: bool,
}

/// What one render pass changes, decided before any host call is made.
#[derive(Debug)]
struct Plan {
    window: Window,
    /// Hidden now, detached on the next frame (fixed-size lists).
    retire: Vec<ElementId>,
    /// Detached right away (variable-size lists).
    remove: Vec<ElementId>,
}

/// Summary of a render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassReport {
    pub window: Window,
    /// Elements created for the new window.
    pub created: usize,
    /// Indexes that were not in the previous window.
    pub entered: usize,
    /// Indexes of the previous window that are no longer rendered.
    pub exited: usize,
    /// Elements hidden and queued for removal on the next frame.
    pub retired: usize,
    /// Elements removed synchronously during the pass.
    pub removed: usize,
    /// Whether this pass queued a stale disposal that was not already pending.
    pub disposal_scheduled: bool,
}

/// Owns the mounted element set of one list and keeps it in step with the current window.
///
/// Fixed-size lists never leave a blank frame: the outgoing batch is hidden and stays attached
/// until the next frame's disposal, while the incoming batch is appended. Variable-size lists
/// recompute their whole layout every pass and replace their elements synchronously.
///
/// At most one stale disposal is pending at any time.
#[derive(Clone, Debug, Default)]
pub struct Reconciler {
    mounted: Vec<Mounted>,
    next_id: u64,
    disposal_pending: bool,
    last_window: Option<Window>,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The window rendered by the last pass, if any pass ran since the last clear.
    pub fn last_window(&self) -> Option<Window> {
        self.last_window
    }

    pub fn disposal_pending(&self) -> bool {
        self.disposal_pending
    }

    /// Indexes represented by live (non-stale) elements, in mount order.
    pub fn live_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.mounted.iter().filter(|m| !m.stale).map(|m| m.index)
    }

    pub fn live_len(&self) -> usize {
        self.mounted.iter().filter(|m| !m.stale).count()
    }

    pub fn stale_len(&self) -> usize {
        self.mounted.iter().filter(|m| m.stale).count()
    }

    /// Every mounted element, stale ones included.
    pub fn mounted_len(&self) -> usize {
        self.mounted.len()
    }

    /// Runs one render pass for the viewport in `state`.
    ///
    /// Builds an element for every index of the new window through `render_item`, then retires
    /// (fixed size) or removes (variable size) the previous pass's elements and appends the new
    /// batch in one host call.
    pub fn render<T, H: VisualHost>(
        &mut self,
        host: &mut H,
        layout: &Layout,
        data: &[T],
        state: ScrollState,
        overscan: Overscan,
        render_item: &RenderItem<T, H::Element>,
    ) -> PassReport {
        let is_scrolling = state.phase.is_scrolling();
        let window = layout.window_for(state.viewport, overscan);
        let plan = self.plan(window, layout.is_fixed());

        let mut batch = Vec::with_capacity(window.len());
        for index in window {
            let Some(item) = data.get(index) else {
                vwarn!(index, len = data.len(), "Reconciler::render: index past data");
                debug_assert!(index < data.len(), "layout and data lengths disagree");
                break;
            };
            let style = item_style(layout, index);
            let id = self.allocate_id();
            let element = render_item(index, is_scrolling, item, &style);
            batch.push(Mount { id, index, element });
        }

        let report = self.apply(host, plan, batch);
        vtrace!(
            start = report.window.start,
            end = report.window.end,
            created = report.created,
            entered = report.entered,
            exited = report.exited,
            retired = report.retired,
            removed = report.removed,
            is_scrolling,
            "Reconciler::render"
        );
        report
    }

    /// Detaches every stale element in one batch, if a disposal is pending.
    ///
    /// Returns the number of detached elements.
    pub fn dispose_stale<H: VisualHost>(&mut self, host: &mut H) -> usize {
        if !core::mem::take(&mut self.disposal_pending) {
            return 0;
        }
        let stale: Vec<ElementId> = self
            .mounted
            .iter()
            .filter(|m| m.stale)
            .map(|m| m.id)
            .collect();
        if !stale.is_empty() {
            host.detach(&stale);
            self.mounted.retain(|m| !m.stale);
        }
        vtrace!(count = stale.len(), "Reconciler::dispose_stale");
        stale.len()
    }

    /// Synchronously detaches everything, stale or not, and forgets the last window.
    pub fn clear<H: VisualHost>(&mut self, host: &mut H) {
        let ids: Vec<ElementId> = self.mounted.iter().map(|m| m.id).collect();
        if !ids.is_empty() {
            host.detach(&ids);
        }
        self.mounted.clear();
        self.disposal_pending = false;
        self.last_window = None;
    }

    fn plan(&self, window: Window, fixed: bool) -> Plan {
        if fixed {
            Plan {
                window,
                retire: self
                    .mounted
                    .iter()
                    .filter(|m| !m.stale)
                    .map(|m| m.id)
                    .collect(),
                remove: Vec::new(),
            }
        } else {
            Plan {
                window,
                retire: Vec::new(),
                remove: self.mounted.iter().map(|m| m.id).collect(),
            }
        }
    }

    fn apply<H: VisualHost>(
        &mut self,
        host: &mut H,
        plan: Plan,
        batch: Vec<Mount<H::Element>>,
    ) -> PassReport {
        let (entered, exited) = window_delta(self.last_window, plan.window);

        if !plan.retire.is_empty() {
            host.retire(&plan.retire);
            for m in self.mounted.iter_mut() {
                m.stale = true;
            }
        }
        if !plan.remove.is_empty() {
            host.detach(&plan.remove);
            self.mounted.clear();
        }

        let mut disposal_scheduled = false;
        if !self.disposal_pending && self.mounted.iter().any(|m| m.stale) {
            self.disposal_pending = true;
            disposal_scheduled = true;
        }

        let created = batch.len();
        self.mounted.extend(batch.iter().map(|m| Mounted {
            id: m.id,
            index: m.index,
            stale: false,
        }));
        if !batch.is_empty() {
            host.attach(batch);
        }
        self.last_window = Some(plan.window);

        PassReport {
            window: plan.window,
            created,
            entered,
            exited,
            retired: plan.retire.len(),
            removed: plan.remove.len(),
            disposal_scheduled,
        }
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}

fn item_style(layout: &Layout, index: usize) -> ItemStyle {
    let top = layout.offset_for_index(index);
    if layout.is_fixed() {
        ItemStyle::fixed(top)
    } else {
        ItemStyle::variable(top, layout.extent_of(index).unwrap_or(0.0))
    }
}

/// `(entered, exited)` index counts between two contiguous windows.
fn window_delta(prev: Option<Window>, next: Window) -> (usize, usize) {
    let Some(prev) = prev else {
        return (next.len(), 0);
    };
    let lo = prev.start.max(next.start);
    let hi = prev.end.min(next.end);
    let overlap = hi.saturating_sub(lo);
    (next.len() - overlap, prev.len() - overlap)
}
