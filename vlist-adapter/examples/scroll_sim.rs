use vlist::Overscan;
use vlist_adapter::{FrameScheduler, ManualScheduler, MemoryHost, VirtualList, VirtualListOptions};

fn main() {
    // Example: a headless host driven by a 60Hz frame loop.
    //
    // A real adapter would:
    // - forward viewport scroll events to on_scroll(offset)
    // - call on_frame() when the requested animation frame fires
    // - call on_wakeup() when the scheduled timer fires
    // - paint the host's visible elements
    let rows: Vec<String> = (0..10_000).map(|i| format!("row #{i}")).collect();

    let opts = VirtualListOptions::new()
        .with_container(MemoryHost::<String>::new(0.0))
        .with_data(rows)
        .with_fixed_item_size(24.0)
        .with_overscan(Overscan::symmetric(3))
        .with_height(Some(480.0))
        .with_render_item(|index, is_scrolling, row: &String, style| {
            if is_scrolling {
                format!("[{index}] … ({style})")
            } else {
                format!("[{index}] {row} ({style})")
            }
        });
    let mut list = VirtualList::new(opts, ManualScheduler::new()).expect("valid options");
    println!(
        "content_extent={} visible={:?}",
        list.host().content_extent(),
        list.host().visible_indexes()
    );

    // Fling: one scroll signal per frame for half a second, then let it settle.
    let mut offset = 0.0;
    for frame in 0..60u32 {
        if frame < 30 {
            offset += 180.0;
            list.on_scroll(offset);
        }
        list.scheduler_mut().advance(16);
        if list.scheduler_mut().take_frame() {
            list.on_frame();
        }
        if list.scheduler_mut().take_due_wakeup() {
            list.on_wakeup();
        }
        if frame % 10 == 0 {
            println!(
                "t={} phase={:?} window={:?} mounted={}",
                list.scheduler().now_ms(),
                list.phase(),
                list.reconciler().last_window(),
                list.reconciler().mounted_len()
            );
        }
    }

    let first = list.host().visible_elements().next().map(|e| &e.element);
    println!("settled: phase={:?} first={first:?}", list.phase());

    let applied = list.scroll_to_index(9_999);
    println!("scroll_to_index(9999) applied={applied}");
}
