// Example: window math for a fixed-size and a variable-size list.
use vlist::{Layout, Overscan, SizeModel, geometry};

fn main() {
    let fixed = SizeModel::fixed(20.0).unwrap();
    let overscan = Overscan::new(2, 2);
    println!("total_extent={}", geometry::total_extent(1_000_000, &fixed));
    println!(
        "window={:?}",
        geometry::compute_window(205.0, 100.0, 1_000_000, &fixed, overscan)
    );

    // Variable sizes: build the prefix table once, then query per scroll position.
    let layout = Layout::new(SizeModel::variable(|i| 16.0 + (i % 5) as f64 * 4.0), 10_000);
    for offset in [0.0, 1_234.5, 99_000.0, 1e9] {
        let w = layout.window(offset, 300.0, overscan);
        println!("offset={offset} window={w:?} len={}", w.len());
    }
    println!("offset_for_index(42)={}", layout.offset_for_index(42));
}
