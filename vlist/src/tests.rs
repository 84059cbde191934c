use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_extent(&mut self, zero_allowed: bool) -> f64 {
        let lo = if zero_allowed { 0 } else { 1 };
        self.gen_range_u64(lo, 41) as f64
    }
}

fn variable(sizes: &[f64]) -> SizeModel {
    let sizes: Arc<[f64]> = sizes.into();
    SizeModel::variable(move |i| sizes[i])
}

fn fixed(h: f64) -> SizeModel {
    SizeModel::fixed(h).unwrap()
}

/// Indexes whose span `[start, end)` intersects `[offset, offset + viewport)`, as a window.
fn expected_overlap(sizes: &[f64], offset: f64, viewport: f64) -> Window {
    let mut start = 0.0;
    let mut first = None;
    let mut last = None;
    for (i, &size) in sizes.iter().enumerate() {
        let end = start + size;
        if start < offset + viewport && end > offset {
            first.get_or_insert(i);
            last = Some(i);
        }
        start = end;
    }
    match (first, last) {
        (Some(a), Some(b)) => Window::new(a, b + 1),
        _ => Window::new(sizes.len(), sizes.len()),
    }
}

#[test]
fn fixed_window_matches_reference_scenario() {
    let model = fixed(20.0);
    let w = geometry::compute_window(205.0, 100.0, 1000, &model, Overscan::new(2, 2));
    // first = 10, visible = 5 → [10 - 2, 10 + 5 + 2)
    assert_eq!(w, Window::new(8, 17));
}

#[test]
fn fixed_window_clamps_at_both_ends() {
    let model = fixed(10.0);
    let w = geometry::compute_window(0.0, 50.0, 100, &model, Overscan::new(3, 3));
    assert_eq!(w, Window::new(0, 8));

    let w = geometry::compute_window(960.0, 50.0, 100, &model, Overscan::new(3, 3));
    assert_eq!(w, Window::new(93, 100));
}

#[test]
fn fixed_window_truncates_partial_items() {
    let model = fixed(20.0);
    // 19.9 / 20 truncates to 0; 59 / 20 truncates to 2.
    let w = geometry::compute_window(19.9, 59.0, 100, &model, Overscan::NONE);
    assert_eq!(w, Window::new(0, 2));
}

#[test]
fn variable_window_covers_overlapping_items() {
    let mut sizes = vec![10.0, 20.0, 30.0];
    sizes.resize(20, 10.0);
    let model = variable(&sizes);

    // item1 spans [10, 30), item2 spans [30, 60); both overlap [25, 40).
    let w = geometry::compute_window(25.0, 15.0, sizes.len(), &model, Overscan::NONE);
    assert_eq!(w, Window::new(1, 3));
    assert_eq!(w, expected_overlap(&sizes, 25.0, 15.0));

    let w = geometry::compute_window(25.0, 15.0, sizes.len(), &model, Overscan::new(1, 2));
    assert_eq!(w, Window::new(0, 5));
}

#[test]
fn variable_window_on_item_boundary_starts_at_that_item() {
    let sizes = [10.0, 20.0, 30.0, 10.0];
    let model = variable(&sizes);
    let w = geometry::compute_window(30.0, 30.0, sizes.len(), &model, Overscan::NONE);
    assert_eq!(w, Window::new(2, 3));
}

#[test]
fn empty_dataset_yields_empty_window_without_calling_size_fn() {
    let model = SizeModel::variable(|_| panic!("size fn must not be called for empty data"));
    let w = geometry::compute_window(100.0, 100.0, 0, &model, Overscan::new(5, 5));
    assert_eq!(w, Window::EMPTY);
    assert_eq!(geometry::total_extent(0, &model), 0.0);

    let layout = Layout::new(model, 0);
    assert_eq!(layout.window(100.0, 100.0, Overscan::new(5, 5)), Window::EMPTY);
    assert_eq!(layout.total_extent(), 0.0);
}

#[test]
fn offset_past_end_degenerates_to_trailing_range() {
    let sizes = [10.0; 10];
    let model = variable(&sizes);
    let w = geometry::compute_window(500.0, 50.0, 10, &model, Overscan::NONE);
    assert_eq!(w, Window::new(10, 10));
    assert!(w.is_empty());

    let w = geometry::compute_window(500.0, 50.0, 10, &model, Overscan::new(2, 2));
    assert_eq!(w, Window::new(8, 10));

    let w = geometry::compute_window(500.0, 50.0, 10, &fixed(10.0), Overscan::NONE);
    assert_eq!(w, Window::new(10, 10));

    // Far past the end: trunc(offset / h) = 50, clamped to len before overscan.
    let w = geometry::compute_window(500.0, 50.0, 10, &fixed(10.0), Overscan::new(2, 2));
    assert_eq!(w, Window::new(8, 10));
    let layout = Layout::new(fixed(10.0), 10);
    assert_eq!(layout.window(500.0, 50.0, Overscan::new(2, 2)), Window::new(8, 10));
    assert_eq!(layout.window(1e12, 50.0, Overscan::new(3, 0)), Window::new(7, 10));
}

#[test]
fn negative_and_nan_inputs_are_treated_as_zero() {
    let model = fixed(10.0);
    let w = geometry::compute_window(-50.0, 30.0, 100, &model, Overscan::NONE);
    assert_eq!(w, Window::new(0, 3));
    let w = geometry::compute_window(f64::NAN, 30.0, 100, &model, Overscan::NONE);
    assert_eq!(w, Window::new(0, 3));
    let w = geometry::compute_window(0.0, -30.0, 100, &model, Overscan::NONE);
    assert!(w.is_empty());
}

#[test]
fn total_extent_fixed_and_variable() {
    assert_eq!(geometry::total_extent(1000, &fixed(20.0)), 20_000.0);
    let sizes = [1.0, 2.0, 3.0, 0.0, 4.0];
    assert_eq!(geometry::total_extent(sizes.len(), &variable(&sizes)), 10.0);
    assert_eq!(Layout::new(variable(&sizes), sizes.len()).total_extent(), 10.0);
}

#[test]
fn offset_for_index_clamps_to_dataset_bounds() {
    let sizes = [5.0, 10.0, 15.0];
    let model = variable(&sizes);
    assert_eq!(geometry::offset_for_index(0, 3, &model), 0.0);
    assert_eq!(geometry::offset_for_index(2, 3, &model), 15.0);
    assert_eq!(geometry::offset_for_index(3, 3, &model), 30.0);
    assert_eq!(geometry::offset_for_index(99, 3, &model), 30.0);

    let model = fixed(20.0);
    assert_eq!(geometry::offset_for_index(7, 10, &model), 140.0);
    assert_eq!(geometry::offset_for_index(usize::MAX, 10, &model), 200.0);
}

#[test]
fn window_computation_is_idempotent() {
    let calls = Arc::new(Mutex::new(0usize));
    let model = SizeModel::variable({
        let calls = Arc::clone(&calls);
        move |i| {
            *calls.lock().unwrap() += 1;
            (i % 7) as f64 + 1.0
        }
    });
    let a = geometry::compute_window(123.0, 40.0, 200, &model, Overscan::new(1, 3));
    let b = geometry::compute_window(123.0, 40.0, 200, &model, Overscan::new(1, 3));
    assert_eq!(a, b);

    let layout = Layout::new(model, 200);
    let before = *calls.lock().unwrap();
    let c = layout.window(123.0, 40.0, Overscan::new(1, 3));
    let d = layout.window(123.0, 40.0, Overscan::new(1, 3));
    assert_eq!(c, d);
    assert_eq!(a, c);
    // Cached windows never call back into the size function.
    assert_eq!(*calls.lock().unwrap(), before);
}

#[test]
fn layout_matches_reference_geometry_randomized() {
    for seed in 0..200u64 {
        let mut rng = Lcg::new(seed);
        let len = rng.gen_range_usize(0, 96);
        let zero_allowed = seed % 3 == 0;
        let sizes: Vec<f64> = (0..len).map(|_| rng.gen_extent(zero_allowed)).collect();
        let model = variable(&sizes);
        let layout = Layout::new(model.clone(), len);
        let total = geometry::total_extent(len, &model);
        assert_eq!(layout.total_extent(), total, "seed={seed}");

        for _ in 0..32 {
            let half = if rng.next_u64() & 1 == 1 { 0.5 } else { 0.0 };
            let offset = rng.gen_range_u64(0, total as u64 + 40) as f64 + half;
            let viewport = rng.gen_range_u64(0, 120) as f64;
            let overscan = Overscan::new(rng.gen_range_usize(0, 4), rng.gen_range_usize(0, 4));

            let expected = geometry::compute_window(offset, viewport, len, &model, overscan);
            let got = layout.window(offset, viewport, overscan);
            assert_eq!(got, expected, "seed={seed} offset={offset} viewport={viewport}");
            assert!(got.start <= got.end && got.end <= len, "seed={seed}");

            let index = rng.gen_range_usize(0, len + 3);
            assert_eq!(
                layout.offset_for_index(index),
                geometry::offset_for_index(index, len, &model),
                "seed={seed} index={index}"
            );
        }
    }
}

#[test]
fn variable_window_is_minimal_overlap_for_positive_sizes() {
    for seed in 0..200u64 {
        let mut rng = Lcg::new(seed ^ 0xa5a5);
        let len = rng.gen_range_usize(1, 64);
        let sizes: Vec<f64> = (0..len).map(|_| rng.gen_extent(false)).collect();
        let model = variable(&sizes);
        let total = geometry::total_extent(len, &model);

        let offset = rng.gen_range_u64(0, total as u64) as f64;
        let viewport = rng.gen_range_u64(1, 100) as f64;
        let w = geometry::compute_window(offset, viewport, len, &model, Overscan::NONE);
        assert_eq!(w, expected_overlap(&sizes, offset, viewport), "seed={seed}");

        let before: f64 = sizes[..w.start].iter().sum();
        assert!(before <= offset, "seed={seed} before={before} offset={offset}");
    }
}

#[test]
fn layout_refresh_rereads_extents() {
    let sizes = Arc::new(Mutex::new(vec![10.0; 5]));
    let model = SizeModel::variable({
        let sizes = Arc::clone(&sizes);
        move |i| sizes.lock().unwrap()[i]
    });
    let mut layout = Layout::new(model, 5);
    assert_eq!(layout.total_extent(), 50.0);

    sizes.lock().unwrap()[0] = 30.0;
    // Cached until the caller signals a change.
    assert_eq!(layout.total_extent(), 50.0);
    layout.refresh();
    assert_eq!(layout.total_extent(), 70.0);
    assert_eq!(layout.start_of(1), Some(30.0));
    assert_eq!(layout.extent_of(0), Some(30.0));
}

#[test]
fn layout_set_len_tracks_replaced_dataset() {
    let mut layout = Layout::new(fixed(20.0), 10);
    assert_eq!(layout.total_extent(), 200.0);
    layout.set_len(0);
    assert_eq!(layout.total_extent(), 0.0);
    assert!(layout.is_empty());
    assert_eq!(layout.start_of(0), None);
    assert_eq!(layout.offset_for_index(5), 0.0);

    let mut layout = Layout::new(SizeModel::variable(|i| i as f64), 4);
    assert_eq!(layout.total_extent(), 6.0);
    layout.set_len(6);
    assert_eq!(layout.total_extent(), 15.0);
    assert_eq!(layout.extent_of(5), Some(5.0));
    assert_eq!(layout.extent_of(6), None);
}

#[test]
fn layout_reports_extents_exactly_as_supplied() {
    let sizes = [0.1, 0.2, 0.3, 0.4];
    let layout = Layout::new(variable(&sizes), sizes.len());
    for (i, &h) in sizes.iter().enumerate() {
        assert_eq!(layout.extent_of(i), Some(h));
    }

    // Small items after a huge one keep their size even though the running offset absorbs them.
    let sizes = [1e17, 1.0, 2.0];
    let layout = Layout::new(variable(&sizes), sizes.len());
    assert_eq!(layout.extent_of(1), Some(1.0));
    assert_eq!(layout.extent_of(2), Some(2.0));
    assert_eq!(layout.start_of(1), Some(1e17));
}

#[test]
fn size_model_requires_matching_shape() {
    let err = SizeModel::from_item_size(ItemSize::Fixed(20.0), false).unwrap_err();
    assert_eq!(err, ConfigError::SizeModelMismatch { fixed_size: false });
    assert!(err.to_string().contains("itemSize/fixedSize mismatch"));

    let err = SizeModel::from_item_size(ItemSize::per_index(|_| 1.0), true).unwrap_err();
    assert_eq!(err, ConfigError::SizeModelMismatch { fixed_size: true });

    let model = SizeModel::from_item_size(ItemSize::from(20.0), true).unwrap();
    assert_eq!(model.fixed_extent(), Some(20.0));
    let model = SizeModel::from_item_size(ItemSize::per_index(|_| 1.0), false).unwrap();
    assert!(!model.is_fixed());
}

#[test]
fn fixed_extent_must_be_positive_and_finite() {
    assert_eq!(
        SizeModel::fixed(0.0).unwrap_err(),
        ConfigError::NonPositiveExtent(0.0)
    );
    assert!(SizeModel::fixed(-3.0).is_err());
    assert!(SizeModel::fixed(f64::INFINITY).is_err());
    assert!(SizeModel::fixed(f64::NAN).is_err());
    assert!(SizeModel::fixed(0.5).is_ok());
}

#[test]
fn validate_reports_first_bad_extent() {
    let model = SizeModel::variable(|i| if i == 3 { -1.0 } else { 5.0 });
    assert!(model.validate(3).is_ok());
    let err = model.validate(10).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidData {
            index: 3,
            extent: -1.0
        }
    );
    assert!(err.to_string().starts_with("invalid data"));
    assert!(Layout::try_new(model, 10).is_err());

    assert!(fixed(1.0).validate(1_000_000).is_ok());
}

#[test]
fn window_helpers() {
    let w = Window::new(3, 6);
    assert_eq!(w.len(), 3);
    assert!(w.contains(3) && w.contains(5) && !w.contains(6));
    assert_eq!(w.into_iter().collect::<Vec<_>>(), vec![3, 4, 5]);
    assert!(Window::EMPTY.is_empty());
    assert_eq!(Overscan::symmetric(2), Overscan::new(2, 2));
}

#[test]
fn scroll_phase_only_reports_scrolling_while_scrolling() {
    assert!(!ScrollPhase::Idle.is_scrolling());
    assert!(ScrollPhase::Scrolling.is_scrolling());
    assert!(!ScrollPhase::Settling.is_scrolling());
    assert_eq!(ViewportState::new(10.0, 5.0).scroll_end(), 15.0);
}
