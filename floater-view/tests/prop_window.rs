use floater_view::layout::layout_for;
use floater_view::viewport::ViewportState;
use floater_view::window::compute_window;
use proptest::prelude::*;

// Whole-pixel inputs, as the browser reports them.
fn arb_scroll() -> impl Strategy<Value = f64> {
    (0u32..200_000).prop_map(f64::from)
}

fn arb_container() -> impl Strategy<Value = f64> {
    (1u32..2_000).prop_map(f64::from)
}

fn arb_row() -> impl Strategy<Value = f64> {
    prop_oneof![Just(36.0), Just(40.0), (1u32..120).prop_map(f64::from)]
}

proptest! {
    // Every row intersecting [scroll, scroll + container) is inside the window
    #[test]
    fn window_covers_visible_rows(
        scroll in arb_scroll(),
        container in arb_container(),
        row in arb_row(),
        len in 0usize..5_000,
        overscan in 0usize..8,
    ) {
        let window = compute_window(scroll, container, row, len, overscan);
        for i in 0..len {
            let top = i as f64 * row;
            let bottom = (i + 1) as f64 * row;
            if top < scroll + container && bottom > scroll {
                prop_assert!(window.contains(i), "row {} missing from {:?}", i, window);
            }
        }
    }

    // Bounds hold and the window is empty iff the sequence is
    #[test]
    fn window_stays_in_bounds(
        scroll in arb_scroll(),
        container in arb_container(),
        row in arb_row(),
        len in 0usize..5_000,
        overscan in 0usize..8,
    ) {
        let window = compute_window(scroll, container, row, len, overscan);
        prop_assert_eq!(window.is_empty(), len == 0);
        if let (Some(start), Some(end)) = (window.start(), window.end()) {
            prop_assert!(start <= end);
            prop_assert!(end < len);
        }
    }

    // Materialized rows stay bounded by the viewport, not the sequence length
    #[test]
    fn window_size_is_bounded(
        scroll in arb_scroll(),
        container in arb_container(),
        row in arb_row(),
        len in 0usize..5_000,
        overscan in 0usize..8,
    ) {
        let window = compute_window(scroll, container, row, len, overscan);
        let bound = (container / row).ceil() as usize + 2 + 2 * overscan;
        prop_assert!(window.len() <= bound);
    }

    // Scroll and resize notifications commute
    #[test]
    fn event_order_does_not_matter(
        scroll in arb_scroll(),
        width in 200u32..3_000,
        height in 200u32..2_000,
        len in 0usize..5_000,
    ) {
        let (w, h) = (f64::from(width), f64::from(height));
        let mut a = ViewportState::for_viewport(1024.0, 768.0);
        a.scroll_to(scroll);
        a.resize(w, h);
        let mut b = ViewportState::for_viewport(1024.0, 768.0);
        b.resize(w, h);
        b.scroll_to(scroll);
        prop_assert_eq!(a.window(len), b.window(len));
        prop_assert_eq!(layout_for(w, h), layout_for(w, h));
    }
}
