//! End-to-end layout scenarios: viewport → profile → fit → carousel →
//! box styles, the full path the gallery front-end drives on each render.

use gallerysize::{
    LayoutProfile, SidePosition, Viewport, ViewportClass, box_style, compose_side, fit,
    masonry_layout, MasonryItem,
};

#[test]
fn desktop_central_carousel_row() {
    // A focal 4:5 portrait flanked by two neighbors per side.
    let profile = LayoutProfile::resolve(Viewport::new(1440.0, 900.0));
    let main = fit(0.8, &profile.central_main);
    assert!(main.width as f64 <= profile.central_main.max_width);
    assert!(main.height as f64 <= profile.central_main.max_height);

    let aspects = [1.5, 0.7, 1.0, 2.0];
    let mut previous_opacity = f64::INFINITY;
    for (i, aspect) in aspects.iter().enumerate() {
        let offset = (i as u32 / 2) + 1;
        let position = if i % 2 == 0 {
            SidePosition::Left
        } else {
            SidePosition::Right
        };
        let side = compose_side(0.8, *aspect, offset, position, &profile.central_side);

        // Side boxes obey the central-side profile.
        assert!(side.size.width as f64 >= profile.central_side.min_width - 0.5);
        assert!(side.size.height as f64 >= profile.central_side.min_height - 0.5);
        // The receding effect only weakens as slots move outward.
        assert!(side.opacity <= previous_opacity);
        previous_opacity = side.opacity.min(previous_opacity);

        // Materialized styles are whole-pixel strings.
        let style = box_style(&side.size);
        assert!(style.width.to_string().ends_with("px"));
        assert_eq!(style.min_width, style.width);
    }
}

#[test]
fn mobile_grid_uses_masonry_within_viewport() {
    let viewport = Viewport::new(375.0, 667.0);
    assert_eq!(viewport.class(), ViewportClass::Mobile);
    let profile = LayoutProfile::resolve(viewport);

    let items: Vec<MasonryItem> = [0.75, 1.33, 1.0, 0.5, 2.0]
        .iter()
        .enumerate()
        .map(|(i, aspect)| MasonryItem {
            id: format!("art-{i}"),
            aspect_ratio: *aspect,
        })
        .collect();

    let slots = masonry_layout(&items, viewport.width, 2, &profile.grid_item);
    assert_eq!(slots.len(), items.len());
    for slot in &slots {
        assert!(slot.y >= 0.0);
        assert!(slot.size.height > 0);
    }
    // The first two items open the two columns; everything after stacks.
    assert_eq!(slots[0].y, 0.0);
    assert_eq!(slots[1].y, 0.0);
    assert!(slots[2..].iter().all(|s| s.y > 0.0));
}

#[test]
fn failed_probe_degrades_to_neutral_square_box() {
    // A failed probe reports aspect 1.0; layout proceeds with a square
    // box inside the profile instead of collapsing.
    let profile = LayoutProfile::fallback();
    let square = fit(1.0, &profile.central_main);
    assert_eq!(square.width, square.height);
    assert!(square.width > 0);
}

#[test]
fn resize_across_buckets_changes_profiles() {
    let phone = LayoutProfile::resolve(Viewport::new(390.0, 844.0));
    let laptop = LayoutProfile::resolve(Viewport::new(1280.0, 800.0));
    assert!(laptop.central_main.max_width > phone.central_main.max_width);
    assert!(laptop.central_side.max_width > phone.central_side.max_width);
    assert!(laptop.story_preview.max_width > phone.story_preview.max_width);
}
