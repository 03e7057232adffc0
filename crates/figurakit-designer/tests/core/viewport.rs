use figurakit_designer::viewport::Viewport;

#[test]
fn test_corners_map_to_ndc() {
    let vp = Viewport::new(800.0, 600.0);

    let top_left = vp.to_ndc(0.0, 0.0);
    assert_eq!((top_left.x, top_left.y), (-1.0, 1.0));

    let bottom_right = vp.to_ndc(800.0, 600.0);
    assert_eq!((bottom_right.x, bottom_right.y), (1.0, -1.0));

    let center = vp.to_ndc(400.0, 300.0);
    assert_eq!((center.x, center.y), (0.0, 0.0));
}

#[test]
fn test_resize_updates_mapping() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_window_size(400.0, 400.0);
    assert_eq!(vp.width(), 400.0);

    let p = vp.to_ndc(100.0, 100.0);
    assert_eq!((p.x, p.y), (-0.5, 0.5));
}
