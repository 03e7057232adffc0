use figurakit_core::color::{ColorScheme, ColorValue, Hsv, Rgb};
use figurakit_designer::model::{Point, Rectangle, Shape, ShapeType};
use figurakit_designer::scene::{Scene, SELECTION_OUTLINE};

#[test]
fn test_default_scene_figures() {
    let scene = Scene::default_scene();
    let figures = scene.figures();
    assert_eq!(figures.len(), 3);
    assert_eq!(figures[0].name, "Rectangle");
    assert_eq!(figures[1].name, "Circle");
    assert_eq!(figures[2].name, "Triangle");
    assert!(figures.iter().all(|f| f.color() == Rgb::BLACK));
    assert_eq!(scene.selected_id(), None);
    assert_eq!(scene.scheme(), ColorScheme::Rgb);
}

#[test]
fn test_select_at_picks_first_in_insertion_order() {
    let mut scene = Scene::default_scene();
    let hit = scene.select_at(Point::new(-0.6, -0.6));
    assert_eq!(hit, Some(scene.figures()[0].id()));
    assert_eq!(scene.selected_figure().unwrap().name, "Rectangle");
}

#[test]
fn test_miss_leaves_selection_unchanged() {
    let mut scene = Scene::default_scene();
    let circle_id = scene.select_at(Point::new(0.05, 0.05)).unwrap();

    // A click that hits nothing must not clear the selection.
    assert_eq!(scene.select_at(Point::new(0.95, 0.95)), None);
    assert_eq!(scene.selected_id(), Some(circle_id));
}

#[test]
fn test_miss_on_empty_scene_selects_nothing() {
    let mut scene = Scene::new();
    assert_eq!(scene.select_at(Point::new(0.0, 0.0)), None);
    assert_eq!(scene.selected_id(), None);
}

#[test]
fn test_selection_moves_between_figures() {
    let mut scene = Scene::default_scene();
    scene.select_at(Point::new(-0.6, -0.6));
    scene.select_at(Point::new(0.0, 0.0));
    assert_eq!(scene.selected_figure().unwrap().name, "Circle");
}

#[test]
fn test_color_edit_routes_through_active_scheme() {
    let mut scene = Scene::default_scene();
    scene.select_at(Point::new(0.0, 0.0));
    scene.set_scheme(ColorScheme::Cmyk);

    // Black viewed through CMYK is the defined singularity value.
    match scene.selected_color_value() {
        Some(ColorValue::Cmyk(cmyk)) => {
            assert_eq!((cmyk.c, cmyk.m, cmyk.y, cmyk.k), (0.0, 0.0, 0.0, 1.0));
        }
        other => panic!("expected CMYK view, got {other:?}"),
    }

    // An edit made in HSV still lands as canonical RGB.
    assert!(scene.set_selected_color(ColorValue::Hsv(Hsv::new(0.0, 1.0, 1.0))));
    let color = scene.selected_figure().unwrap().color();
    assert!((color.r - 1.0).abs() < 1e-5 && color.g.abs() < 1e-5 && color.b.abs() < 1e-5);
}

#[test]
fn test_color_edit_without_selection_is_refused() {
    let mut scene = Scene::new();
    assert!(!scene.set_selected_color(ColorValue::Rgb(Rgb::WHITE)));
}

#[test]
fn test_placements_cover_every_figure_in_draw_order() {
    let mut scene = Scene::default_scene();
    scene.select_at(Point::new(-0.6, -0.6));

    let frames = scene.placements();
    assert_eq!(frames.len(), 3);
    assert!(frames[0].selected);
    assert!(!frames[1].selected && !frames[2].selected);
    assert_eq!(frames[0].placement.vertices.len(), 4);
    assert_eq!(frames[1].placement.vertices.len(), 100);
    assert_eq!(frames[2].placement.vertices.len(), 3);
    assert!(frames.iter().all(|f| f.placement.is_clean()));
}

#[test]
fn test_transform_edits_show_up_in_placements() {
    let mut scene = Scene::new();
    let id = scene.add_figure(
        "Square",
        Shape::Rectangle(Rectangle::new(0.0, 0.0, 1.0, 1.0)),
        Rgb::WHITE,
    );
    scene.figure_mut(id).unwrap().set_translate(0.25, 0.0);

    let frames = scene.placements();
    assert!((frames[0].placement.vertices[0].x - 0.25).abs() < 1e-9);
}

#[test]
fn test_added_figures_get_distinct_ids() {
    let mut scene = Scene::new();
    let a = scene.add_figure("A", Shape::Rectangle(Rectangle::new(0.0, 0.0, 0.1, 0.1)), Rgb::BLACK);
    let b = scene.add_figure("B", Shape::Rectangle(Rectangle::new(0.5, 0.5, 0.1, 0.1)), Rgb::BLACK);
    assert_ne!(a, b);
    assert_eq!(scene.figure(b).unwrap().name, "B");
}

#[test]
fn test_selection_outline_is_red() {
    assert_eq!(SELECTION_OUTLINE, Rgb::new(1.0, 0.0, 0.0));
}

#[test]
fn test_shape_kinds_are_tagged() {
    let scene = Scene::default_scene();
    let kinds: Vec<ShapeType> = scene.figures().iter().map(|f| f.shape().shape_type()).collect();
    assert_eq!(
        kinds,
        vec![ShapeType::Rectangle, ShapeType::Circle, ShapeType::Polygon]
    );
}
