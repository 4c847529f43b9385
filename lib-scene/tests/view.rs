use lib_scene::geometry::{Point, Rect, Size, Vector};
use lib_scene::PannableView;

fn scene_rect() -> Rect {
    Rect::from_min_size(Point::new(-2500.0, -2500.0), Size::new(5000.0, 5000.0))
}

#[test]
fn move_without_press_is_ignored() {
    let mut view = PannableView::new();

    view.pointer_moved(Point::new(40.0, 25.0));
    view.pointer_moved(Point::new(-300.0, 1000.0));

    assert_eq!(view.scroll_offset(), Vector::ZERO);
    assert!(!view.is_dragging());
}

#[test]
fn press_then_release_without_move_changes_nothing() {
    let mut view = PannableView::new();

    view.pointer_pressed(Point::new(100.0, 100.0));
    view.pointer_released();

    assert_eq!(view.scroll_offset(), Vector::ZERO);
}

#[test]
fn drag_accumulates_negative_pointer_deltas() {
    let mut view = PannableView::new();

    view.pointer_pressed(Point::new(100.0, 100.0));
    view.pointer_moved(Point::new(80.0, 90.0));
    assert_eq!(view.scroll_offset(), Vector::new(20.0, 10.0));

    view.pointer_moved(Point::new(80.0, 70.0));
    assert_eq!(view.scroll_offset(), Vector::new(20.0, 30.0));
}

#[test]
fn release_ends_tracking() {
    let mut view = PannableView::new();

    view.pointer_pressed(Point::new(10.0, 10.0));
    view.pointer_moved(Point::new(15.0, 10.0));
    view.pointer_released();

    let offset = view.scroll_offset();
    view.pointer_moved(Point::new(500.0, 500.0));

    assert_eq!(view.scroll_offset(), offset);
}

#[test]
fn second_press_rebases_the_anchor() {
    let mut view = PannableView::new();

    view.pointer_pressed(Point::new(0.0, 0.0));
    view.pointer_pressed(Point::new(50.0, 50.0));
    view.pointer_moved(Point::new(60.0, 50.0));

    assert_eq!(view.scroll_offset(), Vector::new(-10.0, 0.0));
}

#[test]
fn centering_matches_a_fresh_view() {
    let mut view = PannableView::new();

    view.center_on(scene_rect(), Size::new(400.0, 300.0));

    // Scene center (0, 0) minus half the viewport.
    assert_eq!(view.visible_origin(scene_rect()), Point::new(-200.0, -150.0));
}

#[test]
fn map_to_scene_accounts_for_scroll() {
    let mut view = PannableView::new();
    view.center_on(scene_rect(), Size::new(400.0, 300.0));

    let center = view.map_to_scene(scene_rect(), Vector::new(200.0, 150.0));
    assert_eq!(center, Point::new(0.0, 0.0));

    view.pointer_pressed(Point::new(100.0, 100.0));
    view.pointer_moved(Point::new(90.0, 80.0));

    let shifted = view.map_to_scene(scene_rect(), Vector::new(200.0, 150.0));
    assert_eq!(shifted, Point::new(10.0, 20.0));
}
