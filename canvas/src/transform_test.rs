use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- drag ---

#[test]
fn drag_converts_pixels_to_percent() {
    let vp = Viewport::new(0.0, 0.0, 800.0, 400.0);
    let moved = drag(Point::new(50.0, 50.0), Point::new(80.0, -40.0), &vp);
    assert!(approx_eq(moved.x, 60.0));
    assert!(approx_eq(moved.y, 40.0));
}

#[test]
fn drag_on_empty_viewport_stays_put() {
    let vp = Viewport::default();
    let moved = drag(Point::new(20.0, 30.0), Point::new(80.0, 40.0), &vp);
    assert_eq!(moved, Point::new(20.0, 30.0));
}

// --- resize ---

#[test]
fn resize_grows_and_shrinks() {
    assert!(approx_eq(resize(200.0, 35.0, 50.0), 235.0));
    assert!(approx_eq(resize(200.0, -100.0, 50.0), 100.0));
}

#[test]
fn resize_clamps_to_minimum() {
    assert!(approx_eq(resize(200.0, -190.0, 50.0), 50.0));
    assert!(approx_eq(resize(300.0, -290.0, 100.0), 100.0));
}

// --- rotate ---

#[test]
fn angle_of_cardinal_points() {
    let c = Point::new(0.0, 0.0);
    assert!(approx_eq(angle_deg(c, Point::new(1.0, 0.0)), 0.0));
    assert!(approx_eq(angle_deg(c, Point::new(0.0, 1.0)), 90.0));
    assert!(approx_eq(angle_deg(c, Point::new(-1.0, 0.0)), 180.0));
}

#[test]
fn rotate_adds_swept_angle() {
    let c = Point::new(100.0, 100.0);
    let start = Point::new(100.0, 50.0); // straight up: -90
    let current = Point::new(150.0, 100.0); // right: 0
    assert!(approx_eq(rotate(10.0, c, start, current), 100.0));
}

#[test]
fn rotate_without_movement_keeps_rotation() {
    let c = Point::new(0.0, 0.0);
    let p = Point::new(3.0, 4.0);
    assert!(approx_eq(rotate(-25.0, c, p, p), -25.0));
}

// --- frames ---

#[test]
fn local_frame_undoes_rotation() {
    let c = Point::new(10.0, 10.0);
    // A point to the right of center, seen by an element rotated 90° clockwise,
    // lies above its local origin.
    let local = to_local_frame(Point::new(20.0, 10.0), c, 90.0);
    assert!(approx_eq(local.x, 0.0));
    assert!(approx_eq(local.y, -10.0));
}

#[test]
fn local_frame_round_trips() {
    let c = Point::new(-4.0, 7.5);
    let p = Point::new(12.0, 3.0);
    let back = from_local_frame(to_local_frame(p, c, 33.0), c, 33.0);
    assert!(approx_eq(back.x, p.x));
    assert!(approx_eq(back.y, p.y));
}
