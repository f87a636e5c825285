#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn viewport() -> Viewport {
    Viewport::new(100.0, 50.0, 800.0, 400.0)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_sub_and_distance() {
    let a = Point::new(4.0, 6.0);
    let b = Point::new(1.0, 2.0);
    assert_eq!(a.sub(b), Point::new(3.0, 4.0));
    assert!(approx_eq(a.distance(b), 5.0));
}

// --- Viewport ---

#[test]
fn screen_to_local_and_back() {
    let vp = viewport();
    let screen = Point::new(300.0, 250.0);
    let local = vp.to_local(screen);
    assert_eq!(local, Point::new(200.0, 200.0));
    assert_eq!(vp.to_screen(local), screen);
}

#[test]
fn local_to_percent() {
    let vp = viewport();
    assert!(point_approx_eq(vp.local_to_percent(Point::new(400.0, 100.0)), Point::new(50.0, 25.0)));
}

#[test]
fn percent_to_local_and_screen() {
    let vp = viewport();
    assert!(point_approx_eq(vp.percent_to_local(Point::new(50.0, 50.0)), Point::new(400.0, 200.0)));
    assert!(point_approx_eq(vp.percent_to_screen(Point::new(50.0, 50.0)), Point::new(500.0, 250.0)));
}

#[test]
fn screen_to_ink_scales_to_thousand() {
    let vp = viewport();
    let ink = vp.screen_to_ink(Point::new(500.0, 250.0));
    assert!(point_approx_eq(ink, Point::new(500.0, 500.0)));
    let corner = vp.screen_to_ink(Point::new(900.0, 450.0));
    assert!(point_approx_eq(corner, Point::new(1000.0, 1000.0)));
}

#[test]
fn ink_to_local_is_non_uniform() {
    let vp = viewport();
    let local = vp.ink_to_local(Point::new(500.0, 500.0));
    assert!(point_approx_eq(local, Point::new(400.0, 200.0)));
}

#[test]
fn zero_sized_viewport_maps_to_origin() {
    let vp = Viewport::new(10.0, 10.0, 0.0, 0.0);
    assert!(vp.is_empty());
    assert_eq!(vp.local_to_percent(Point::new(5.0, 5.0)), Point::new(0.0, 0.0));
    assert_eq!(vp.screen_to_ink(Point::new(50.0, 50.0)), Point::new(0.0, 0.0));
    assert!(!viewport().is_empty());
}
