#![allow(clippy::float_cmp)]

use super::*;

fn size(w: f64, h: f64) -> Size {
    Size::new(w, h).unwrap()
}

#[test]
fn new_fills_every_cell() {
    let canvas = Canvas::new(size(3.0, 2.0), '#');
    assert_eq!(canvas.width(), 3);
    assert_eq!(canvas.height(), 2);
    for row in canvas.rows() {
        assert_eq!(row, ['#', '#', '#']);
    }
}

#[test]
fn blank_uses_space() {
    let canvas = Canvas::blank(size(2.0, 1.0));
    assert_eq!(canvas.row_string(0).as_deref(), Some("  "));
}

#[test]
fn fractional_size_truncates() {
    let canvas = Canvas::blank(size(4.9, 2.1));
    assert_eq!(canvas.width(), 4);
    assert_eq!(canvas.height(), 2);
}

#[test]
fn zero_size_has_no_rows() {
    let canvas = Canvas::blank(size(0.0, 0.0));
    assert_eq!(canvas.rows().count(), 0);
    assert!(canvas.row(0).is_none());
}

#[test]
fn size_round_trips_dimensions() {
    let canvas = Canvas::blank(size(45.0, 15.0));
    let s = canvas.size();
    assert_eq!(s.width(), 45.0);
    assert_eq!(s.height(), 15.0);
}

#[test]
fn set_then_get() {
    let mut canvas = Canvas::blank(size(3.0, 3.0));
    assert!(canvas.set(1, 2, 'x'));
    assert_eq!(canvas.get(1, 2), Some('x'));
    assert_eq!(canvas.row_string(1).as_deref(), Some("  x"));
}

#[test]
fn set_out_of_bounds_is_ignored() {
    let mut canvas = Canvas::blank(size(2.0, 2.0));
    assert!(!canvas.set(2, 0, 'x'));
    assert!(!canvas.set(0, 2, 'x'));
    assert_eq!(canvas, Canvas::blank(size(2.0, 2.0)));
}

#[test]
fn get_out_of_bounds_is_none() {
    let canvas = Canvas::blank(size(2.0, 2.0));
    assert_eq!(canvas.get(5, 0), None);
    assert_eq!(canvas.get(0, 5), None);
}
