//! Pointer sampler: turns touch and mouse events into `PointerSample`s.

use web_sys::{MouseEvent, TouchEvent, TouchList};

use crate::model::PointerSample;
use crate::util::now_ms;

pub fn sample_mouse(e: &MouseEvent) -> PointerSample {
    PointerSample::new(e.client_x() as f64, e.client_y() as f64, now_ms())
}

/// First active touch, or the first lifted one when none remain down.
pub fn sample_touch(e: &TouchEvent) -> Option<PointerSample> {
    let (x, y) = first_point(&touch_points(&e.touches()), &touch_points(&e.changed_touches()))?;
    Some(PointerSample::new(x, y, now_ms()))
}

/// On touchend `touches` is already empty; the lifted finger is only in
/// `changedTouches`.
pub fn first_point(active: &[(f64, f64)], changed: &[(f64, f64)]) -> Option<(f64, f64)> {
    active.first().or_else(|| changed.first()).copied()
}

pub fn touch_points(list: &TouchList) -> Vec<(f64, f64)> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| (t.client_x() as f64, t.client_y() as f64))
        .collect()
}
