// Host-side tests for pure input helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::DVec2;
use input::*;

#[test]
fn css_offset_subtracts_canvas_origin() {
    let p = css_offset(DVec2::new(120.0, 80.0), 20.0, 30.0);
    assert_eq!(p, DVec2::new(100.0, 50.0));
}

#[test]
fn first_finite_skips_missing_and_nan() {
    let a = Some(DVec2::new(f64::NAN, 1.0));
    let b = Some(DVec2::new(3.0, 4.0));
    assert_eq!(first_finite(&[None, a, b]), b);
    assert_eq!(first_finite(&[None, a]), None);
    assert_eq!(first_finite(&[]), None);
}
