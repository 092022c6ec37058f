// src/viewport.rs

//! Maps the character grid onto the complex plane.
//!
//! A single animation phase in `[0, 1]`, derived from elapsed time, both pans
//! and zooms the view: the real interval slides right and narrows while the
//! imaginary interval shrinks symmetrically around zero.

use crate::complex::Complex;

/// Oscillating animation parameter in `[0, 1]` for a timestamp.
///
/// `sin(elapsed_millis / period_ms) * 0.5 + 0.5`, kept in `f64` rather than
/// narrowed to single precision.
pub fn phase(elapsed_millis: i64, period_ms: f64) -> f64 {
    (elapsed_millis as f64 / period_ms).sin() * 0.5 + 0.5
}

/// Linearly maps `coord` in `[0, dim - 1]` onto `[left, right]`.
///
/// `dim` must be greater than 1.
pub fn remap(coord: usize, dim: usize, left: f64, right: f64) -> f64 {
    coord as f64 * (right - left) / (dim - 1) as f64 + left
}

/// The region of the complex plane visible in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub re_min: f64,
    pub re_max: f64,
    pub im_min: f64,
    pub im_max: f64,
}

impl Viewport {
    /// The view for a given phase.
    ///
    /// Phase 0 shows `[-2, 1] x [-1, 1]`; phase 1 shows
    /// `[-0.25, 0.75] x [-0.33, 0.33]`.
    pub fn at_phase(sine: f64) -> Self {
        Viewport {
            re_min: -2.0 + 1.75 * sine,
            re_max: 1.0 - 0.25 * sine,
            im_min: -1.0 + 0.67 * sine,
            im_max: 1.0 - 0.67 * sine,
        }
    }

    /// The point under cell `(x, y)` of a `width` x `height` grid.
    pub fn point(&self, x: usize, y: usize, width: usize, height: usize) -> Complex {
        Complex::new(
            remap(x, width, self.re_min, self.re_max),
            remap(y, height, self.im_min, self.im_max),
        )
    }
}
