// src/glyph.rs

//! Defines the character ramp and how an escape-time count is quantized into
//! one of its glyphs.
//!
//! The ramp runs from the sparsest glyph (`.`) to the densest (`@`), so cells
//! whose orbit survives longer are drawn darker.

/// Glyphs ordered by increasing visual density.
pub const RAMP: [u8; 12] = *b".,-~:;=!*#$@";

/// Number of glyphs in [`RAMP`].
pub const RAMP_LEN: usize = RAMP.len();

/// Maps an iteration count in `[0, max_iter]` to an index into [`RAMP`].
///
/// The scale is `floor(iterations / max_iter * (RAMP_LEN - 1))`, computed in
/// floating point, so only a count equal to `max_iter` reaches the last glyph.
/// Counts outside the range are clamped to the ramp's ends; a zero budget
/// yields index 0.
pub fn glyph_index(iterations: i32, max_iter: i32) -> usize {
    if max_iter <= 0 || iterations <= 0 {
        return 0;
    }
    let scaled = iterations as f64 / max_iter as f64 * (RAMP_LEN - 1) as f64;
    (scaled as usize).min(RAMP_LEN - 1)
}

/// The glyph byte for an iteration count. See [`glyph_index`].
pub fn glyph_for(iterations: i32, max_iter: i32) -> u8 {
    RAMP[glyph_index(iterations, max_iter)]
}
