// src/renderer.rs

//! This module defines the `Renderer` and the `FrameBuffer` it draws into.
//!
//! The `Renderer` turns one timestamp into one full frame of ASCII art: every
//! cell of the grid is mapped onto the complex plane through the current
//! [`Viewport`], evaluated with [`escape_time`], and quantized onto the
//! character ramp. The finished frame is handed to the [`Platform`] in one
//! write, row 0 first, with no line breaks; the terminal's own wrapping at
//! `width` columns produces the visual rows.

use crate::complex::ZERO;
use crate::escape::escape_time;
use crate::glyph::glyph_for;
use crate::platform::{Platform, TerminalSize};
use crate::viewport::{phase, Viewport};

use anyhow::{Context, Result};
use log::trace;

/// A `width` x `height` grid of glyph bytes, stored row-major.
///
/// Cell `(x, y)` lives at `y * width + x`. The length never changes after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl FrameBuffer {
    /// Allocates a blank frame for a terminal of the given size.
    pub fn new(size: TerminalSize) -> Self {
        FrameBuffer {
            width: size.cols,
            height: size.rows,
            cells: vec![b' '; size.cell_count()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, glyph: u8) {
        self.cells[y * self.width + x] = glyph;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }
}

/// Renders frames of the animated Mandelbrot view.
///
/// The `Renderer` keeps no state between frames other than the length of the
/// animation period.
#[derive(Debug, Clone)]
pub struct Renderer {
    phase_period_ms: f64,
}

impl Renderer {
    /// Creates a `Renderer` whose view completes one pan/zoom cycle every
    /// `2π · phase_period_ms` milliseconds.
    pub fn new(phase_period_ms: f64) -> Self {
        Self { phase_period_ms }
    }

    /// Fills `frame` for the moment `elapsed_millis` without writing it
    /// anywhere.
    ///
    /// Rows are visited from `height - 1` down to 0. Row `y` maps onto the
    /// imaginary axis so that row 0 sits at the low end of the interval.
    pub fn fill(&self, frame: &mut FrameBuffer, max_iter: i32, elapsed_millis: i64) {
        let sine = phase(elapsed_millis, self.phase_period_ms);
        let view = Viewport::at_phase(sine);
        let (width, height) = (frame.width(), frame.height());
        trace!("Renderer: phase {:.4}, view {:?}", sine, view);

        for y in (0..height).rev() {
            for x in 0..width {
                let c = view.point(x, y, width, height);
                let iterations = escape_time(ZERO, c, max_iter);
                frame.set(x, y, glyph_for(iterations, max_iter));
            }
        }
    }

    /// Fills `frame` and writes all of its `width * height` bytes to the
    /// platform.
    pub fn render(
        &self,
        frame: &mut FrameBuffer,
        max_iter: i32,
        elapsed_millis: i64,
        platform: &mut dyn Platform,
    ) -> Result<()> {
        self.fill(frame, max_iter, elapsed_millis);
        platform
            .write_bytes(frame.as_bytes())
            .context("Renderer: Failed to write frame")
    }
}
