// src/orchestrator.rs
//! Orchestrates the animation: sizes the frame once from the terminal, then
//! homes the cursor and renders a fresh frame forever.
//!
//! The platform is held as a trait object so the loop can be driven by a
//! scripted platform in tests.

use crate::{
    platform::{Platform, TerminalSize},
    renderer::{FrameBuffer, Renderer},
};
use anyhow::{bail, Context, Result};

/// `ESC [ H`: move the cursor to the top-left cell.
pub const CURSOR_HOME: &[u8] = b"\x1b[H";

/// Owns the frame buffer and drives the renderer against a platform.
pub struct AppOrchestrator<'a> {
    platform: &'a mut dyn Platform,
    renderer: Renderer,
    frame: FrameBuffer,
    max_iterations: i32,
    frames_rendered: u64,
}

impl<'a> AppOrchestrator<'a> {
    /// Queries the terminal size and allocates the frame buffer.
    ///
    /// Fails if the size cannot be read or either dimension is 1 or less.
    pub fn new(
        platform: &'a mut dyn Platform,
        renderer: Renderer,
        max_iterations: i32,
    ) -> Result<Self> {
        let size = platform
            .terminal_size()
            .context("Orchestrator: Unable to determine terminal size")?;
        check_size(size)?;
        log::info!(
            "Orchestrator: Allocating {}x{} frame ({} cells).",
            size.cols,
            size.rows,
            size.cell_count()
        );

        Ok(AppOrchestrator {
            platform,
            renderer,
            frame: FrameBuffer::new(size),
            max_iterations,
            frames_rendered: 0,
        })
    }

    /// Homes the cursor and renders one frame at the platform's current time.
    pub fn process_frame(&mut self) -> Result<()> {
        self.platform
            .write_bytes(CURSOR_HOME)
            .context("Orchestrator: Failed to home cursor")?;
        let now = self.platform.now_millis();
        self.renderer
            .render(&mut self.frame, self.max_iterations, now, &mut *self.platform)?;
        self.platform.present()?;

        self.frames_rendered += 1;
        log::trace!(
            "Orchestrator: Frame {} rendered at t={}ms.",
            self.frames_rendered,
            now
        );
        Ok(())
    }

    /// Renders frames until an I/O error occurs. There is no other way out:
    /// in normal operation the process runs until it is killed.
    pub fn run(&mut self) -> Result<()> {
        log::info!("Orchestrator: Starting render loop.");
        loop {
            self.process_frame()?;
        }
    }

    #[cfg(test)]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    #[cfg(test)]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

fn check_size(size: TerminalSize) -> Result<()> {
    if size.is_degenerate() {
        bail!(
            "Orchestrator: Terminal size {}x{} is too small to render into",
            size.cols,
            size.rows
        );
    }
    Ok(())
}
