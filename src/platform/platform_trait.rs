// src/platform/platform_trait.rs
//
// Defines the `Platform` trait, which abstracts over the few OS services the
// animation needs: the terminal's size, a clock and a byte sink.

use anyhow::Result;

/// Dimensions of the output terminal, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub cols: usize,
    pub rows: usize,
}

impl TerminalSize {
    pub fn new(cols: usize, rows: usize) -> Self {
        TerminalSize { cols, rows }
    }

    /// Number of cells in a full frame.
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// A size of one row or one column cannot be remapped onto an interval.
    pub fn is_degenerate(&self) -> bool {
        self.cols <= 1 || self.rows <= 1
    }
}

/// A trait that defines the interface for a platform implementation.
///
/// Implementations provide the terminal size once at startup, a millisecond
/// timestamp per frame, and somewhere to write frame bytes.
pub trait Platform {
    /// Queries the current terminal size.
    fn terminal_size(&self) -> Result<TerminalSize>;

    /// Milliseconds on a clock that advances in real time. Only the phase of
    /// the value matters, not its origin.
    fn now_millis(&self) -> i64;

    /// Writes raw bytes to the terminal.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// Makes everything written so far visible.
    fn present(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_sizes() {
        assert!(TerminalSize::new(1, 24).is_degenerate());
        assert!(TerminalSize::new(80, 1).is_degenerate());
        assert!(TerminalSize::new(0, 0).is_degenerate());
        assert!(!TerminalSize::new(2, 2).is_degenerate());
        assert_eq!(TerminalSize::new(80, 24).cell_count(), 1920);
    }
}
