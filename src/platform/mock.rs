// src/platform/mock.rs

use std::cell::Cell;

use anyhow::{anyhow, Result};

use crate::platform::platform_trait::{Platform, TerminalSize};

/// Scripted platform for driving the animation without a terminal.
///
/// The clock advances by `tick_millis` on every read, and everything written
/// is captured in `output`.
pub struct MockPlatform {
    size: Option<TerminalSize>,
    clock_millis: Cell<i64>,
    tick_millis: i64,
    output: Vec<u8>,
    presents: usize,
    fail_writes: bool,
}

impl MockPlatform {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            size: Some(TerminalSize::new(cols, rows)),
            clock_millis: Cell::new(0),
            tick_millis: 0,
            output: Vec::new(),
            presents: 0,
            fail_writes: false,
        }
    }

    /// A platform whose size query fails, as when stdin is not a tty.
    pub fn without_terminal() -> Self {
        Self {
            size: None,
            ..Self::new(0, 0)
        }
    }

    pub fn with_clock(mut self, start_millis: i64, tick_millis: i64) -> Self {
        self.clock_millis = Cell::new(start_millis);
        self.tick_millis = tick_millis;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }

    pub fn presents(&self) -> usize {
        self.presents
    }
}

impl Platform for MockPlatform {
    fn terminal_size(&self) -> Result<TerminalSize> {
        self.size
            .ok_or_else(|| anyhow!("MockPlatform: no terminal attached"))
    }

    fn now_millis(&self) -> i64 {
        let now = self.clock_millis.get();
        self.clock_millis.set(now + self.tick_millis);
        now
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if self.fail_writes {
            return Err(anyhow!("MockPlatform: broken pipe"));
        }
        self.output.extend_from_slice(bytes);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.presents += 1;
        Ok(())
    }
}
