// src/platform/console_platform.rs
//
// Console platform implementation: the real terminal on stdin/stdout.

use std::io::{self, BufWriter, Stdout, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use libc::STDIN_FILENO;
use log::{debug, info, trace, warn};
use nix::pty::Winsize;

use crate::platform::platform_trait::{Platform, TerminalSize};

nix::ioctl_read_bad!(tiocgwinsz, libc::TIOCGWINSZ, Winsize);

pub struct ConsolePlatform {
    out: BufWriter<Stdout>,
}

impl ConsolePlatform {
    pub fn new() -> Self {
        info!("Initializing ConsolePlatform on stdout");
        Self {
            out: BufWriter::new(io::stdout()),
        }
    }
}

impl Default for ConsolePlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for ConsolePlatform {
    fn terminal_size(&self) -> Result<TerminalSize> {
        let size = get_terminal_size_cells(STDIN_FILENO)
            .context("ConsolePlatform: Failed to get terminal size")?;
        debug!("ConsolePlatform: terminal is {}x{} cells", size.cols, size.rows);
        Ok(size)
    }

    fn now_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since_epoch) => since_epoch.as_millis() as i64,
            Err(e) => {
                // Clock set before 1970; the phase still advances, just negated.
                warn!("ConsolePlatform: system clock before epoch: {}", e);
                -(e.duration().as_millis() as i64)
            }
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        trace!("ConsolePlatform: writing {} bytes", bytes.len());
        self.out
            .write_all(bytes)
            .context("ConsolePlatform: Failed to write to stdout")
    }

    fn present(&mut self) -> Result<()> {
        self.out
            .flush()
            .context("ConsolePlatform: Failed to flush stdout during present")
    }
}

/// Reads the window size of the terminal behind `fd`.
///
/// Unlike a full terminal driver, a zero dimension is reported as-is rather
/// than replaced by a default; callers decide whether it is usable.
fn get_terminal_size_cells(fd: libc::c_int) -> Result<TerminalSize> {
    let mut winsz = Winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: `winsz` is a valid, writable Winsize for the duration of the call.
    unsafe { tiocgwinsz(fd, &mut winsz) }.context("ioctl(TIOCGWINSZ) failed")?;
    Ok(TerminalSize::new(winsz.ws_col as usize, winsz.ws_row as usize))
}
