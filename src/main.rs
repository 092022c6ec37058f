// src/main.rs

// The console platform talks to the terminal through TIOCGWINSZ.
#[cfg(not(unix))]
compile_error!("ascii-mandelbrot only supports unix terminals");

// Declare modules
pub mod complex;
pub mod config;
pub mod escape;
pub mod glyph;
pub mod orchestrator;
pub mod platform;
pub mod renderer;
pub mod viewport;

use std::process::ExitCode;

use crate::{
    config::CONFIG,
    orchestrator::AppOrchestrator,
    platform::ConsolePlatform,
    renderer::Renderer,
};

// Logging
use anyhow::Context;
use log::{debug, error, info};

/// Exit status when the terminal cannot be used; the low byte of `-1`.
const STARTUP_FAILURE: u8 = 255;

/// Main entry point for `ascii-mandelbrot`.
///
/// Only returns if the terminal cannot be sized or stdout goes away.
fn main() -> ExitCode {
    // Diagnostics go to stderr, which usually shares the terminal with the
    // animation, so stay quiet unless RUST_LOG asks otherwise.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    info!("Starting ascii-mandelbrot...");
    match serde_json::to_string(&*CONFIG) {
        Ok(json) => debug!("Configuration: {}", json),
        Err(e) => debug!("Configuration could not be serialized: {}", e),
    }

    let mut platform = ConsolePlatform::new();
    let renderer = Renderer::new(CONFIG.animation.phase_period_ms);

    let mut orchestrator =
        match AppOrchestrator::new(&mut platform, renderer, CONFIG.render.max_iterations)
            .context("Failed to start animation")
        {
            Ok(orchestrator) => orchestrator,
            Err(e) => {
                eprintln!("Error: {:?}", e);
                return ExitCode::from(STARTUP_FAILURE);
            }
        };

    match orchestrator.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Render loop stopped: {:#}", e);
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
