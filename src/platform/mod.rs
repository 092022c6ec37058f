// src/platform/mod.rs
//
// This module re-exports the platform-specific functionalities.

#[cfg(unix)]
pub mod console_platform;
#[cfg(test)]
pub mod mock;
pub mod platform_trait;

#[cfg(unix)]
pub use console_platform::ConsolePlatform;
pub use platform_trait::{Platform, TerminalSize};
