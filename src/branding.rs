//! Branding and application identity configuration.
//!
//! This module centralizes the names and paths that identify the application.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "Calculator Modes";

/// The binary/executable name (lowercase, no spaces).
///
/// Used in command examples and error hints.
pub const APP_BINARY_NAME: &str = "calcmodes";

/// The directory name for application data.
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "calcmodes";
