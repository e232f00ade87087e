//! Simulator configuration constants.
//!
//! These use `std::time::Duration` and host paths, so they live here rather
//! than in the `no_std` core.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Default display width in pixels (rectangular watch panel).
pub const DEFAULT_WIDTH: u32 = 144;

/// Default display height in pixels.
pub const DEFAULT_HEIGHT: u32 = 168;

/// Default window pixel scale.
pub const DEFAULT_SCALE: u32 = 3;

/// Window title.
pub const WINDOW_TITLE: &str = "Sea Lines";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Event polling period. The face itself only repaints on ticks and
/// configuration changes.
pub const FRAME_TIME: Duration = Duration::from_millis(50);

// =============================================================================
// Theme Store
// =============================================================================

/// `ProjectDirs` qualifier, organization and application.
pub const PROJECT_DIRS: (&str, &str, &str) = ("com", "sea-lines", "sea-lines");

/// Theme file name inside the platform config directory.
pub const STORE_FILE_NAME: &str = "theme.json";
