//! Rendering core for the sea-lines analog watch face.
//!
//! Everything needed to paint one frame from (bounds, time, theme), shared
//! between the desktop simulator and any panel driver:
//!
//! - [`geometry`]: angle units, fixed-point trig and polar mapping
//! - [`canvas`]: the draw vocabulary and its `embedded-graphics` adapter
//! - [`colors`]: default swatches and the text contrast rule
//! - [`styles`]: font tiers for text cells
//! - [`config`]: layout constants
//! - [`widgets`]: background, hour labels, calendar cells and hands
//! - [`theme`]: the seven color slots, configuration messages and storage
//! - [`clock`]: broken-down wall-clock time
//! - [`face`]: the frame composer
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests. Floating point is only used to
//! evaluate sines, through `libm`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod canvas;
pub mod clock;
pub mod colors;
pub mod config;
pub mod face;
pub mod geometry;
pub mod styles;
pub mod theme;
pub mod widgets;

// Re-export commonly used items
pub use canvas::{Canvas, DisplayCanvas};
pub use clock::{WallClock, Weekday};
pub use face::{Face, FaceEvent, FaceVariant};
pub use theme::{ConfigMessage, Theme, ThemeColor, ThemeKey, ThemeStore};
