//! Color constants for the face.
//!
//! The default swatches come from the 64-color palette of the watch this face
//! was first drawn for, where each channel takes one of four levels
//! (`0x00`, `0x55`, `0xAA`, `0xFF`). Keeping the defaults on that grid means a
//! face rendered on a 6-bit panel looks identical to the simulator.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Calendar text on light cells.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white. Calendar text on dark cells, default weekday cell.
pub const WHITE: Rgb888 = Rgb888::WHITE;

// =============================================================================
// Palette Swatches (defaults for the theme slots)
// =============================================================================

/// Deep navy (`#000055`). Outer background band.
pub const OXFORD_BLUE: Rgb888 = Rgb888::new(0x00, 0x00, 0x55);

/// Muted violet-blue (`#5555AA`). Inner background band.
pub const LIBERTY: Rgb888 = Rgb888::new(0x55, 0x55, 0xAA);

/// Beige (`#FFFFAA`). Hour digits and date cell.
pub const PASTEL_YELLOW: Rgb888 = Rgb888::new(0xFF, 0xFF, 0xAA);

/// Pale cyan (`#AAFFFF`). Hour hand.
pub const CELESTE: Rgb888 = Rgb888::new(0xAA, 0xFF, 0xFF);

/// Soft orange (`#FFAA55`). Minute hand.
pub const RAJAH: Rgb888 = Rgb888::new(0xFF, 0xAA, 0x55);

// =============================================================================
// Contrast
// =============================================================================

/// Perceived brightness, 0..=255 (BT.601 weights in 8-bit fixed point).
#[inline]
pub fn luminance(color: Rgb888) -> u32 {
    (color.r() as u32 * 77 + color.g() as u32 * 150 + color.b() as u32 * 29) >> 8
}

/// Text color that stays legible on `bg`: white on dark, black on light.
pub fn text_color_for_bg(bg: Rgb888) -> Rgb888 {
    if luminance(bg) < 128 { WHITE } else { BLACK }
}
