//! Text cells: short labels vertically placed inside a fixed box.
//!
//! The box height picks a font tier (see [`styles`](crate::styles)); the tier's
//! cap height and top padding then decide how far the glyph cell is shifted so
//! the visible digits sit where the alignment mode wants them.
//!
//! # Vertical Alignment
//!
//! With `bot_pad = box_height - cap_height - top_pad`, the upward shift is:
//!
//! | Mode | Shift up |
//! |------|----------|
//! | `Center` | `(top_pad - bot_pad) / 2 + CENTER_BIAS` |
//! | `Top` | `top_pad` |
//! | `Bottom` | `-bot_pad` |
//! | `Unadjusted` | `0` |
//!
//! Division truncates toward zero. The one-pixel center bias nudges digits up,
//! which reads as centered on small panels.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;

use crate::canvas::Canvas;
use crate::styles::{FontTier, tier_for_height};

/// Extra upward nudge applied when centering.
pub const CENTER_BIAS: i32 = 1;

/// Vertical placement of text inside its box.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum VAlign {
    /// Cap height centered in the box (with [`CENTER_BIAS`]).
    #[default]
    Center,
    /// Cap line on the top edge of the box.
    Top,
    /// Glyph baseline on the bottom edge of the box.
    Bottom,
    /// Glyph cell top on the box top.
    Unadjusted,
}

/// Pixels to move the glyph cell up for a box of `box_height` drawn in `tier`.
pub const fn vertical_shift(
    tier: &FontTier,
    box_height: i32,
    valign: VAlign,
) -> i32 {
    let bot_pad = box_height - tier.cap_height - tier.top_pad;
    match valign {
        VAlign::Center => (tier.top_pad - bot_pad) / 2 + CENTER_BIAS,
        VAlign::Top => tier.top_pad,
        VAlign::Bottom => -bot_pad,
        VAlign::Unadjusted => 0,
    }
}

/// Draw `text` inside `bbox`, choosing the font from the box height.
///
/// Returns `false` without touching the canvas when the box is shorter than
/// the smallest tier; there is no legible way to draw it.
#[allow(clippy::too_many_arguments)]
pub fn draw_text_cell<C>(
    canvas: &mut C,
    text: &str,
    bbox: Rectangle,
    alignment: Alignment,
    bold: bool,
    valign: VAlign,
    color: Rgb888,
) -> bool
where
    C: Canvas,
{
    let Some(tier) = tier_for_height(bbox.size.height) else {
        log::trace!("text cell {}px tall is below the smallest font tier", bbox.size.height);
        return false;
    };

    let shift = vertical_shift(tier, bbox.size.height as i32, valign);
    let shifted = Rectangle::new(bbox.top_left - Point::new(0, shift), bbox.size);
    canvas.draw_text(text, shifted, tier.font(bold), alignment, color);
    true
}
