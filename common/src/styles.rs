//! Font tiers for text cells.
//!
//! The face only ever draws short labels (day of month, weekday) inside boxes
//! whose height is fixed by the layout. Instead of measuring text, each box
//! height maps onto one of four tiers; a tier names the regular and bold fonts
//! plus two metrics, read off the rendered glyphs, used for vertical placement:
//!
//! - `cap_height`: height of a capital/digit glyph in pixels
//! - `top_pad`: empty rows between the top of the glyph cell and the cap line
//!
//! | Box height | Regular | Bold | Cap | Top pad |
//! |------------|---------|------|-----|---------|
//! | < 14 | - | - | - | - |
//! | 14-17 | 6x13 | 6x13 bold | 9 | 2 |
//! | 18-23 | 9x15 | 9x15 bold | 10 | 2 |
//! | 24-27 | 9x18 | 9x18 bold | 10 | 4 |
//! | >= 28 | `ProFont` 24pt | `ProFont` 24pt | 19 | 5 |

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_6X13, FONT_6X13_BOLD, FONT_9X15, FONT_9X15_BOLD, FONT_9X18, FONT_9X18_BOLD};
use profont::PROFONT_24_POINT;

/// Boxes shorter than this are not drawn at all.
pub const MIN_TEXT_HEIGHT: u32 = 14;

/// One font size tier.
#[derive(Clone, Copy, Debug)]
pub struct FontTier {
    /// Smallest box height (inclusive) this tier is used for.
    pub min_height: u32,
    /// Font for regular text.
    pub regular: &'static MonoFont<'static>,
    /// Font for bold text.
    pub bold: &'static MonoFont<'static>,
    /// Height of a digit/capital glyph.
    pub cap_height: i32,
    /// Rows above the cap line inside the glyph cell.
    pub top_pad: i32,
}

impl FontTier {
    /// Regular or bold font of this tier.
    #[inline]
    pub const fn font(
        &self,
        bold: bool,
    ) -> &'static MonoFont<'static> {
        if bold { self.bold } else { self.regular }
    }
}

/// Tiers in ascending order of `min_height`.
pub const FONT_TIERS: [FontTier; 4] = [
    FontTier {
        min_height: MIN_TEXT_HEIGHT,
        regular: &FONT_6X13,
        bold: &FONT_6X13_BOLD,
        cap_height: 9,
        top_pad: 2,
    },
    FontTier {
        min_height: 18,
        regular: &FONT_9X15,
        bold: &FONT_9X15_BOLD,
        cap_height: 10,
        top_pad: 2,
    },
    FontTier {
        min_height: 24,
        regular: &FONT_9X18,
        bold: &FONT_9X18_BOLD,
        cap_height: 10,
        top_pad: 4,
    },
    FontTier {
        min_height: 28,
        regular: &PROFONT_24_POINT,
        bold: &PROFONT_24_POINT,
        cap_height: 19,
        top_pad: 5,
    },
];

const _: () = assert!(FONT_TIERS[0].min_height == MIN_TEXT_HEIGHT);
const _: () = assert!(FONT_TIERS[0].min_height < FONT_TIERS[1].min_height);
const _: () = assert!(FONT_TIERS[1].min_height < FONT_TIERS[2].min_height);
const _: () = assert!(FONT_TIERS[2].min_height < FONT_TIERS[3].min_height);

/// Largest tier that fits a box of `height` pixels, or `None` if too small.
pub fn tier_for_height(height: u32) -> Option<&'static FontTier> {
    FONT_TIERS.iter().rev().find(|tier| height >= tier.min_height)
}
