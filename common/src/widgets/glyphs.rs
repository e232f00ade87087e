//! Stroke digits laid out on the dial.
//!
//! A digit is drawn inside a *wedge*: the slice of an annulus between an inner
//! and outer radius and a left and right angle. Nine anchor points span the
//! wedge, three per radius:
//!
//! ```text
//!   outer   TL ---- TC ---- TR
//!            |       |       |
//!   mid     ML ---- MC ---- MR
//!            |       |       |
//!   inner   BL ---- BC ---- BR
//!         left   bisector   right
//! ```
//!
//! Each digit is a fixed list of segments between anchors, following seven
//! segment display shapes. Digits on the lower half of the dial would read
//! upside down, so they are drawn with anchors rotated by half a turn
//! (`BL <-> TR`, `BC <-> TC`, `BR <-> TL`, `ML <-> MR`).

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::canvas::Canvas;
use crate::geometry::{Angle, to_cartesian};

/// Segment anchor inside a wedge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Anchor {
    BottomLeft,
    BottomCenter,
    BottomRight,
    MidLeft,
    MidCenter,
    MidRight,
    TopLeft,
    TopCenter,
    TopRight,
}

impl Anchor {
    /// The same anchor after rotating the glyph by half a turn.
    pub const fn flipped(self) -> Self {
        match self {
            Self::BottomLeft => Self::TopRight,
            Self::BottomCenter => Self::TopCenter,
            Self::BottomRight => Self::TopLeft,
            Self::MidLeft => Self::MidRight,
            Self::MidCenter => Self::MidCenter,
            Self::MidRight => Self::MidLeft,
            Self::TopLeft => Self::BottomRight,
            Self::TopCenter => Self::BottomCenter,
            Self::TopRight => Self::BottomLeft,
        }
    }
}

/// A segment between two anchors.
pub type Segment = (Anchor, Anchor);

use Anchor::{
    BottomCenter as BC,
    BottomLeft as BL,
    BottomRight as BR,
    MidLeft as ML,
    MidRight as MR,
    TopCenter as TC,
    TopLeft as TL,
    TopRight as TR,
};

/// Segments of each decimal digit, indexed by value.
pub const DIGIT_SEGMENTS: [&[Segment]; 10] = [
    &[(TL, TR), (TR, BR), (BR, BL), (BL, TL)],
    &[(TC, BC)],
    &[(TL, TR), (TR, MR), (MR, ML), (ML, BL), (BL, BR)],
    &[(TL, TR), (TR, BR), (BR, BL), (ML, MR)],
    &[(TL, ML), (ML, MR), (TR, BR)],
    &[(TR, TL), (TL, ML), (ML, MR), (MR, BR), (BR, BL)],
    &[(TR, TL), (TL, BL), (BL, BR), (BR, MR), (MR, ML)],
    &[(TL, TR), (TR, BR)],
    &[(TL, TR), (ML, MR), (BL, BR), (TL, BL), (TR, BR)],
    &[(TL, TR), (TR, BR), (BR, BL), (TL, ML), (ML, MR)],
];

// =============================================================================
// Wedge
// =============================================================================

/// The angular cell one digit is drawn in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Wedge {
    /// Dial center.
    pub center: Point,
    /// Radius of the glyph's bottom edge (toward the center).
    pub inner_radius: i32,
    /// Radius of the glyph's top edge (toward the rim).
    pub outer_radius: i32,
    /// Counter-clockwise edge.
    pub left: Angle,
    /// Clockwise edge.
    pub right: Angle,
}

impl Wedge {
    /// Device position of an anchor.
    pub fn anchor(
        &self,
        anchor: Anchor,
    ) -> Point {
        let mid_radius = self.inner_radius + (self.outer_radius - self.inner_radius) / 2;
        let bisector = self.left.bisect(self.right);
        let (radius, angle) = match anchor {
            Anchor::BottomLeft => (self.inner_radius, self.left),
            Anchor::BottomCenter => (self.inner_radius, bisector),
            Anchor::BottomRight => (self.inner_radius, self.right),
            Anchor::MidLeft => (mid_radius, self.left),
            Anchor::MidCenter => (mid_radius, bisector),
            Anchor::MidRight => (mid_radius, self.right),
            Anchor::TopLeft => (self.outer_radius, self.left),
            Anchor::TopCenter => (self.outer_radius, bisector),
            Anchor::TopRight => (self.outer_radius, self.right),
        };
        to_cartesian(self.center, radius, angle)
    }

    /// Split at the bisector into a left and a right half.
    pub fn split(&self) -> (Self, Self) {
        let bisector = self.left.bisect(self.right);
        (Self { right: bisector, ..*self }, Self { left: bisector, ..*self })
    }

    /// A wedge with no room between its radii cannot hold a glyph.
    pub const fn is_drawable(&self) -> bool { self.inner_radius > 0 && self.outer_radius > self.inner_radius }
}

// =============================================================================
// Digit Rendering
// =============================================================================

/// Hour labels strictly between 3 and 9 sit on the lower half and are flipped.
pub const fn needs_flip(hour_label: u32) -> bool { hour_label > 3 && hour_label < 9 }

/// Line segments of `digit` in device coordinates. Empty for non-digits.
pub fn digit_strokes(
    digit: u32,
    wedge: &Wedge,
    flip: bool,
) -> impl Iterator<Item = (Point, Point)> + '_ {
    let segments: &[Segment] = DIGIT_SEGMENTS.get(digit as usize).copied().unwrap_or(&[]);
    segments.iter().map(move |&(a, b)| {
        let (a, b) = if flip { (a.flipped(), b.flipped()) } else { (a, b) };
        (wedge.anchor(a), wedge.anchor(b))
    })
}

/// Draw one decimal digit.
pub fn draw_digit<C>(
    canvas: &mut C,
    digit: u32,
    wedge: &Wedge,
    flip: bool,
    stroke_width: u32,
    color: Rgb888,
) where
    C: Canvas,
{
    if !wedge.is_drawable() {
        return;
    }
    for (start, end) in digit_strokes(digit, wedge, flip) {
        canvas.draw_line(start, end, stroke_width, color);
    }
}

/// Draw a one- or two-digit number across the wedge.
///
/// Two-digit values share the wedge, each digit taking the half on its side
/// of the bisector.
pub fn draw_number<C>(
    canvas: &mut C,
    value: u32,
    wedge: &Wedge,
    flip: bool,
    stroke_width: u32,
    color: Rgb888,
) where
    C: Canvas,
{
    if value < 10 {
        draw_digit(canvas, value, wedge, flip, stroke_width, color);
    } else {
        let (left, right) = wedge.split();
        // Flipped numbers read right-to-left in dial angle order.
        let (tens_wedge, ones_wedge) = if flip { (right, left) } else { (left, right) };
        draw_digit(canvas, value / 10 % 10, &tens_wedge, flip, stroke_width, color);
        draw_digit(canvas, value % 10, &ones_wedge, flip, stroke_width, color);
    }
}
