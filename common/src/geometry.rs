//! Polar geometry shared by every layer of the face.
//!
//! Angles are measured clockwise from 12 o'clock in a fixed integer unit of
//! [`FULL_TURN`] steps per revolution. The unit is chosen so that every angle the
//! face uses lands on an exact integer:
//!
//! | Quantity | Degrees | Units |
//! |----------|---------|-------|
//! | Hour tick | 30 | 3600 |
//! | Minute hand step | 6 | 720 |
//! | Hour hand step (per minute) | 0.5 | 60 |
//! | Digit half width | 8 | 960 |
//!
//! Sine and cosine are fixed-point ratios scaled by [`TRIG_MAX_RATIO`]. Only the
//! first quadrant is evaluated; the other three are mirrored from it, so a point
//! and its reflection about the vertical axis always round the same way.

use core::ops::{Add, Sub};

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Angle Units
// =============================================================================

/// Angle units per full revolution.
pub const FULL_TURN: u32 = 43_200;

/// Angle units per degree.
pub const UNITS_PER_DEGREE: u32 = FULL_TURN / 360;

/// Fixed-point scale of [`Angle::sin_ratio`] and [`Angle::cos_ratio`].
pub const TRIG_MAX_RATIO: i32 = 1 << 16;

const QUARTER_TURN: u32 = FULL_TURN / 4;

// Hour hand moves 1/720 of a turn per minute; both must divide evenly.
const _: () = assert!(FULL_TURN % 720 == 0);
const _: () = assert!(FULL_TURN % 360 == 0);

/// An angle, normalized to `0..FULL_TURN`, clockwise from 12 o'clock.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Angle(u32);

impl Angle {
    /// 12 o'clock.
    pub const ZERO: Self = Self(0);

    /// Build from raw units, wrapping modulo a full turn.
    pub const fn from_units(units: i64) -> Self { Self(units.rem_euclid(FULL_TURN as i64) as u32) }

    /// Build from whole degrees, wrapping modulo a full turn.
    pub const fn from_degrees(degrees: i32) -> Self { Self::from_units(degrees as i64 * UNITS_PER_DEGREE as i64) }

    /// `numerator / denominator` of a full turn, truncated to whole units.
    ///
    /// Exact for every denominator dividing [`FULL_TURN`] (12, 60, 720, ...).
    pub const fn from_fraction(
        numerator: i64,
        denominator: i64,
    ) -> Self {
        Self::from_units(numerator * FULL_TURN as i64 / denominator)
    }

    /// Raw units in `0..FULL_TURN`.
    pub const fn units(self) -> u32 { self.0 }

    /// Whole degrees, if the angle sits exactly on one.
    pub const fn whole_degrees(self) -> Option<u32> {
        if self.0 % UNITS_PER_DEGREE == 0 {
            Some(self.0 / UNITS_PER_DEGREE)
        } else {
            None
        }
    }

    /// Bisector of the clockwise sweep from `self` to `end`.
    pub const fn bisect(
        self,
        end: Self,
    ) -> Self {
        let sweep = (end.0 + FULL_TURN - self.0) % FULL_TURN;
        Self::from_units(self.0 as i64 + (sweep / 2) as i64)
    }

    /// Sine scaled by [`TRIG_MAX_RATIO`].
    pub fn sin_ratio(self) -> i32 {
        let rem = self.0 % QUARTER_TURN;
        match self.0 / QUARTER_TURN {
            0 => quarter_sin(rem),
            1 => quarter_sin(QUARTER_TURN - rem),
            2 => -quarter_sin(rem),
            _ => -quarter_sin(QUARTER_TURN - rem),
        }
    }

    /// Cosine scaled by [`TRIG_MAX_RATIO`].
    pub fn cos_ratio(self) -> i32 { (self + Self(QUARTER_TURN)).sin_ratio() }
}

impl Add for Angle {
    type Output = Self;

    fn add(
        self,
        rhs: Self,
    ) -> Self {
        Self::from_units(i64::from(self.0) + i64::from(rhs.0))
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(
        self,
        rhs: Self,
    ) -> Self {
        Self::from_units(i64::from(self.0) - i64::from(rhs.0))
    }
}

/// Sine of a first-quadrant angle (`0..=QUARTER_TURN`).
fn quarter_sin(units: u32) -> i32 {
    match units {
        0 => 0,
        QUARTER_TURN => TRIG_MAX_RATIO,
        _ => {
            let radians = f64::from(units) * core::f64::consts::TAU / f64::from(FULL_TURN);
            libm::round(libm::sin(radians) * f64::from(TRIG_MAX_RATIO)) as i32
        }
    }
}

// =============================================================================
// Integer Helpers
// =============================================================================

/// Divide, rounding half away from zero. `denominator` must be positive.
#[inline]
pub(crate) const fn div_round(
    numerator: i64,
    denominator: i64,
) -> i64 {
    if numerator >= 0 {
        (numerator + denominator / 2) / denominator
    } else {
        (numerator - denominator / 2) / denominator
    }
}

/// Clamp a wide intermediate into the device coordinate range.
#[inline]
pub(crate) const fn saturate(value: i64) -> i32 {
    if value > i32::MAX as i64 {
        i32::MAX
    } else if value < i32::MIN as i64 {
        i32::MIN
    } else {
        value as i32
    }
}

/// Device length as a signed coordinate.
#[inline]
pub(crate) const fn length_i32(value: u32) -> i32 {
    if value > i32::MAX as u32 { i32::MAX } else { value as i32 }
}

// =============================================================================
// Polar Mapping
// =============================================================================

/// Place a point `radius` pixels from `center` along `angle`.
///
/// Angle 0 points straight up and angles grow clockwise. A negative radius
/// lands on the opposite side of the center (used for hand tails).
pub fn to_cartesian(
    center: Point,
    radius: i32,
    angle: Angle,
) -> Point {
    let scale = i64::from(TRIG_MAX_RATIO);
    let dx = div_round(i64::from(angle.sin_ratio()) * i64::from(radius), scale);
    let dy = div_round(-i64::from(angle.cos_ratio()) * i64::from(radius), scale);
    Point::new(
        saturate(i64::from(center.x) + dx),
        saturate(i64::from(center.y) + dy),
    )
}

/// Rectangle of `size` whose center is `midpoint`.
///
/// Odd extents floor toward the top-left, so two cells laid out from centers
/// exactly `(w1 + w2) / 2` apart (both even) share an edge with no gap.
pub fn rect_centered_at(
    midpoint: Point,
    size: Size,
) -> Rectangle {
    let top_left = Point::new(
        midpoint.x.saturating_sub(length_i32(size.width / 2)),
        midpoint.y.saturating_sub(length_i32(size.height / 2)),
    );
    Rectangle::new(top_left, size)
}

/// Center of a bounds rectangle, flooring odd extents.
pub fn bounds_center(bounds: &Rectangle) -> Point {
    Point::new(
        bounds.top_left.x.saturating_add(length_i32(bounds.size.width / 2)),
        bounds.top_left.y.saturating_add(length_i32(bounds.size.height / 2)),
    )
}

// =============================================================================
// Dial
// =============================================================================

/// The circular drawing region, derived from the display bounds every frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Dial {
    /// Center of the display bounds.
    pub center: Point,
    /// Visible radius, never negative.
    pub radius: i32,
}

impl Dial {
    /// `min(w, h) / 2 - margin`, clamped at zero.
    pub fn from_bounds(
        bounds: &Rectangle,
        margin: i32,
    ) -> Self {
        let short_side = bounds.size.width.min(bounds.size.height);
        Self {
            center: bounds_center(bounds),
            radius: length_i32(short_side / 2).saturating_sub(margin).max(0),
        }
    }

    /// Point on the dial at `radius` along `angle`.
    #[inline]
    pub fn point_at(
        &self,
        radius: i32,
        angle: Angle,
    ) -> Point {
        to_cartesian(self.center, radius, angle)
    }
}

// =============================================================================
// Tests
// =============================================================================
