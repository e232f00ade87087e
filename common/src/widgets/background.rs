//! Background painters.
//!
//! Two strategies fill the whole surface in the theme's two background colors:
//!
//! - [`draw_bands`]: concentric rings, painted from the outside in. Each step
//!   fills a full disc plus a "seam" rectangle over the right half, so the left
//!   half shows rings and the right half shows horizontal stripes. Later, smaller
//!   discs overdraw earlier ones, which is why the order must stay outer-first.
//! - [`draw_lobes`]: half-annulus polygons, two per ring, with each ring's start
//!   angle twisted a little further than the last. Paths live in a fixed
//!   `heapless` buffer whose capacity is the point count of the sampling step.
//!
//! Both start from [`corner_radius`], which reaches past every corner of the
//! bounds for any display size.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::canvas::Canvas;
use crate::geometry::{Angle, saturate, to_cartesian};

// =============================================================================
// Shared
// =============================================================================

/// Diagonal factor in thousandths, rounded up from sqrt(2) so the result is
/// never short of the true half-diagonal.
pub const CORNER_RATIO_MILLI: i64 = 1415;

/// Radius from the center that reaches every corner of a `size` surface.
pub fn corner_radius(size: Size) -> i32 {
    let longest = i64::from(size.width.max(size.height));
    saturate((CORNER_RATIO_MILLI * longest + 1999) / 2000)
}

// =============================================================================
// Concentric Bands
// =============================================================================

/// Width of one concentric band.
pub const BAND_WIDTH: i32 = 4;

/// Paint concentric bands, alternating `primary` and `secondary` from the rim.
pub fn draw_bands<C>(
    canvas: &mut C,
    bounds: &Rectangle,
    center: Point,
    primary: Rgb888,
    secondary: Rgb888,
) where
    C: Canvas,
{
    let seam_width = bounds.size.width / 2;
    let mut radius = corner_radius(bounds.size);
    let mut band = 0u32;

    while radius > BAND_WIDTH {
        let color = if band % 2 == 0 { primary } else { secondary };
        canvas.fill_circle(center, radius as u32, color);

        let seam = Rectangle::new(
            to_cartesian(center, radius, Angle::ZERO),
            Size::new(seam_width, (radius as u32).saturating_mul(2).saturating_add(1)),
        );
        canvas.fill_rect(seam, color);

        radius -= BAND_WIDTH;
        band += 1;
    }
}

// =============================================================================
// Lobed Arcs
// =============================================================================

/// Radial width of one lobe ring.
pub const LOBE_RING_WIDTH: i32 = 8;

/// Extra start-angle rotation per ring, in degrees.
pub const LOBE_TWIST_DEGREES: i32 = 20;

/// Angular span of one lobe, in degrees.
pub const LOBE_SPAN_DEGREES: u32 = 180;

/// Points in one closed lobe path sampled every `step_degrees`: an outer and
/// an inner arc, both ends included.
pub const fn lobe_points(step_degrees: u32) -> usize {
    assert!(step_degrees > 0 && LOBE_SPAN_DEGREES % step_degrees == 0, "arc step must divide the lobe span");
    2 * (LOBE_SPAN_DEGREES / step_degrees + 1) as usize
}

/// Closed outline of one lobe with room for exactly `N` points.
pub type LobePath<const N: usize> = Vec<Point, N>;

/// Arc sampling for lobe paths of `N` points.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LobeSampling<const N: usize> {
    step_degrees: u32,
}

impl<const N: usize> LobeSampling<N> {
    /// Sample each arc every `step_degrees`.
    ///
    /// # Panics
    ///
    /// If the step does not divide the lobe span or does not produce exactly
    /// `N` points. In a `const` this is a compile error.
    pub const fn new(step_degrees: u32) -> Self {
        assert!(lobe_points(step_degrees) == N, "lobe path does not match its buffer");
        Self { step_degrees }
    }

    /// Points in each arc, both ends included.
    pub const fn samples_per_arc(self) -> usize { N / 2 }

    /// Points in one closed lobe path.
    pub const fn points_per_lobe(self) -> usize { N }

    fn arc_angle(
        self,
        start: Angle,
        sample: usize,
    ) -> Angle {
        start + Angle::from_degrees((self.step_degrees as usize * sample) as i32)
    }
}

/// Arc step used by the lobed face, in degrees.
pub const DEFAULT_LOBE_STEP_DEGREES: u32 = 10;

/// Sampling used by the lobed face: 38 points per lobe.
pub const DEFAULT_LOBE_SAMPLING: LobeSampling<{ lobe_points(DEFAULT_LOBE_STEP_DEGREES) }> =
    LobeSampling::new(DEFAULT_LOBE_STEP_DEGREES);

/// Build the outline of one lobe: outer arc clockwise from `start`, then the
/// inner arc back.
pub fn lobe_path<const N: usize>(
    center: Point,
    inner_radius: i32,
    outer_radius: i32,
    start: Angle,
    sampling: LobeSampling<N>,
) -> LobePath<N> {
    let mut path = LobePath::new();
    // Capacity is guaranteed by `LobeSampling::new`.
    for sample in 0..sampling.samples_per_arc() {
        path.push(to_cartesian(center, outer_radius, sampling.arc_angle(start, sample))).ok();
    }
    for sample in (0..sampling.samples_per_arc()).rev() {
        path.push(to_cartesian(center, inner_radius, sampling.arc_angle(start, sample))).ok();
    }
    path
}

/// Paint twisted half-annulus lobes from the center outward.
pub fn draw_lobes<C, const N: usize>(
    canvas: &mut C,
    bounds: &Rectangle,
    center: Point,
    primary: Rgb888,
    secondary: Rgb888,
    sampling: LobeSampling<N>,
) where
    C: Canvas,
{
    canvas.fill_rect(*bounds, primary);

    let reach = corner_radius(bounds.size);
    let mut ring = 0i32;
    while ring.saturating_mul(LOBE_RING_WIDTH) < reach {
        let inner = ring * LOBE_RING_WIDTH;
        let outer = inner + LOBE_RING_WIDTH;
        let twist = Angle::from_degrees(ring.wrapping_mul(LOBE_TWIST_DEGREES) % 360);

        let first = lobe_path(center, inner, outer, twist, sampling);
        canvas.fill_polygon(&first, primary);
        let second = lobe_path(center, inner, outer, twist + Angle::from_degrees(180), sampling);
        canvas.fill_polygon(&second, secondary);

        ring += 1;
    }
}

/// Number of rings [`draw_lobes`] paints for a surface.
pub fn lobe_ring_count(size: Size) -> i32 {
    let reach = corner_radius(size);
    (reach + LOBE_RING_WIDTH - 1) / LOBE_RING_WIDTH
}
