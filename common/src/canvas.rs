//! The display surface the face draws onto.
//!
//! Every widget talks to a [`Canvas`] rather than to a concrete display, so the
//! face can run against the desktop simulator, a panel driver, or a recording
//! surface in tests. The vocabulary is deliberately closed: filled circle,
//! filled rectangle, stroked line, filled polygon and one aligned text block.
//!
//! [`DisplayCanvas`] implements the trait for any `embedded-graphics`
//! [`DrawTarget`] whose color converts from [`Rgb888`]. Clipping is left to the
//! target; draw errors are dropped because a half-painted frame is simply
//! repainted on the next tick.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::Vec;

/// Maximum polygon edges crossing one scanline.
///
/// Lobe paths cross a row at most four times; the headroom covers any simple
/// closed path the face builds.
pub const MAX_SCANLINE_CROSSINGS: usize = 16;

/// Drawing operations the face needs from a display.
pub trait Canvas {
    /// Fill a disc `2 * radius + 1` pixels across.
    fn fill_circle(
        &mut self,
        center: Point,
        radius: u32,
        color: Rgb888,
    );

    /// Fill an axis-aligned rectangle.
    fn fill_rect(
        &mut self,
        rect: Rectangle,
        color: Rgb888,
    );

    /// Stroke a straight line `width` pixels wide.
    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        width: u32,
        color: Rgb888,
    );

    /// Fill a closed polygon using the even-odd rule.
    fn fill_polygon(
        &mut self,
        points: &[Point],
        color: Rgb888,
    );

    /// Draw one line of text with its glyph cell top at `bbox.top_left.y`,
    /// aligned horizontally inside `bbox`.
    fn draw_text(
        &mut self,
        text: &str,
        bbox: Rectangle,
        font: &'static MonoFont<'static>,
        alignment: Alignment,
        color: Rgb888,
    );
}

// =============================================================================
// embedded-graphics Adapter
// =============================================================================

/// [`Canvas`] over an `embedded-graphics` draw target.
pub struct DisplayCanvas<'a, D> {
    display: &'a mut D,
}

impl<'a, D> DisplayCanvas<'a, D>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    /// Wrap a draw target for one frame.
    pub const fn new(display: &'a mut D) -> Self { Self { display } }
}

impl<D> Canvas for DisplayCanvas<'_, D>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    fn fill_circle(
        &mut self,
        center: Point,
        radius: u32,
        color: Rgb888,
    ) {
        Circle::with_center(center, radius.saturating_mul(2).saturating_add(1))
            .into_styled(PrimitiveStyle::with_fill(color.into()))
            .draw(self.display)
            .ok();
    }

    fn fill_rect(
        &mut self,
        rect: Rectangle,
        color: Rgb888,
    ) {
        self.display.fill_solid(&rect, color.into()).ok();
    }

    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        width: u32,
        color: Rgb888,
    ) {
        Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(color.into(), width))
            .draw(self.display)
            .ok();
    }

    fn fill_polygon(
        &mut self,
        points: &[Point],
        color: Rgb888,
    ) {
        let color: D::Color = color.into();
        for_each_span(points, |y, x_start, x_end| {
            let span = Rectangle::new(Point::new(x_start, y), Size::new((x_end - x_start) as u32, 1));
            self.display.fill_solid(&span, color).ok();
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        bbox: Rectangle,
        font: &'static MonoFont<'static>,
        alignment: Alignment,
        color: Rgb888,
    ) {
        let width = bbox.size.width as i32;
        let x = match alignment {
            Alignment::Left => bbox.top_left.x,
            Alignment::Center => bbox.top_left.x + width / 2,
            Alignment::Right => bbox.top_left.x + width - 1,
        };
        let style = TextStyleBuilder::new().alignment(alignment).baseline(Baseline::Top).build();
        Text::with_text_style(text, Point::new(x, bbox.top_left.y), MonoTextStyle::new(font, color.into()), style)
            .draw(self.display)
            .ok();
    }
}

// =============================================================================
// Polygon Scan Conversion
// =============================================================================

/// Walk the even-odd interior of a closed polygon row by row.
///
/// Each row `y` is sampled at its pixel centers; `visit(y, x_start, x_end)`
/// receives half-open spans `[x_start, x_end)`. Shared vertices are counted
/// once (edges are half-open in y), so adjacent polygons neither overlap nor
/// leave a seam.
pub fn for_each_span<F>(
    points: &[Point],
    mut visit: F,
) where
    F: FnMut(i32, i32, i32),
{
    if points.len() < 3 {
        return;
    }

    let (mut top, mut bottom) = (i32::MAX, i32::MIN);
    for p in points {
        top = top.min(p.y);
        bottom = bottom.max(p.y);
    }

    for y in top..bottom {
        let mut crossings: Vec<i32, MAX_SCANLINE_CROSSINGS> = Vec::new();
        // Sample at the row center: y + 0.5, scaled by 2 to stay integral.
        let sample = 2 * i64::from(y) + 1;

        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            let (ay, by) = (2 * i64::from(a.y), 2 * i64::from(b.y));
            if (ay <= sample) == (by <= sample) {
                continue;
            }
            let (ax, bx) = (i64::from(a.x), i64::from(b.x));
            // x at the crossing, rounded to the nearest pixel boundary
            let (mut num, mut den) = (ax * (by - ay) + (bx - ax) * (sample - ay), by - ay);
            if den < 0 {
                num = -num;
                den = -den;
            }
            let x = crate::geometry::div_round(num, den);
            if crossings.push(x as i32).is_err() {
                break;
            }
        }

        crossings.sort_unstable();
        for pair in crossings.chunks_exact(2) {
            if pair[1] > pair[0] {
                visit(y, pair[0], pair[1]);
            }
        }
    }
}

// =============================================================================
// Recording Canvas (tests)
// =============================================================================


// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    use super::*;

    fn spans(points: &[Point]) -> std::vec::Vec<(i32, i32, i32)> {
        let mut out = std::vec::Vec::new();
        for_each_span(points, |y, a, b| out.push((y, a, b)));
        out
    }

    #[test]
    fn test_square_spans() {
        let square = [Point::new(2, 2), Point::new(6, 2), Point::new(6, 5), Point::new(2, 5)];
        assert_eq!(spans(&square), [(2, 2, 6), (3, 2, 6), (4, 2, 6)]);
    }

    #[test]
    fn test_degenerate_polygon_draws_nothing() {
        assert!(spans(&[Point::new(0, 0), Point::new(5, 5)]).is_empty());
        assert!(spans(&[Point::new(0, 3), Point::new(5, 3), Point::new(9, 3)]).is_empty());
    }

    #[test]
    fn test_concave_polygon_has_two_spans_per_row() {
        // U shape: two prongs joined at the bottom
        let u = [
            Point::new(0, 0),
            Point::new(2, 0),
            Point::new(2, 4),
            Point::new(6, 4),
            Point::new(6, 0),
            Point::new(8, 0),
            Point::new(8, 6),
            Point::new(0, 6),
        ];
        let rows = spans(&u);
        assert_eq!(rows.iter().filter(|s| s.0 == 1).count(), 2);
        assert_eq!(rows.iter().filter(|s| s.0 == 5).count(), 1);
    }

    #[test]
    fn test_display_canvas_fills_polygon_pixels() {
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        display.set_allow_overdraw(true);
        let mut canvas = DisplayCanvas::new(&mut display);
        canvas.fill_polygon(
            &[Point::new(1, 1), Point::new(4, 1), Point::new(4, 3), Point::new(1, 3)],
            Rgb888::RED,
        );

        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(Rgb888::RED));
        assert_eq!(display.get_pixel(Point::new(3, 2)), Some(Rgb888::RED));
        assert_eq!(display.get_pixel(Point::new(4, 2)), None);
        assert_eq!(display.get_pixel(Point::new(1, 3)), None);
    }

    #[test]
    fn test_display_canvas_circle_diameter() {
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        let mut canvas = DisplayCanvas::new(&mut display);
        canvas.fill_circle(Point::new(10, 10), 3, Rgb888::WHITE);

        assert_eq!(display.get_pixel(Point::new(10, 7)), Some(Rgb888::WHITE));
        assert_eq!(display.get_pixel(Point::new(13, 10)), Some(Rgb888::WHITE));
        assert_eq!(display.get_pixel(Point::new(10, 5)), None);
    }

    #[test]
    fn test_display_canvas_text_starts_at_box_top() {
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        let mut canvas = DisplayCanvas::new(&mut display);
        canvas.draw_text(
            "8",
            Rectangle::new(Point::new(0, 20), Size::new(6, 10)),
            &FONT_6X10,
            Alignment::Left,
            Rgb888::WHITE,
        );

        let bbox = display.affected_area();
        assert!(bbox.top_left.y >= 20);
        assert!(bbox.top_left.y < 30);
    }
}
