//! The ring of hour labels, with the calendar in place of the 3.
//!
//! Every hour position gets a stroke-digit label just inside the rim, except
//! [`CALENDAR_SLOT`], which holds two text cells laid edge to edge along the
//! 3 o'clock ray: the day of the month against the rim and the weekday
//! abbreviation inside it.

use core::fmt::Write;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;
use heapless::String;

use super::glyphs::{Wedge, draw_number, needs_flip};
use super::text::{VAlign, draw_text_cell};
use crate::canvas::Canvas;
use crate::clock::WallClock;
use crate::colors::text_color_for_bg;
use crate::config::{
    CALENDAR_CELL_HEIGHT,
    CALENDAR_SLOT,
    DATE_CELL_INSET,
    DATE_CELL_WIDTH,
    DIGIT_HALF_WIDTH_DEGREES,
    DIGIT_HEIGHT,
    DIGIT_STROKE_WIDTH,
    MIN_CALENDAR_RADIUS,
    WEEKDAY_CELL_INSET,
    WEEKDAY_CELL_WIDTH,
};
use crate::geometry::{Angle, Dial, rect_centered_at};
use crate::theme::Theme;

/// Hour positions around the dial.
pub const HOUR_POSITIONS: u32 = 12;

/// Label shown at an hour position: 12 at the top, then 1 to 11.
pub const fn hour_label(index: u32) -> u32 {
    match index % HOUR_POSITIONS {
        0 => 12,
        hour => hour,
    }
}

/// Angle of an hour position.
pub const fn hour_angle(index: u32) -> Angle { Angle::from_fraction((index % HOUR_POSITIONS) as i64, HOUR_POSITIONS as i64) }

/// The wedge an hour label is drawn in, hugging the rim.
pub fn digit_wedge(
    dial: &Dial,
    index: u32,
) -> Wedge {
    let angle = hour_angle(index);
    let half_width = Angle::from_degrees(DIGIT_HALF_WIDTH_DEGREES);
    Wedge {
        center: dial.center,
        inner_radius: dial.radius - DIGIT_HEIGHT,
        outer_radius: dial.radius,
        left: angle - half_width,
        right: angle + half_width,
    }
}

/// Date and weekday cells, in that order.
pub fn calendar_cells(dial: &Dial) -> (Rectangle, Rectangle) {
    let angle = hour_angle(CALENDAR_SLOT);
    let date = rect_centered_at(
        dial.point_at(dial.radius - DATE_CELL_INSET, angle),
        Size::new(DATE_CELL_WIDTH, CALENDAR_CELL_HEIGHT),
    );
    let weekday = rect_centered_at(
        dial.point_at(dial.radius - WEEKDAY_CELL_INSET, angle),
        Size::new(WEEKDAY_CELL_WIDTH, CALENDAR_CELL_HEIGHT),
    );
    (date, weekday)
}

/// Paint both calendar cells with contrasting text.
pub fn draw_calendar<C>(
    canvas: &mut C,
    dial: &Dial,
    clock: &WallClock,
    theme: &Theme,
) where
    C: Canvas,
{
    if dial.radius < MIN_CALENDAR_RADIUS {
        log::trace!("dial radius {} too small for calendar cells", dial.radius);
        return;
    }
    let (date_cell, weekday_cell) = calendar_cells(dial);

    let mut day: String<4> = String::new();
    write!(day, "{}", clock.day_of_month).ok();
    let date_bg = theme.date_bg.rgb();
    canvas.fill_rect(date_cell, date_bg);
    draw_text_cell(canvas, &day, date_cell, Alignment::Center, true, VAlign::Center, text_color_for_bg(date_bg));

    let weekday_bg = theme.weekday_bg.rgb();
    canvas.fill_rect(weekday_cell, weekday_bg);
    draw_text_cell(
        canvas,
        clock.weekday.abbrev(),
        weekday_cell,
        Alignment::Center,
        false,
        VAlign::Center,
        text_color_for_bg(weekday_bg),
    );
}

/// Paint all twelve hour positions.
pub fn draw_tick_ring<C>(
    canvas: &mut C,
    dial: &Dial,
    clock: &WallClock,
    theme: &Theme,
) where
    C: Canvas,
{
    let stroke = theme.digit_stroke.rgb();
    for index in 0..HOUR_POSITIONS {
        if index == CALENDAR_SLOT {
            draw_calendar(canvas, dial, clock, theme);
            continue;
        }
        let label = hour_label(index);
        draw_number(canvas, label, &digit_wedge(dial, index), needs_flip(label), DIGIT_STROKE_WIDTH, stroke);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::canvas::recording::{DrawOp, RecordingCanvas};
    use crate::clock::Weekday;
    use crate::colors::{BLACK, OXFORD_BLUE, PASTEL_YELLOW, WHITE};
    use crate::theme::ThemeColor;

    fn dial(radius: i32) -> Dial {
        Dial {
            center: Point::new(100, 100),
            radius,
        }
    }

    fn tuesday_19th() -> WallClock { WallClock::new(10, 9, 19, Weekday::from_days_from_sunday(2)) }

    #[test]
    fn test_hour_labels() {
        assert_eq!(hour_label(0), 12);
        assert_eq!(hour_label(3), 3);
        assert_eq!(hour_label(11), 11);
        assert_eq!(hour_label(12), 12);
    }

    #[test]
    fn test_lower_half_labels_are_flipped() {
        let flipped: std::vec::Vec<u32> = (0..12).map(hour_label).filter(|&label| needs_flip(label)).collect();
        assert_eq!(flipped, [4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_calendar_cells_abut_on_the_three_o_clock_ray() {
        let (date, weekday) = calendar_cells(&dial(90));
        assert_eq!(date, Rectangle::new(Point::new(170, 88), Size::new(20, 24)));
        assert_eq!(weekday, Rectangle::new(Point::new(142, 88), Size::new(28, 24)));
    }

    #[test]
    fn test_ring_draws_digits_and_calendar() {
        let mut canvas = RecordingCanvas::new();
        draw_tick_ring(&mut canvas, &dial(90), &tuesday_19th(), &Theme::DEFAULT);

        // 12, 1, 2, 4 .. 11 in stroke counts
        assert_eq!(canvas.lines().count(), 44);
        assert!(canvas.lines().all(|(_, _, width, color)| width == DIGIT_STROKE_WIDTH && color == PASTEL_YELLOW));

        let texts: std::vec::Vec<_> = canvas.texts().map(|(text, _, color)| (text.to_owned(), color)).collect();
        assert_eq!(texts, [("19".to_owned(), BLACK), ("Tue".to_owned(), BLACK)]);
    }

    #[test]
    fn test_cell_background_precedes_its_text() {
        let mut canvas = RecordingCanvas::new();
        draw_calendar(&mut canvas, &dial(90), &tuesday_19th(), &Theme::DEFAULT);
        let (date, weekday) = calendar_cells(&dial(90));

        assert_eq!(canvas.ops[0], DrawOp::Rect { rect: date, color: PASTEL_YELLOW });
        assert!(matches!(canvas.ops[1], DrawOp::Text { .. }));
        assert_eq!(canvas.ops[2], DrawOp::Rect { rect: weekday, color: WHITE });
        assert!(matches!(canvas.ops[3], DrawOp::Text { .. }));
    }

    #[test]
    fn test_dark_cell_gets_light_text() {
        let theme = Theme {
            date_bg: ThemeColor::from(OXFORD_BLUE),
            ..Theme::DEFAULT
        };
        let mut canvas = RecordingCanvas::new();
        draw_calendar(&mut canvas, &dial(90), &tuesday_19th(), &theme);
        let colors: std::vec::Vec<_> = canvas.texts().map(|(_, _, color)| color).collect();
        assert_eq!(colors, [WHITE, BLACK]);
    }

    #[test]
    fn test_small_dial_skips_calendar() {
        let mut canvas = RecordingCanvas::new();
        draw_tick_ring(&mut canvas, &dial(40), &tuesday_19th(), &Theme::DEFAULT);
        assert_eq!(canvas.texts().count(), 0);
        assert!(canvas.ops.iter().all(|op| matches!(op, DrawOp::Line { .. })));
    }

    #[test]
    fn test_tiny_dial_draws_nothing() {
        let mut canvas = RecordingCanvas::new();
        draw_tick_ring(&mut canvas, &dial(DIGIT_HEIGHT), &tuesday_19th(), &Theme::DEFAULT);
        assert!(canvas.ops.is_empty());
    }

    proptest! {
        #[test]
        fn calendar_cells_never_overlap_or_gap(w in 96u32..2000, h in 96u32..2000) {
            let bounds = Rectangle::new(Point::zero(), Size::new(w, h));
            let (date, weekday) = calendar_cells(&Dial::from_bounds(&bounds, 1));

            prop_assert_eq!(weekday.top_left.x + weekday.size.width as i32, date.top_left.x);
            prop_assert_eq!(weekday.top_left.y, date.top_left.y);
        }
    }
}
