//! Hour and minute hands.
//!
//! A hand is one straight stroke from a short tail behind the center out to a
//! fixed inset from the rim, plus a filled hub. Hands move in whole-minute
//! steps only.

use embedded_graphics::pixelcolor::Rgb888;

use crate::canvas::Canvas;
use crate::clock::WallClock;
use crate::config::{
    HAND_WIDTH,
    HOUR_HAND_INSET,
    HOUR_HAND_TAIL,
    HOUR_HUB_RADIUS,
    MINUTE_HAND_INSET,
    MINUTE_HAND_TAIL,
    MINUTE_HUB_RADIUS,
};
use crate::geometry::{Angle, Dial};

/// Shape of one hand.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HandStyle {
    /// Radius of the tail end; negative to overshoot the center.
    pub tail: i32,
    /// Gap between the tip and the dial rim.
    pub inset: i32,
    /// Stroke width.
    pub width: u32,
    /// Radius of the hub disc.
    pub hub_radius: u32,
}

pub const HOUR_HAND: HandStyle = HandStyle {
    tail: HOUR_HAND_TAIL,
    inset: HOUR_HAND_INSET,
    width: HAND_WIDTH,
    hub_radius: HOUR_HUB_RADIUS,
};

pub const MINUTE_HAND: HandStyle = HandStyle {
    tail: MINUTE_HAND_TAIL,
    inset: MINUTE_HAND_INSET,
    width: HAND_WIDTH,
    hub_radius: MINUTE_HUB_RADIUS,
};

/// Hour hand angle: a twelfth of a turn per hour, advancing every minute.
pub const fn hour_hand_angle(clock: &WallClock) -> Angle {
    let minutes = (clock.hour % 12) * 60 + clock.minute % 60;
    Angle::from_fraction(minutes as i64, 12 * 60)
}

/// Minute hand angle: a sixtieth of a turn per minute.
pub const fn minute_hand_angle(clock: &WallClock) -> Angle { Angle::from_fraction((clock.minute % 60) as i64, 60) }

/// Draw a hand at `angle` and its hub.
pub fn draw_hand<C>(
    canvas: &mut C,
    dial: &Dial,
    angle: Angle,
    style: &HandStyle,
    color: Rgb888,
) where
    C: Canvas,
{
    let tip = dial.radius - style.inset;
    if tip > 0 {
        canvas.draw_line(dial.point_at(style.tail, angle), dial.point_at(tip, angle), style.width, color);
    } else {
        log::trace!("dial radius {} leaves no room for a hand", dial.radius);
    }
    canvas.fill_circle(dial.center, style.hub_radius, color);
}

/// Draw the hour hand for `clock`.
pub fn draw_hour_hand<C>(
    canvas: &mut C,
    dial: &Dial,
    clock: &WallClock,
    color: Rgb888,
) where
    C: Canvas,
{
    draw_hand(canvas, dial, hour_hand_angle(clock), &HOUR_HAND, color);
}

/// Draw the minute hand for `clock`.
pub fn draw_minute_hand<C>(
    canvas: &mut C,
    dial: &Dial,
    clock: &WallClock,
    color: Rgb888,
) where
    C: Canvas,
{
    draw_hand(canvas, dial, minute_hand_angle(clock), &MINUTE_HAND, color);
}
