//! Frame composer and the state it owns.
//!
//! # Render Order
//!
//! | Layer | Source |
//! |-------|--------|
//! | Background | [`draw_bands`] or [`draw_lobes`], per [`FaceVariant`] |
//! | Hour labels and calendar | [`draw_tick_ring`] |
//! | Hour hand | [`draw_hour_hand`] |
//! | Minute hand | [`draw_minute_hand`] |
//!
//! Each layer occludes the ones above it in the table, so the order is fixed.
//! A frame is a pure function of bounds, time and theme; the only state kept
//! between frames is the [`Theme`] and a pending-repaint flag.

use embedded_graphics::primitives::Rectangle;

use crate::canvas::Canvas;
use crate::clock::WallClock;
use crate::config::{BANDS_DIAL_MARGIN, LOBES_DIAL_MARGIN};
use crate::geometry::Dial;
use crate::theme::{ConfigMessage, Theme, ThemeStore};
use crate::widgets::{DEFAULT_LOBE_SAMPLING, draw_bands, draw_hour_hand, draw_lobes, draw_minute_hand, draw_tick_ring};

/// Background style of the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FaceVariant {
    /// Concentric rings with a striped right half.
    #[default]
    Bands,
    /// Twisted half-annulus lobes.
    Lobes,
}

impl FaceVariant {
    pub const ALL: [Self; 2] = [Self::Bands, Self::Lobes];

    /// Gap between the display edge and the dial rim.
    pub const fn dial_margin(self) -> i32 {
        match self {
            Self::Bands => BANDS_DIAL_MARGIN,
            Self::Lobes => LOBES_DIAL_MARGIN,
        }
    }

    /// The next variant, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Bands => Self::Lobes,
            Self::Lobes => Self::Bands,
        }
    }
}

/// Something the face must react to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FaceEvent {
    /// The displayed minute (or second, when fast-forwarding) changed.
    Tick,
    /// New colors from the companion UI.
    Configure(ConfigMessage),
}

/// The watch face: current theme, background variant and repaint flag.
#[derive(Clone, Debug)]
pub struct Face {
    theme: Theme,
    variant: FaceVariant,
    repaint: bool,
}

impl Face {
    /// A face that paints on its first frame.
    pub const fn new(
        theme: Theme,
        variant: FaceVariant,
    ) -> Self {
        Self {
            theme,
            variant,
            repaint: true,
        }
    }

    /// A face using the stored theme, falling back to defaults.
    pub fn load<S>(
        store: &S,
        variant: FaceVariant,
    ) -> Self
    where
        S: ThemeStore,
    {
        Self::new(Theme::load(store), variant)
    }

    pub const fn theme(&self) -> &Theme { &self.theme }

    pub const fn variant(&self) -> FaceVariant { self.variant }

    /// Switch background style.
    pub fn set_variant(
        &mut self,
        variant: FaceVariant,
    ) {
        if variant != self.variant {
            self.variant = variant;
            self.repaint = true;
        }
    }

    /// React to an event.
    ///
    /// A configuration message is applied and the whole theme persisted. The
    /// face repaints with the new colors even when persisting fails; the
    /// store's error is returned for the host to report.
    pub fn handle<S>(
        &mut self,
        event: FaceEvent,
        store: &mut S,
    ) -> Result<(), S::Error>
    where
        S: ThemeStore,
    {
        match event {
            FaceEvent::Tick => {
                self.repaint = true;
                Ok(())
            }
            FaceEvent::Configure(message) => {
                let applied = self.theme.apply(&message);
                log::debug!("configuration message applied {applied} theme keys");
                self.repaint = true;
                self.theme.save(store)
            }
        }
    }

    /// Whether a repaint is pending; clears the flag.
    pub fn take_repaint(&mut self) -> bool { core::mem::replace(&mut self.repaint, false) }

    /// The dial for `bounds` under the current variant.
    pub fn dial(
        &self,
        bounds: &Rectangle,
    ) -> Dial {
        Dial::from_bounds(bounds, self.variant.dial_margin())
    }

    /// Paint one full frame.
    pub fn render<C>(
        &self,
        canvas: &mut C,
        bounds: &Rectangle,
        clock: &WallClock,
    ) where
        C: Canvas,
    {
        let dial = self.dial(bounds);
        let theme = &self.theme;
        let (primary, secondary) = (theme.background1.rgb(), theme.background2.rgb());

        match self.variant {
            FaceVariant::Bands => draw_bands(canvas, bounds, dial.center, primary, secondary),
            FaceVariant::Lobes => draw_lobes(canvas, bounds, dial.center, primary, secondary, DEFAULT_LOBE_SAMPLING),
        }
        draw_tick_ring(canvas, &dial, clock, theme);
        draw_hour_hand(canvas, &dial, clock, theme.hour_hand.rgb());
        draw_minute_hand(canvas, &dial, clock, theme.minute_hand.rgb());
    }
}

impl Default for Face {
    fn default() -> Self { Self::new(Theme::DEFAULT, FaceVariant::default()) }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::Rgb888;
    use embedded_graphics::prelude::*;

    use super::*;
    use crate::canvas::DisplayCanvas;
    use crate::canvas::recording::{DrawOp, RecordingCanvas};
    use crate::clock::Weekday;
    use crate::colors::{CELESTE, PASTEL_YELLOW, RAJAH};
    use crate::theme::tests::MemoryStore;
    use crate::theme::{ThemeColor, ThemeKey};

    fn bounds() -> Rectangle { Rectangle::new(Point::zero(), Size::new(144, 168)) }

    fn ten_past_ten() -> WallClock { WallClock::new(10, 10, 19, Weekday::from_days_from_sunday(2)) }

    #[test]
    fn test_layers_draw_in_order() {
        let face = Face::default();
        let mut canvas = RecordingCanvas::new();
        face.render(&mut canvas, &bounds(), &ten_past_ten());

        let first_digit = canvas
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::Line { color, .. } if *color == PASTEL_YELLOW))
            .unwrap();
        let background_only = canvas.ops[..first_digit]
            .iter()
            .all(|op| matches!(op, DrawOp::Circle { .. } | DrawOp::Rect { .. }));
        assert!(background_only, "background must finish before the tick ring");

        let n = canvas.ops.len();
        assert!(
            matches!(canvas.ops[n - 4], DrawOp::Line { color, .. } if color == CELESTE),
            "hour hand follows the tick ring"
        );
        assert!(matches!(canvas.ops[n - 3], DrawOp::Circle { color, .. } if color == CELESTE));
        assert!(
            matches!(canvas.ops[n - 2], DrawOp::Line { color, .. } if color == RAJAH),
            "minute hand is drawn last"
        );
        assert!(matches!(canvas.ops[n - 1], DrawOp::Circle { color, .. } if color == RAJAH));
    }

    #[test]
    fn test_render_is_pure() {
        let face = Face::new(Theme::DEFAULT, FaceVariant::Lobes);
        let mut a = RecordingCanvas::new();
        let mut b = RecordingCanvas::new();
        face.render(&mut a, &bounds(), &ten_past_ten());
        face.render(&mut b, &bounds(), &ten_past_ten());
        assert_eq!(a.ops, b.ops);
    }

    #[test]
    fn test_variant_margins() {
        let mut face = Face::default();
        assert_eq!(face.dial(&bounds()).radius, 71);
        face.set_variant(FaceVariant::Lobes);
        assert_eq!(face.dial(&bounds()).radius, 69);
        assert_eq!(FaceVariant::Lobes.next(), FaceVariant::Bands);
    }

    #[test]
    fn test_tick_requests_one_repaint() {
        let mut face = Face::default();
        let mut store = MemoryStore::default();
        assert!(face.take_repaint(), "first frame always paints");
        assert!(!face.take_repaint());

        face.handle(FaceEvent::Tick, &mut store).unwrap();
        assert!(face.take_repaint());
        assert!(!face.take_repaint());
    }

    #[test]
    fn test_configure_applies_persists_and_repaints() {
        let mut face = Face::default();
        face.take_repaint();
        let mut store = MemoryStore::default();

        let message = ConfigMessage::new().with(ThemeKey::MinuteHand, 0x00_FF00);
        face.handle(FaceEvent::Configure(message), &mut store).unwrap();

        assert!(face.take_repaint());
        assert_eq!(face.theme().minute_hand, ThemeColor::from_hex(0x00_FF00));
        assert_eq!(store.flushed.len(), 7, "the whole theme is persisted");
        assert_eq!(Face::load(&store.restarted(), FaceVariant::Bands).theme(), face.theme());
    }

    #[test]
    fn test_configure_repaints_even_when_store_fails() {
        let mut face = Face::default();
        face.take_repaint();
        let mut store = MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        };

        let message = ConfigMessage::new().with(ThemeKey::HourHand, 0xFF_0000);
        assert!(face.handle(FaceEvent::Configure(message), &mut store).is_err());
        assert!(face.take_repaint());
        assert_eq!(face.theme().hour_hand, ThemeColor::from_hex(0xFF_0000));
    }

    #[test]
    fn test_full_frame_on_mock_display() {
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        let area = Rectangle::new(Point::zero(), Size::new(64, 64));

        let face = Face::default();
        face.render(&mut DisplayCanvas::new(&mut display), &area, &ten_past_ten());

        // Hub of the minute hand covers the center.
        assert_eq!(display.get_pixel(Point::new(32, 32)), Some(RAJAH));
        // Corners are painted by the background.
        assert!(display.get_pixel(Point::new(0, 0)).is_some());
        assert!(display.get_pixel(Point::new(63, 63)).is_some());
    }
}
