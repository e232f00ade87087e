//! Drawing layers of the face.
//!
//! All widgets draw through [`Canvas`](crate::canvas::Canvas), so they run
//! unchanged on the simulator and on a panel driver.

mod background;
mod glyphs;
mod hands;
mod text;
mod ticks;

pub use background::{
    BAND_WIDTH,
    DEFAULT_LOBE_SAMPLING,
    DEFAULT_LOBE_STEP_DEGREES,
    LobePath,
    LobeSampling,
    corner_radius,
    draw_bands,
    draw_lobes,
    lobe_path,
    lobe_points,
    lobe_ring_count,
};
pub use glyphs::{Anchor, DIGIT_SEGMENTS, Wedge, digit_strokes, draw_digit, draw_number, needs_flip};
pub use hands::{
    HOUR_HAND,
    HandStyle,
    MINUTE_HAND,
    draw_hand,
    draw_hour_hand,
    draw_minute_hand,
    hour_hand_angle,
    minute_hand_angle,
};
pub use text::{CENTER_BIAS, VAlign, draw_text_cell, vertical_shift};
pub use ticks::{calendar_cells, digit_wedge, draw_calendar, draw_tick_ring, hour_angle, hour_label};
