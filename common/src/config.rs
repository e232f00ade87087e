//! Layout constants for the face.
//!
//! Every size below is measured from the dial rim or center rather than from
//! the display edge, so one set of constants serves square, tall and round
//! panels alike. The values are hand-tuned for legibility on small panels;
//! the relationships between them are checked at compile time.

// =============================================================================
// Dial
// =============================================================================

/// Dial margin for the concentric-band face.
pub const BANDS_DIAL_MARGIN: i32 = 1;

/// Dial margin for the lobed face. Lobe edges are busier, so digits sit a
/// little further in.
pub const LOBES_DIAL_MARGIN: i32 = 3;

// =============================================================================
// Hour Digits
// =============================================================================

/// Radial height of an hour digit (outer radius minus inner radius).
pub const DIGIT_HEIGHT: i32 = 18;

/// Angular half width of an hour digit's wedge, in degrees.
pub const DIGIT_HALF_WIDTH_DEGREES: i32 = 8;

/// Stroke width of digit segments.
pub const DIGIT_STROKE_WIDTH: u32 = 3;

/// Hour position holding the calendar cells instead of a digit.
pub const CALENDAR_SLOT: u32 = 3;

// =============================================================================
// Calendar Cells
// =============================================================================

/// Day-of-month cell width.
pub const DATE_CELL_WIDTH: u32 = 20;

/// Weekday cell width.
pub const WEEKDAY_CELL_WIDTH: u32 = 28;

/// Height of both calendar cells. Lands in the 9x18 font tier.
pub const CALENDAR_CELL_HEIGHT: u32 = 24;

/// Distance from the rim to the date cell's center.
pub const DATE_CELL_INSET: i32 = (DATE_CELL_WIDTH / 2) as i32;

/// Distance from the rim to the weekday cell's center; the two cells abut.
pub const WEEKDAY_CELL_INSET: i32 = DATE_CELL_WIDTH as i32 + (WEEKDAY_CELL_WIDTH / 2) as i32;

/// Smallest dial radius that still holds both calendar cells.
pub const MIN_CALENDAR_RADIUS: i32 = (DATE_CELL_WIDTH + WEEKDAY_CELL_WIDTH) as i32;

// Zero overlap and zero gap under floor centering needs even widths.
const _: () = assert!(DATE_CELL_WIDTH % 2 == 0 && WEEKDAY_CELL_WIDTH % 2 == 0);
const _: () = assert!(WEEKDAY_CELL_INSET - DATE_CELL_INSET == ((DATE_CELL_WIDTH + WEEKDAY_CELL_WIDTH) / 2) as i32);

// =============================================================================
// Hands
// =============================================================================

/// Stroke width of both hands.
pub const HAND_WIDTH: u32 = 5;

/// Hour hand overshoot behind the center (negative radius).
pub const HOUR_HAND_TAIL: i32 = -10;

/// Gap between the hour hand tip and the rim.
pub const HOUR_HAND_INSET: i32 = 28;

/// Hour hand hub radius.
pub const HOUR_HUB_RADIUS: u32 = 6;

/// Minute hand overshoot behind the center.
pub const MINUTE_HAND_TAIL: i32 = -8;

/// Gap between the minute hand tip and the rim.
pub const MINUTE_HAND_INSET: i32 = 10;

/// Minute hand hub radius.
pub const MINUTE_HUB_RADIUS: u32 = 4;

const _: () = assert!(HOUR_HUB_RADIUS > MINUTE_HUB_RADIUS);
const _: () = assert!(HOUR_HAND_INSET > MINUTE_HAND_INSET);
