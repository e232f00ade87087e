//! Inbound configuration messages.
//!
//! The companion UI sends a JSON object mapping slot names to `0xRRGGBB`
//! integers; any subset of the seven slots may be present. The stdin reader
//! parses one object per line, and the C key cycles [`PRESETS`].

use std::collections::BTreeMap;

use sea_lines_common::{ConfigMessage, ThemeKey};
use thiserror::Error;

/// Why a configuration line was rejected.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("configuration message is not a JSON object of integers: {0}")]
    Json(#[from] serde_json::Error),

    #[error("value {value} for {key} does not fit in 32 bits")]
    OutOfRange { key: ThemeKey, value: i64 },
}

/// Parse one configuration message. Unknown keys are skipped with a warning.
pub fn parse_message(line: &str) -> Result<ConfigMessage, MessageError> {
    let fields: BTreeMap<String, i64> = serde_json::from_str(line)?;
    let mut message = ConfigMessage::new();
    for (name, value) in fields {
        let Some(key) = ThemeKey::from_name(&name) else {
            log::warn!("ignoring unknown configuration key {name:?}");
            continue;
        };
        let hex = i32::try_from(value)
            .or_else(|_| u32::try_from(value).map(|v| v as i32))
            .map_err(|_| MessageError::OutOfRange { key, value })?;
        message.set(key, hex);
    }
    Ok(message)
}

/// Built-in themes for the C key.
pub const PRESETS: [ConfigMessage; 3] = [
    // Sea at dusk
    ConfigMessage::new()
        .with(ThemeKey::Background1, 0x55_0055)
        .with(ThemeKey::Background2, 0xAA_55AA)
        .with(ThemeKey::DateBg, 0xFF_AA00)
        .with(ThemeKey::WeekdayBg, 0x00_0000)
        .with(ThemeKey::DigitStroke, 0xFF_FFFF)
        .with(ThemeKey::HourHand, 0xFF_FF55)
        .with(ThemeKey::MinuteHand, 0x55_FFFF),
    // Kelp
    ConfigMessage::new()
        .with(ThemeKey::Background1, 0x00_5500)
        .with(ThemeKey::Background2, 0x55_AA55)
        .with(ThemeKey::DateBg, 0xAA_FFAA)
        .with(ThemeKey::WeekdayBg, 0x00_2200)
        .with(ThemeKey::DigitStroke, 0xFF_FFAA)
        .with(ThemeKey::HourHand, 0xFF_5555)
        .with(ThemeKey::MinuteHand, 0xFF_FFFF),
    // Default colors
    ConfigMessage::new()
        .with(ThemeKey::Background1, 0x00_0055)
        .with(ThemeKey::Background2, 0x55_55AA)
        .with(ThemeKey::DateBg, 0xFF_FFAA)
        .with(ThemeKey::WeekdayBg, 0xFF_FFFF)
        .with(ThemeKey::DigitStroke, 0xFF_FFAA)
        .with(ThemeKey::HourHand, 0xAA_FFFF)
        .with(ThemeKey::MinuteHand, 0xFF_AA55),
];
