//! The seven user-configurable colors and how they are loaded, changed and
//! persisted.
//!
//! # Lifecycle
//!
//! 1. [`Theme::DEFAULT`] at startup
//! 2. [`Theme::load`] overrides any slot the [`ThemeStore`] holds
//! 3. A [`ConfigMessage`] from the companion UI applies a subset of slots,
//!    after which the whole theme is written back with [`Theme::save`]
//!
//! Colors travel as `0xRRGGBB` integers on the wire and are stored as opaque
//! 32-bit ARGB.

use core::fmt;

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Colors
// =============================================================================

/// A 32-bit ARGB color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ThemeColor(u32);

impl ThemeColor {
    const OPAQUE: u32 = 0xFF00_0000;

    /// Wrap a raw ARGB value as stored.
    pub const fn from_argb(argb: u32) -> Self { Self(argb) }

    /// An opaque color from a `0xRRGGBB` wire integer. Bits above the low 24
    /// are ignored.
    pub const fn from_hex(hex: i32) -> Self { Self(Self::OPAQUE | (hex as u32 & 0x00FF_FFFF)) }

    /// Raw ARGB value.
    pub const fn argb(self) -> u32 { self.0 }

    /// Alpha channel.
    pub const fn alpha(self) -> u8 { (self.0 >> 24) as u8 }

    /// The color channels as a drawable color; alpha is not blended.
    pub const fn rgb(self) -> Rgb888 { Rgb888::new((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8) }
}

impl From<Rgb888> for ThemeColor {
    fn from(color: Rgb888) -> Self {
        Self(Self::OPAQUE | (u32::from(color.r()) << 16) | (u32::from(color.g()) << 8) | u32::from(color.b()))
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

// =============================================================================
// Keys
// =============================================================================

/// A theme slot, also the key used on the wire and in the store.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ThemeKey {
    Background1,
    Background2,
    DateBg,
    WeekdayBg,
    DigitStroke,
    HourHand,
    MinuteHand,
}

impl ThemeKey {
    /// Every slot, in storage order.
    pub const ALL: [Self; 7] = [
        Self::Background1,
        Self::Background2,
        Self::DateBg,
        Self::WeekdayBg,
        Self::DigitStroke,
        Self::HourHand,
        Self::MinuteHand,
    ];

    /// Wire and storage name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background1 => "background1",
            Self::Background2 => "background2",
            Self::DateBg => "date_bg",
            Self::WeekdayBg => "weekday_bg",
            Self::DigitStroke => "digit_stroke",
            Self::HourHand => "hour_hand",
            Self::MinuteHand => "minute_hand",
        }
    }

    /// Look a key up by its wire name.
    pub fn from_name(name: &str) -> Option<Self> { Self::ALL.into_iter().find(|key| key.name() == name) }

    const fn index(self) -> usize { self as usize }
}

impl fmt::Display for ThemeKey {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Configuration Message
// =============================================================================

/// An inbound configuration change: any subset of the seven keys, each a
/// `0xRRGGBB` integer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ConfigMessage {
    values: [Option<i32>; 7],
}

impl ConfigMessage {
    /// A message carrying no keys.
    pub const fn new() -> Self { Self { values: [None; 7] } }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub const fn with(
        mut self,
        key: ThemeKey,
        hex: i32,
    ) -> Self {
        self.values[key.index()] = Some(hex);
        self
    }

    /// Set one key, replacing any earlier value.
    pub fn set(
        &mut self,
        key: ThemeKey,
        hex: i32,
    ) {
        self.values[key.index()] = Some(hex);
    }

    /// Value for `key`, if present.
    pub const fn get(
        &self,
        key: ThemeKey,
    ) -> Option<i32> {
        self.values[key.index()]
    }

    /// Present keys with their values.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeKey, i32)> + '_ {
        ThemeKey::ALL.into_iter().filter_map(|key| self.get(key).map(|hex| (key, hex)))
    }

    /// Whether no key is present.
    pub fn is_empty(&self) -> bool { self.values.iter().all(Option::is_none) }
}

// =============================================================================
// Store
// =============================================================================

/// Durable key-value storage for theme slots.
///
/// Values are raw ARGB. Implementations decide when writes become durable;
/// [`flush`](Self::flush) is called once after a full save.
pub trait ThemeStore {
    type Error;

    /// Stored value for `key`, if any.
    fn read(
        &self,
        key: ThemeKey,
    ) -> Option<u32>;

    /// Store `argb` under `key`.
    fn write(
        &mut self,
        key: ThemeKey,
        argb: u32,
    ) -> Result<(), Self::Error>;

    /// Make earlier writes durable.
    fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
}

// =============================================================================
// Theme
// =============================================================================

/// Colors for every element of the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Theme {
    pub background1: ThemeColor,
    pub background2: ThemeColor,
    pub date_bg: ThemeColor,
    pub weekday_bg: ThemeColor,
    pub digit_stroke: ThemeColor,
    pub hour_hand: ThemeColor,
    pub minute_hand: ThemeColor,
}

impl Theme {
    /// Built-in colors, matching the swatches in [`colors`](crate::colors).
    pub const DEFAULT: Self = Self {
        background1: ThemeColor::from_hex(0x00_0055),
        background2: ThemeColor::from_hex(0x55_55AA),
        date_bg: ThemeColor::from_hex(0xFF_FFAA),
        weekday_bg: ThemeColor::from_hex(0xFF_FFFF),
        digit_stroke: ThemeColor::from_hex(0xFF_FFAA),
        hour_hand: ThemeColor::from_hex(0xAA_FFFF),
        minute_hand: ThemeColor::from_hex(0xFF_AA55),
    };

    /// Color in one slot.
    pub const fn get(
        &self,
        key: ThemeKey,
    ) -> ThemeColor {
        match key {
            ThemeKey::Background1 => self.background1,
            ThemeKey::Background2 => self.background2,
            ThemeKey::DateBg => self.date_bg,
            ThemeKey::WeekdayBg => self.weekday_bg,
            ThemeKey::DigitStroke => self.digit_stroke,
            ThemeKey::HourHand => self.hour_hand,
            ThemeKey::MinuteHand => self.minute_hand,
        }
    }

    /// Replace the color in one slot.
    pub fn set(
        &mut self,
        key: ThemeKey,
        color: ThemeColor,
    ) {
        let slot = match key {
            ThemeKey::Background1 => &mut self.background1,
            ThemeKey::Background2 => &mut self.background2,
            ThemeKey::DateBg => &mut self.date_bg,
            ThemeKey::WeekdayBg => &mut self.weekday_bg,
            ThemeKey::DigitStroke => &mut self.digit_stroke,
            ThemeKey::HourHand => &mut self.hour_hand,
            ThemeKey::MinuteHand => &mut self.minute_hand,
        };
        *slot = color;
    }

    /// Apply every key present in `message`. Returns how many were applied.
    pub fn apply(
        &mut self,
        message: &ConfigMessage,
    ) -> usize {
        let mut applied = 0;
        for (key, hex) in message.iter() {
            let color = ThemeColor::from_hex(hex);
            log::debug!("theme {key} = {color}");
            self.set(key, color);
            applied += 1;
        }
        applied
    }

    /// Defaults, overridden by every slot `store` holds.
    pub fn load<S>(store: &S) -> Self
    where
        S: ThemeStore,
    {
        let mut theme = Self::DEFAULT;
        for key in ThemeKey::ALL {
            if let Some(argb) = store.read(key) {
                theme.set(key, ThemeColor::from_argb(argb));
            }
        }
        theme
    }

    /// Write all seven slots to `store`, then flush it.
    pub fn save<S>(
        &self,
        store: &mut S,
    ) -> Result<(), S::Error>
    where
        S: ThemeStore,
    {
        for key in ThemeKey::ALL {
            store.write(key, self.get(key).argb())?;
        }
        store.flush()
    }
}

impl Default for Theme {
    fn default() -> Self { Self::DEFAULT }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::colors::{CELESTE, LIBERTY, OXFORD_BLUE, PASTEL_YELLOW, RAJAH, WHITE};

    /// In-memory store; `flushed` holds what survives a restart.
    #[derive(Default)]
    pub(crate) struct MemoryStore {
        pub(crate) pending: HashMap<ThemeKey, u32>,
        pub(crate) flushed: HashMap<ThemeKey, u32>,
        pub(crate) fail_writes: bool,
    }

    impl MemoryStore {
        /// The same storage as seen by a freshly started app.
        pub(crate) fn restarted(&self) -> Self {
            Self {
                pending: self.flushed.clone(),
                flushed: self.flushed.clone(),
                fail_writes: false,
            }
        }
    }

    impl ThemeStore for MemoryStore {
        type Error = &'static str;

        fn read(
            &self,
            key: ThemeKey,
        ) -> Option<u32> {
            self.pending.get(&key).copied()
        }

        fn write(
            &mut self,
            key: ThemeKey,
            argb: u32,
        ) -> Result<(), Self::Error> {
            if self.fail_writes {
                return Err("storage full");
            }
            self.pending.insert(key, argb);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushed = self.pending.clone();
            Ok(())
        }
    }

    #[test]
    fn test_defaults_match_swatches() {
        let theme = Theme::default();
        assert_eq!(theme.background1.rgb(), OXFORD_BLUE);
        assert_eq!(theme.background2.rgb(), LIBERTY);
        assert_eq!(theme.date_bg.rgb(), PASTEL_YELLOW);
        assert_eq!(theme.weekday_bg.rgb(), WHITE);
        assert_eq!(theme.digit_stroke.rgb(), PASTEL_YELLOW);
        assert_eq!(theme.hour_hand.rgb(), CELESTE);
        assert_eq!(theme.minute_hand.rgb(), RAJAH);
        assert!(ThemeKey::ALL.iter().all(|&key| theme.get(key).alpha() == 0xFF));
    }

    #[test]
    fn test_hex_forces_opaque_alpha() {
        assert_eq!(ThemeColor::from_hex(0x12_3456).argb(), 0xFF12_3456);
        assert_eq!(ThemeColor::from_hex(-1).argb(), 0xFFFF_FFFF);
        assert_eq!(ThemeColor::from(RAJAH), ThemeColor::from_hex(0xFF_AA55));
        assert_eq!(ThemeColor::from_hex(0xAB_CDEF).to_string(), "#ABCDEF");
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in ThemeKey::ALL {
            assert_eq!(ThemeKey::from_name(key.name()), Some(key));
        }
        assert_eq!(ThemeKey::from_name("Background1"), None);
        assert_eq!(ThemeKey::from_name(""), None);
    }

    #[test]
    fn test_partial_message_keeps_other_slots() {
        let mut theme = Theme::DEFAULT;
        let message = ConfigMessage::new().with(ThemeKey::HourHand, 0xFF_0000);
        assert_eq!(theme.apply(&message), 1);
        assert_eq!(theme.hour_hand, ThemeColor::from_hex(0xFF_0000));
        assert_eq!(theme.minute_hand, Theme::DEFAULT.minute_hand);

        let mut untouched = Theme::DEFAULT;
        assert_eq!(untouched.apply(&ConfigMessage::new()), 0);
        assert_eq!(untouched, Theme::DEFAULT);
    }

    #[test]
    fn test_load_overrides_only_stored_slots() {
        let mut store = MemoryStore::default();
        store.pending.insert(ThemeKey::DateBg, 0xFF00_AA00);
        let theme = Theme::load(&store);
        assert_eq!(theme.date_bg.argb(), 0xFF00_AA00);
        assert_eq!(theme.background1, Theme::DEFAULT.background1);
    }

    #[test]
    fn test_all_keys_survive_restart() {
        let mut message = ConfigMessage::new();
        for (i, key) in ThemeKey::ALL.into_iter().enumerate() {
            message.set(key, 0x10_2030 * (i as i32 + 1));
        }

        let mut theme = Theme::DEFAULT;
        assert_eq!(theme.apply(&message), 7);
        let mut store = MemoryStore::default();
        theme.save(&mut store).unwrap();

        let reloaded = Theme::load(&store.restarted());
        assert_eq!(reloaded, theme);
        for (key, hex) in message.iter() {
            assert_eq!(reloaded.get(key), ThemeColor::from_hex(hex));
        }
    }

    #[test]
    fn test_failed_save_reports_error() {
        let mut store = MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        };
        assert_eq!(Theme::DEFAULT.save(&mut store), Err("storage full"));
        assert!(store.flushed.is_empty());
    }
}
