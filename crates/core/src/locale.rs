//! Client locale identifiers
//!
//! Localized columns carry one string slot per client locale, in the fixed
//! order the client data uses. [`Locale`] is the typed index into those
//! slots; [`Locale::resolve`] is the init-time entry point for configuration
//! strings, falling back to `enUS` with a logged warning instead of failing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

/// Error type for locale resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    /// The name does not match any known client locale.
    #[error("unknown locale name: {0}")]
    UnknownName(String),

    /// The numeric slot index is outside the known locale range.
    #[error("locale index out of range: {0}")]
    BadIndex(u32),
}

/// One of the client locales, in slot order.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// The default locale; slot 0 is the fallback for every localized column.
    #[default]
    EnUs = 0,
    KoKr = 1,
    FrFr = 2,
    DeDe = 3,
    ZhCn = 4,
    ZhTw = 5,
    EsEs = 6,
    EsMx = 7,
}

impl Locale {
    /// Number of locales shipped by the client.
    pub const COUNT: usize = 8;

    const ALL: [Locale; Self::COUNT] = [
        Locale::EnUs,
        Locale::KoKr,
        Locale::FrFr,
        Locale::DeDe,
        Locale::ZhCn,
        Locale::ZhTw,
        Locale::EsEs,
        Locale::EsMx,
    ];

    /// Slot index of this locale in localized columns.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical client name, e.g. `"enUS"`.
    pub const fn name(self) -> &'static str {
        match self {
            Locale::EnUs => "enUS",
            Locale::KoKr => "koKR",
            Locale::FrFr => "frFR",
            Locale::DeDe => "deDE",
            Locale::ZhCn => "zhCN",
            Locale::ZhTw => "zhTW",
            Locale::EsEs => "esES",
            Locale::EsMx => "esMX",
        }
    }

    /// Resolve a configured locale name, falling back to [`Locale::EnUs`]
    /// when the name is unknown. Intended for startup configuration, not hot
    /// paths.
    pub fn resolve(name: &str) -> Locale {
        match name.parse() {
            Ok(locale) => {
                debug!(locale = %locale, "using client locale");
                locale
            }
            Err(_) => {
                warn!(name, "unknown client locale, falling back to enUS");
                Locale::EnUs
            }
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LocaleError::UnknownName(s.to_string()))
    }
}

impl TryFrom<u32> for Locale {
    type Error = LocaleError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(LocaleError::BadIndex(value))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
