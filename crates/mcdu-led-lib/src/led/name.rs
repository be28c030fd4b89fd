//! Fixed LED enumeration of the MCDU panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An addressable LED on the MCDU panel.
///
/// The canonical form of every name is uppercase; parsing uppercases the input
/// and then requires an exact match, so surrounding whitespace is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedName {
    Backlight,
    ScreenBacklight,
    Fail,
    Fm,
    Mcdu,
    Menu,
    Fm1,
    Ind,
    Rdy,
    Status,
    Fm2,
}

impl LedName {
    /// Number of addressable LEDs.
    pub const COUNT: usize = 11;

    /// Every LED, in panel order.
    pub const ALL: [LedName; Self::COUNT] = [
        LedName::Backlight,
        LedName::ScreenBacklight,
        LedName::Fail,
        LedName::Fm,
        LedName::Mcdu,
        LedName::Menu,
        LedName::Fm1,
        LedName::Ind,
        LedName::Rdy,
        LedName::Status,
        LedName::Fm2,
    ];

    /// Canonical (uppercase) name as the driver expects it.
    pub const fn as_str(self) -> &'static str {
        match self {
            LedName::Backlight => "BACKLIGHT",
            LedName::ScreenBacklight => "SCREEN_BACKLIGHT",
            LedName::Fail => "FAIL",
            LedName::Fm => "FM",
            LedName::Mcdu => "MCDU",
            LedName::Menu => "MENU",
            LedName::Fm1 => "FM1",
            LedName::Ind => "IND",
            LedName::Rdy => "RDY",
            LedName::Status => "STATUS",
            LedName::Fm2 => "FM2",
        }
    }

    /// Position in [`LedName::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name that is not one of the panel's LEDs. Holds the caller's input verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLed(pub String);

impl fmt::Display for UnknownLed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown LED: {}", self.0)
    }
}

impl std::error::Error for UnknownLed {}

impl FromStr for LedName {
    type Err = UnknownLed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        LedName::ALL
            .into_iter()
            .find(|led| led.as_str() == upper)
            .ok_or_else(|| UnknownLed(s.to_string()))
    }
}
