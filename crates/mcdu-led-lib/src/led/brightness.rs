//! Brightness values and their parsing.
//!
//! A brightness is an integer in `0..=255`. Text input must be a base-10
//! integer; anything else, or any value outside the range, is rejected.

use std::fmt;

use serde::Serialize;

/// LED brightness, 0 (off) to 255 (full).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Brightness(u8);

impl Brightness {
    pub const OFF: Brightness = Brightness(0);
    pub const FULL: Brightness = Brightness(u8::MAX);

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a brightness value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrightnessError {
    /// The input is not a base-10 integer.
    NotANumber(String),
    /// The input is an integer outside `0..=255`, kept as written in decimal.
    OutOfRange(String),
}

impl fmt::Display for BrightnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrightnessError::NotANumber(s) => write!(f, "not a number: \"{s}\""),
            BrightnessError::OutOfRange(v) => write!(f, "{v} is out of range (0-255)"),
        }
    }
}

impl std::error::Error for BrightnessError {}

fn from_integer(value: i128) -> Result<Brightness, BrightnessError> {
    u8::try_from(value)
        .map(Brightness)
        .map_err(|_| BrightnessError::OutOfRange(value.to_string()))
}

/// Sign followed by one or more decimal digits.
fn is_decimal_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a brightness from text.
///
/// Accepts an optional sign and decimal digits, surrounded by optional whitespace:
/// `"200"`, `" 0 "`, `"+255"`. Rejects `"12.5"`, `"0x10"`, `"abc"`, `""`.
pub fn parse_brightness(s: &str) -> Result<Brightness, BrightnessError> {
    let t = s.trim();
    if !is_decimal_integer(t) {
        return Err(BrightnessError::NotANumber(s.to_string()));
    }
    match t.parse::<i128>() {
        Ok(value) => from_integer(value),
        // Only overflow is left once the digits check passed.
        Err(_) => Err(BrightnessError::OutOfRange(t.to_string())),
    }
}

/// Anything a caller may hand over as a brightness: text or a primitive integer.
pub trait BrightnessInput {
    fn to_brightness(&self) -> Result<Brightness, BrightnessError>;
}

impl BrightnessInput for Brightness {
    fn to_brightness(&self) -> Result<Brightness, BrightnessError> {
        Ok(*self)
    }
}

impl BrightnessInput for str {
    fn to_brightness(&self) -> Result<Brightness, BrightnessError> {
        parse_brightness(self)
    }
}

impl BrightnessInput for String {
    fn to_brightness(&self) -> Result<Brightness, BrightnessError> {
        parse_brightness(self)
    }
}

impl<T: BrightnessInput + ?Sized> BrightnessInput for &T {
    fn to_brightness(&self) -> Result<Brightness, BrightnessError> {
        (**self).to_brightness()
    }
}

macro_rules! integer_input {
    ($($t:ty),*) => {
        $(
            impl BrightnessInput for $t {
                fn to_brightness(&self) -> Result<Brightness, BrightnessError> {
                    from_integer(*self as i128)
                }
            }
        )*
    };
}

integer_input!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
