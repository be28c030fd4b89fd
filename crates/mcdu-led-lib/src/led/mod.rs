//! LED identifiers and brightness values.

mod brightness;
mod name;

pub use brightness::{Brightness, BrightnessError, BrightnessInput, parse_brightness};
pub use name::{LedName, UnknownLed};
