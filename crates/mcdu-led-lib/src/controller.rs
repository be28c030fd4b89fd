//! LED controller: validates names and brightness, forwards to the driver.
//!
//! Every operation is fire-and-forget: invalid input is logged as a warning and
//! ignored, driver failures are logged as errors and swallowed. The returned
//! [`Outcome`] tells the caller what happened; ignoring it is always safe.

use std::fmt;

use crate::driver::McduDriver;
use crate::led::{Brightness, BrightnessError, BrightnessInput, LedName};

/// Result of a controller request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The request was forwarded and the driver accepted it.
    Applied,
    /// The LED name is not on the panel. Holds the caller's input.
    InvalidName(String),
    /// The brightness was not an integer in `0..=255`.
    InvalidBrightness(BrightnessError),
    /// The driver failed. Holds the driver's error message.
    DriverFailed(String),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Applied => write!(f, "applied"),
            Outcome::InvalidName(name) => write!(f, "Unknown LED: {name}"),
            Outcome::InvalidBrightness(e) => write!(f, "Invalid brightness: {e}"),
            Outcome::DriverFailed(e) => write!(f, "Driver failure: {e}"),
        }
    }
}

/// Single entry point for setting LED brightness on an MCDU panel.
pub struct LedController<D> {
    driver: D,
    valid: Vec<LedName>,
}

impl<D: McduDriver> LedController<D> {
    pub fn new(driver: D) -> Self {
        LedController {
            driver,
            valid: LedName::ALL.to_vec(),
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The LEDs this controller accepts, in panel order. The returned list is a copy.
    pub fn valid_leds(&self) -> Vec<LedName> {
        self.valid.clone()
    }

    fn valid_list(&self) -> String {
        self.valid
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn resolve(&self, led: &str) -> Option<LedName> {
        led.parse::<LedName>()
            .ok()
            .filter(|name| self.valid.contains(name))
    }

    fn validate_brightness(
        brightness: impl BrightnessInput,
        target: &str,
    ) -> Result<Brightness, Outcome> {
        brightness.to_brightness().map_err(|e| {
            log::warn!("Invalid brightness for {target}: {e}");
            Outcome::InvalidBrightness(e)
        })
    }

    /// Set one LED. The name is matched case-insensitively.
    pub fn set(&self, led: &str, brightness: impl BrightnessInput) -> Outcome {
        let Some(name) = self.resolve(led) else {
            log::warn!("Invalid LED name: {led}. Valid LEDs: {}", self.valid_list());
            return Outcome::InvalidName(led.to_string());
        };
        let value = match Self::validate_brightness(brightness, name.as_str()) {
            Ok(v) => v,
            Err(outcome) => return outcome,
        };
        match self.driver.set_led(name.as_str(), value.value()) {
            Ok(()) => {
                log::info!("LED {name} set to {value}");
                Outcome::Applied
            }
            Err(e) => {
                log::error!("Failed to set LED {name}: {e}");
                Outcome::DriverFailed(e.to_string())
            }
        }
    }

    /// Set every LED to the same brightness.
    pub fn set_all(&self, brightness: impl BrightnessInput) -> Outcome {
        let value = match Self::validate_brightness(brightness, "all LEDs") {
            Ok(v) => v,
            Err(outcome) => return outcome,
        };
        match self.driver.set_all_leds(value.value()) {
            Ok(()) => {
                log::info!("All LEDs set to {value}");
                Outcome::Applied
            }
            Err(e) => {
                log::error!("Failed to set all LEDs: {e}");
                Outcome::DriverFailed(e.to_string())
            }
        }
    }

    pub fn off(&self, led: &str) -> Outcome {
        self.set(led, Brightness::OFF)
    }

    pub fn on(&self, led: &str) -> Outcome {
        self.set(led, Brightness::FULL)
    }

    pub fn all_off(&self) -> Outcome {
        self.set_all(Brightness::OFF)
    }

    pub fn all_on(&self) -> Outcome {
        self.set_all(Brightness::FULL)
    }

    /// Apply a batch of per-LED levels in order. Each entry is handled like
    /// [`set`](Self::set); a rejected entry does not stop the rest.
    pub fn apply_levels<I, K, B>(&self, levels: I) -> Vec<(String, Outcome)>
    where
        I: IntoIterator<Item = (K, B)>,
        K: AsRef<str>,
        B: BrightnessInput,
    {
        levels
            .into_iter()
            .map(|(led, brightness)| {
                let led = led.as_ref();
                (led.to_string(), self.set(led, brightness))
            })
            .collect()
    }
}
