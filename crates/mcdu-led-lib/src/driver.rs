//! Panel driver capability: trait, simulated panel, and test mock.

use std::cell::{Cell, RefCell};
use std::fmt;

use crate::led::LedName;

// ── Error type ──

/// Panel driver errors.
///
/// String payloads follow the convention **"context: details"** where *context*
/// identifies the operation (e.g. `"set_led FAIL"`) and *details* describes what
/// went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    NotConnected,
    WriteFailed(String),
    UnknownLed(String),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::NotConnected => write!(f, "MCDU panel not connected"),
            DriverError::WriteFailed(e) => write!(f, "Write failed: {e}"),
            DriverError::UnknownLed(name) => write!(f, "Driver does not know LED: {name}"),
        }
    }
}

impl std::error::Error for DriverError {}

pub type Result<T> = std::result::Result<T, DriverError>;

// ── Trait ──

/// The operations the controller needs from an MCDU panel driver.
///
/// Names arrive in canonical uppercase form and values are already in range.
pub trait McduDriver {
    fn set_led(&self, name: &str, value: u8) -> Result<()>;
    fn set_all_leds(&self, value: u8) -> Result<()>;
}

impl<D: McduDriver + ?Sized> McduDriver for &D {
    fn set_led(&self, name: &str, value: u8) -> Result<()> {
        (**self).set_led(name, value)
    }

    fn set_all_leds(&self, value: u8) -> Result<()> {
        (**self).set_all_leds(value)
    }
}

// ── Simulated panel ──

/// In-memory panel: remembers the last level written to each LED.
pub struct SimulatedDriver {
    levels: RefCell<[u8; LedName::COUNT]>,
    connected: Cell<bool>,
}

impl Default for SimulatedDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedDriver {
    /// A connected panel with every LED off.
    pub fn new() -> Self {
        SimulatedDriver {
            levels: RefCell::new([0; LedName::COUNT]),
            connected: Cell::new(true),
        }
    }

    /// Simulate unplugging (`false`) or replugging (`true`) the panel.
    pub fn set_connected(&self, connected: bool) {
        self.connected.set(connected);
    }

    /// Last level written to `led`.
    pub fn level(&self, led: LedName) -> u8 {
        self.levels.borrow()[led.index()]
    }

    /// Current level of every LED, in panel order.
    pub fn snapshot(&self) -> Vec<(LedName, u8)> {
        let levels = self.levels.borrow();
        LedName::ALL
            .into_iter()
            .map(|led| (led, levels[led.index()]))
            .collect()
    }

    fn ensure_connected(&self) -> Result<()> {
        if self.connected.get() {
            Ok(())
        } else {
            Err(DriverError::NotConnected)
        }
    }
}

impl McduDriver for SimulatedDriver {
    fn set_led(&self, name: &str, value: u8) -> Result<()> {
        self.ensure_connected()?;
        let led: LedName = name
            .parse()
            .map_err(|_| DriverError::UnknownLed(name.to_string()))?;
        self.levels.borrow_mut()[led.index()] = value;
        log::debug!("simulated panel: {led} = {value}");
        Ok(())
    }

    fn set_all_leds(&self, value: u8) -> Result<()> {
        self.ensure_connected()?;
        self.levels.borrow_mut().fill(value);
        log::debug!("simulated panel: all = {value}");
        Ok(())
    }
}

// ── Mock driver for testing ──

/// Recording driver for unit and integration tests.
///
/// Always compiled so integration tests can reach it; hidden from public docs.
#[doc(hidden)]
pub mod mock {
    use super::*;

    /// One recorded driver call.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DriverCall {
        SetLed(String, u8),
        SetAll(u8),
    }

    /// Recording driver for tests. Every call is recorded in order, including
    /// calls that were made to fail via the injection flags.
    #[derive(Default)]
    pub struct MockDriver {
        pub calls: RefCell<Vec<DriverCall>>,
        /// If true, `set_led` returns an error.
        pub fail_set_led: Cell<bool>,
        /// If true, `set_all_leds` returns an error.
        pub fail_set_all: Cell<bool>,
    }

    impl MockDriver {
        pub fn new() -> Self {
            Self::default()
        }

        /// Snapshot of the recorded calls.
        pub fn calls(&self) -> Vec<DriverCall> {
            self.calls.borrow().clone()
        }
    }

    impl McduDriver for MockDriver {
        fn set_led(&self, name: &str, value: u8) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(DriverCall::SetLed(name.to_string(), value));
            if self.fail_set_led.get() {
                return Err(DriverError::WriteFailed(format!(
                    "set_led {name}: bus timeout"
                )));
            }
            Ok(())
        }

        fn set_all_leds(&self, value: u8) -> Result<()> {
            self.calls.borrow_mut().push(DriverCall::SetAll(value));
            if self.fail_set_all.get() {
                return Err(DriverError::WriteFailed("set_all_leds: bus timeout".into()));
            }
            Ok(())
        }
    }
}
