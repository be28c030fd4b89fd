//! mcdu-led: validated LED brightness control for MCDU cockpit panels.

pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod led;

pub use controller::{LedController, Outcome};
pub use error::McduError;
