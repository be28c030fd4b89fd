//! `set` / `on` / `off` / `set-all` / `all-on` / `all-off` subcommands.

use super::{
    LedController, McduError, PanelOutput, Result, SimulatedDriver, panel_json, print_panel,
};

pub(super) enum Request {
    Set { led: String, brightness: String },
    On(String),
    Off(String),
    SetAll(String),
    AllOn,
    AllOff,
}

/// Run one request against a fresh simulated panel and print the result.
/// A request the controller refuses becomes [`McduError::Rejected`].
pub(super) fn cmd_led(request: Request, json: bool) -> Result<()> {
    let ctl = LedController::new(SimulatedDriver::new());
    let outcome = match request {
        Request::Set { led, brightness } => ctl.set(&led, brightness),
        Request::On(led) => ctl.on(&led),
        Request::Off(led) => ctl.off(&led),
        Request::SetAll(brightness) => ctl.set_all(brightness),
        Request::AllOn => ctl.all_on(),
        Request::AllOff => ctl.all_off(),
    };

    if json {
        let output = PanelOutput {
            applied: outcome.is_applied(),
            outcome: outcome.to_string(),
            leds: panel_json(ctl.driver()),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?
        );
    } else if outcome.is_applied() {
        print_panel(ctl.driver());
    }

    if outcome.is_applied() {
        Ok(())
    } else {
        Err(McduError::Rejected(outcome.to_string()))
    }
}
