//! `leds` subcommand: list the valid LED names.

use super::{LedController, LedsOutput, Result, SimulatedDriver};

pub(super) fn cmd_leds(json: bool) -> Result<()> {
    let leds = LedController::new(SimulatedDriver::new()).valid_leds();

    if json {
        let output = LedsOutput {
            count: leds.len(),
            leds,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?
        );
        return Ok(());
    }

    for led in &leds {
        println!("{led}");
    }
    Ok(())
}
