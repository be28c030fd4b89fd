//! `apply` subcommand: push the configured per-LED levels to the panel.

use super::{
    ApplyEntryJson, ApplyOutput, Config, LedController, McduError, Result, SimulatedDriver, kv,
    kv_width, panel_json, print_panel,
};

pub(super) fn cmd_apply(config: &Config, json: bool) -> Result<()> {
    if config.levels.is_empty() {
        if json {
            let output = ApplyOutput {
                results: vec![],
                leds: panel_json(&SimulatedDriver::new()),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?
            );
        } else {
            println!("No levels configured (add a [levels] table to the config file).");
        }
        return Ok(());
    }

    let ctl = LedController::new(SimulatedDriver::new());
    let results = ctl.apply_levels(&config.levels);
    let rejected = results.iter().filter(|(_, o)| !o.is_applied()).count();

    if json {
        let output = ApplyOutput {
            results: results
                .iter()
                .map(|(led, outcome)| ApplyEntryJson {
                    led: led.clone(),
                    applied: outcome.is_applied(),
                    outcome: outcome.to_string(),
                })
                .collect(),
            leds: panel_json(ctl.driver()),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?
        );
    } else {
        let keys: Vec<&str> = results.iter().map(|(led, _)| led.as_str()).collect();
        let w = kv_width(&keys, &[]);
        for (led, outcome) in &results {
            kv(led, outcome, w);
        }
        println!();
        print_panel(ctl.driver());
    }

    if rejected == 0 {
        Ok(())
    } else {
        Err(McduError::Rejected(format!(
            "{rejected} of {} configured levels",
            results.len()
        )))
    }
}
