//! `preset` subcommand: store or remove a per-LED level in the config file.

use mcdu_led_lib::led::UnknownLed;

use super::{Config, Context, LedName, McduError, Result};

pub(super) fn cmd_preset(ctx: &Context, led: &str, brightness: Option<&str>) -> Result<()> {
    let path = Config::resolve_path(ctx.config_path.as_deref())
        .ok_or_else(|| McduError::Config("no config directory".into()))?;
    let mut config = ctx.config.clone();

    match brightness {
        Some(b) => {
            let name = config.set_level(led, b)?;
            config.save_to(&path)?;
            println!(
                "Preset {name} = {} ({})",
                config.levels[name.as_str()],
                path.display()
            );
        }
        None => {
            let name: LedName = led
                .parse()
                .map_err(|e: UnknownLed| McduError::Config(e.to_string()))?;
            if config.remove_level(name) {
                config.save_to(&path)?;
                println!("Removed preset for {name} ({})", path.display());
            } else {
                println!("No preset for {name}");
            }
        }
    }
    Ok(())
}
