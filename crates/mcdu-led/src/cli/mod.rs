//! CLI subcommands: LED requests, preset application, listings.

mod apply;
mod config_cmd;
mod led_cmd;
mod leds;
mod preset;

use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde::Serialize;

pub(super) use mcdu_led_lib::config::Config;
pub(super) use mcdu_led_lib::driver::SimulatedDriver;
pub(super) use mcdu_led_lib::error::Result;
pub(super) use mcdu_led_lib::led::LedName;
pub(super) use mcdu_led_lib::{LedController, McduError};

const PADDING: usize = 2;

/// Compute alignment width for a command's key-value output.
/// Ensures at least PADDING spaces after the longest key in either level,
/// with top-level and indent values aligned to the same column.
pub(super) fn kv_width(top: &[&str], indent: &[&str]) -> usize {
    let top_max = top.iter().map(|k| k.len()).max().unwrap_or(0);
    let indent_max = indent.iter().map(|k| k.len()).max().unwrap_or(0);
    let top_need = if top.is_empty() { 0 } else { top_max + PADDING };
    // Indent keys lose 2 chars of inner width to the "  " prefix
    let indent_need = if indent.is_empty() {
        0
    } else {
        indent_max + PADDING + 2
    };
    top_need.max(indent_need)
}

pub(super) fn format_kv(key: &str, value: impl std::fmt::Display, w: usize) -> String {
    format!("{key:<width$}{value}", width = w)
}

pub(super) fn kv(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{}", format_kv(key, value, w));
}

pub(super) fn kv_indent(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("  {key:<width$}{value}", width = w - 2);
}

/// Invocation-wide settings shared by every subcommand.
pub struct Context {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub json: bool,
}

/// Load config from `custom_path` if given, else from the default location.
pub fn load_config(custom_path: Option<&Path>) -> (Config, Vec<String>) {
    match Config::resolve_path(custom_path) {
        Some(p) => Config::load_from(&p),
        None => (Config::default(), vec![]),
    }
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct LedLevelJson {
    pub name: LedName,
    pub level: u8,
}

#[derive(Serialize)]
pub(super) struct PanelOutput {
    pub applied: bool,
    pub outcome: String,
    pub leds: Vec<LedLevelJson>,
}

#[derive(Serialize)]
pub(super) struct LedsOutput {
    pub count: usize,
    pub leds: Vec<LedName>,
}

#[derive(Serialize)]
pub(super) struct ApplyEntryJson {
    pub led: String,
    pub applied: bool,
    pub outcome: String,
}

#[derive(Serialize)]
pub(super) struct ApplyOutput {
    pub results: Vec<ApplyEntryJson>,
    pub leds: Vec<LedLevelJson>,
}

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub config_file: Option<String>,
    pub config_file_exists: bool,
    pub settings: Config,
    pub problems: Vec<String>,
}

/// Panel state as JSON rows, in panel order.
pub(super) fn panel_json(driver: &SimulatedDriver) -> Vec<LedLevelJson> {
    driver
        .snapshot()
        .into_iter()
        .map(|(name, level)| LedLevelJson { name, level })
        .collect()
}

/// Print the panel state as aligned `NAME  level` rows.
pub(super) fn print_panel(driver: &SimulatedDriver) {
    let names: Vec<&str> = LedName::ALL.iter().map(|l| l.as_str()).collect();
    let w = kv_width(&[], &names);
    println!("Panel:");
    for (name, level) in driver.snapshot() {
        kv_indent(name.as_str(), level, w);
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Set one LED to a brightness (0-255)
    Set {
        /// LED name (case-insensitive), see `leds`
        led: String,
        /// Brightness, a base-10 integer from 0 to 255
        #[arg(allow_hyphen_values = true)]
        brightness: String,
    },

    /// Turn one LED fully on (255)
    On {
        /// LED name (case-insensitive)
        led: String,
    },

    /// Turn one LED off (0)
    Off {
        /// LED name (case-insensitive)
        led: String,
    },

    /// Set every LED to a brightness (0-255)
    SetAll {
        /// Brightness, a base-10 integer from 0 to 255
        #[arg(allow_hyphen_values = true)]
        brightness: String,
    },

    /// Turn every LED fully on
    AllOn,

    /// Turn every LED off
    AllOff,

    /// Apply the per-LED levels from the config file
    Apply,

    /// Store a per-LED level in the config file (omit the brightness to remove it)
    Preset {
        /// LED name (case-insensitive)
        led: String,
        /// Brightness, a base-10 integer from 0 to 255
        #[arg(allow_hyphen_values = true)]
        brightness: Option<String>,
    },

    /// List the valid LED names
    Leds,

    /// Show current configuration and file path
    Config {
        /// Exit with an error if the config has problems
        #[arg(long)]
        check: bool,
    },
}

pub fn run(cmd: Command, ctx: &Context) -> Result<()> {
    match cmd {
        Command::Set { led, brightness } => {
            led_cmd::cmd_led(led_cmd::Request::Set { led, brightness }, ctx.json)
        }
        Command::On { led } => led_cmd::cmd_led(led_cmd::Request::On(led), ctx.json),
        Command::Off { led } => led_cmd::cmd_led(led_cmd::Request::Off(led), ctx.json),
        Command::SetAll { brightness } => {
            led_cmd::cmd_led(led_cmd::Request::SetAll(brightness), ctx.json)
        }
        Command::AllOn => led_cmd::cmd_led(led_cmd::Request::AllOn, ctx.json),
        Command::AllOff => led_cmd::cmd_led(led_cmd::Request::AllOff, ctx.json),
        Command::Apply => apply::cmd_apply(&ctx.config, ctx.json),
        Command::Preset { led, brightness } => {
            preset::cmd_preset(ctx, &led, brightness.as_deref())
        }
        Command::Leds => leds::cmd_leds(ctx.json),
        Command::Config { check } => config_cmd::cmd_config(ctx, check),
    }
}
