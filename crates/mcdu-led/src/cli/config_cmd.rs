//! `config` subcommand: show current configuration and file path.

use super::{Config, ConfigOutput, Context, McduError, Result, kv, kv_indent, kv_width};

/// With `check`, any validation problem makes the command fail after printing.
pub(super) fn cmd_config(ctx: &Context, check: bool) -> Result<()> {
    let config = &ctx.config;
    let config_path = Config::resolve_path(ctx.config_path.as_deref());
    let config_exists = config_path.as_ref().is_some_and(|p| p.exists());
    let problems: Vec<String> = match config.validate() {
        Ok(()) => vec![],
        Err(errors) => errors.iter().map(|e| e.to_string()).collect(),
    };

    if ctx.json {
        let output = ConfigOutput {
            config_file: config_path.as_ref().map(|p| p.display().to_string()),
            config_file_exists: config_exists,
            settings: config.clone(),
            problems: problems.clone(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?
        );
        return check_result(&problems, check);
    }

    // Human-readable output
    let level_keys: Vec<&str> = config.levels.keys().map(|k| k.as_str()).collect();
    let mut indent_keys = vec!["log_level:"];
    indent_keys.extend(level_keys.iter().copied());
    let w = kv_width(&["Config file:"], &indent_keys);

    match &config_path {
        Some(p) => {
            if config_exists {
                kv("Config file:", format_args!("{} (loaded)", p.display()), w);
            } else {
                kv(
                    "Config file:",
                    format_args!("{} (not found, using defaults)", p.display()),
                    w,
                );
            }
        }
        None => kv("Config file:", "(no config directory)", w),
    }
    println!();

    println!("Settings:");
    kv_indent("log_level:", &config.log_level, w);
    println!();

    println!("Levels:");
    if config.levels.is_empty() {
        println!("  (none)");
    }
    for (led, level) in &config.levels {
        kv_indent(led, level, w);
    }

    if !problems.is_empty() {
        println!();
        println!("Problems:");
        for p in &problems {
            println!("  {p}");
        }
    }
    check_result(&problems, check)
}

fn check_result(problems: &[String], check: bool) -> Result<()> {
    if check && !problems.is_empty() {
        return Err(McduError::Config(format!(
            "{} problem{} found",
            problems.len(),
            if problems.len() == 1 { "" } else { "s" }
        )));
    }
    Ok(())
}
