//! Config command - inspect and edit the letterhead configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;
use tracing::debug;

use oficio_core::OficioConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a configuration file with the built-in defaults
    Init {
        /// Where to write it (default: the active config path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one value, e.g. "letter.signatory_name"
    Get { key: String },

    /// Change one value and save the file
    Set { key: String, value: String },

    /// Print the active config path
    Path,
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = active_path(config_path);

    match args.command {
        ConfigCommand::Show => {
            if !path.exists() {
                eprintln!("{} No config file at {}, showing defaults.", style("ℹ").blue(), path.display());
            }
            let config = load_or_default(&path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { output, force } => {
            let target = output.unwrap_or(path);
            if target.exists() && !force {
                anyhow::bail!("{} already exists. Use --force to overwrite.", target.display());
            }
            save(&OficioConfig::default(), &target)?;
            println!("{} Created {}", style("✓").green(), target.display());
        }
        ConfigCommand::Get { key } => {
            let config = load_or_default(&path)?;
            println!("{}", serde_json::to_string_pretty(&get_value(&config, &key)?)?);
        }
        ConfigCommand::Set { key, value } => {
            let config = set_value(load_or_default(&path)?, &key, &value)?;
            save(&config, &path)?;
            println!("{} {} = {} ({})", style("✓").green(), key, value, path.display());
        }
        ConfigCommand::Path => {
            let status = if path.exists() {
                style("exists").green()
            } else {
                style("not created").yellow()
            };
            println!("{} ({})", path.display(), status);
        }
    }

    Ok(())
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("oficio")
        .join("config.json")
}

/// The `--config` path when given, otherwise the per-user default.
fn active_path(config_path: Option<&str>) -> PathBuf {
    config_path.map(PathBuf::from).unwrap_or_else(default_config_path)
}

fn load_or_default(path: &Path) -> anyhow::Result<OficioConfig> {
    if !path.exists() {
        return Ok(OficioConfig::default());
    }
    OficioConfig::from_file(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))
}

fn save(config: &OficioConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

/// Load the configuration for a command.
///
/// An explicit path must exist; otherwise the default location is used when
/// present, and built-in defaults when not.
pub fn load_config(path: Option<&str>) -> anyhow::Result<OficioConfig> {
    if let Some(path) = path {
        let config = OficioConfig::from_file(Path::new(path))
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path, e))?;
        return Ok(config);
    }

    let default_path = default_config_path();
    debug!("Looking for config at {}", default_path.display());
    load_or_default(&default_path)
}

/// JSON pointer for a dotted key such as `letter.city`.
fn pointer(key: &str) -> String {
    format!("/{}", key.replace('.', "/"))
}

fn get_value(config: &OficioConfig, key: &str) -> anyhow::Result<Value> {
    serde_json::to_value(config)?
        .pointer(&pointer(key))
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", key))
}

/// Replace the value at `key`, read with the type the key already has.
///
/// String fields take `raw` verbatim, so digit-only codes stay strings.
fn set_value(config: OficioConfig, key: &str, raw: &str) -> anyhow::Result<OficioConfig> {
    let mut json = serde_json::to_value(&config)?;
    let slot = json
        .pointer_mut(&pointer(key))
        .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", key))?;

    let value = match slot {
        Value::String(_) => Value::String(raw.to_string()),
        _ => serde_json::from_str(raw)
            .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?,
    };
    *slot = value;

    serde_json::from_value(json).map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))
}
