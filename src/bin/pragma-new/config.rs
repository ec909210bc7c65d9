use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use spdlog::debug;

use pragma_tools::config::{read_config, Config, CFG_FILE_NAME};

fn get_config_path() -> Option<PathBuf> {
    let cur_dir = env::current_dir().ok()?;
    if cur_dir.join(CFG_FILE_NAME).exists() {
        return Some(cur_dir.join(CFG_FILE_NAME));
    }

    if let Some(exe_dir) = env::current_exe().ok().as_ref().and_then(|p| p.parent()) {
        if exe_dir.join(CFG_FILE_NAME).exists() {
            return Some(exe_dir.join(CFG_FILE_NAME));
        }
    }

    let cfg_dir = dirs::config_dir()?;
    if cfg_dir.join(CFG_FILE_NAME).exists() {
        return Some(cfg_dir.join(CFG_FILE_NAME));
    }

    None
}

/// Explicit path first, then the usual locations. No file at all means defaults.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let Some(config_path) = cfg_path.or_else(get_config_path) else {
        debug!("No {} found, using defaults", CFG_FILE_NAME);
        return Ok(Config::default());
    };

    debug!("Reading config from {}", config_path.display());
    read_config(&config_path)
        .with_context(|| format!("Could not load configuration {}", config_path.display()))
}
