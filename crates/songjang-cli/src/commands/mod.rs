//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod parse;

use std::fs;
use std::io::Read;
use std::path::Path;

use songjang_core::SongjangConfig;

use config::default_config_path;

/// Load the config named on the command line, else the default file, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<SongjangConfig> {
    if let Some(path) = config_path {
        return Ok(SongjangConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(SongjangConfig::from_file(&default_path)?)
    } else {
        Ok(SongjangConfig::default())
    }
}

/// Read an input file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(fs::read_to_string(path)?)
}
