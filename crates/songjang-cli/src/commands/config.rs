//! Config command - inspect and edit the songjang configuration file.
//!
//! Every subcommand works on the file named by the global `--config` flag,
//! falling back to `<config_dir>/songjang/config.json`.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use songjang_core::{ProductAlias, SongjangConfig};

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
        /// Where to write the file (default: the active config path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one value, e.g. "extraction.max_recipient_chars" or
    /// "render.product_aliases.0.canonical"
    Get { key: String },

    /// Replace one existing value (JSON, or a plain string)
    Set { key: String, value: String },

    /// Never read these tokens as product names
    Deny {
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Treat names containing these words as part of the address
    Keyword {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print CANONICAL on dispatch notes for products containing any PATTERN
    Alias {
        canonical: String,
        #[arg(required = true)]
        patterns: Vec<String>,
    },

    /// Show the active configuration file path
    Path,
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let file = ConfigFile::new(config_path);

    match args.command {
        ConfigCommand::Show => show(&file),
        ConfigCommand::Init { output, force } => {
            init(output.as_deref().unwrap_or(file.path.as_path()), force)
        }
        ConfigCommand::Get { key } => get(&file, &key),
        ConfigCommand::Set { key, value } => set(&file, &key, &value),
        ConfigCommand::Deny { tokens } => file.update(|config| {
            extend_unique(&mut config.extraction.extra_product_denylist, tokens);
            format!(
                "Product denylist: {}",
                config.extraction.extra_product_denylist.join(", ")
            )
        }),
        ConfigCommand::Keyword { words } => file.update(|config| {
            extend_unique(&mut config.extraction.extra_address_keywords, words);
            format!(
                "Address keywords: {}",
                config.extraction.extra_address_keywords.join(", ")
            )
        }),
        ConfigCommand::Alias {
            canonical,
            patterns,
        } => file.update(|config| {
            let aliases = &mut config.render.product_aliases;
            aliases.retain(|alias| alias.canonical != canonical);
            // user aliases take precedence over the built-in ones
            aliases.insert(
                0,
                ProductAlias {
                    contains: patterns,
                    canonical: canonical.clone(),
                },
            );
            format!("Alias added for {}", canonical)
        }),
        ConfigCommand::Path => show_path(&file),
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("songjang")
        .join("config.json")
}

/// The configuration file a command reads and writes.
struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    fn new(explicit: Option<&str>) -> Self {
        Self {
            path: explicit.map(PathBuf::from).unwrap_or_else(default_config_path),
        }
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> anyhow::Result<SongjangConfig> {
        if self.exists() {
            Ok(SongjangConfig::from_file(&self.path)?)
        } else {
            Ok(SongjangConfig::default())
        }
    }

    fn store(&self, config: &SongjangConfig) -> anyhow::Result<()> {
        write_config(&self.path, config)
    }

    /// Load, edit, validate and save, then print the edit's summary.
    fn update<F>(&self, edit: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut SongjangConfig) -> String,
    {
        let mut config = self.load()?;
        let summary = edit(&mut config);
        self.store(&config)?;
        println!("{} {}", style("✓").green(), summary);
        Ok(())
    }
}

fn write_config(path: &Path, config: &SongjangConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

fn extend_unique(list: &mut Vec<String>, items: Vec<String>) {
    for item in items {
        let item = item.trim().to_string();
        if !item.is_empty() && !list.contains(&item) {
            list.push(item);
        }
    }
}

/// `extraction.max_recipient_chars` -> `/extraction/max_recipient_chars`
fn json_pointer(key: &str) -> String {
    key.split('.').fold(String::new(), |mut pointer, part| {
        pointer.push('/');
        pointer.push_str(part);
        pointer
    })
}

fn show(file: &ConfigFile) -> anyhow::Result<()> {
    if !file.exists() {
        eprintln!(
            "{} No config file at {}, showing defaults.",
            style("ℹ").blue(),
            file.path.display()
        );
    }

    println!("{}", serde_json::to_string_pretty(&file.load()?)?);
    Ok(())
}

fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    write_config(path, &SongjangConfig::default())?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        path.display()
    );
    Ok(())
}

fn get(file: &ConfigFile, key: &str) -> anyhow::Result<()> {
    let json = serde_json::to_value(file.load()?)?;
    let value = json
        .pointer(&json_pointer(key))
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;

    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn set(file: &ConfigFile, key: &str, raw: &str) -> anyhow::Result<()> {
    let value: Value =
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

    let mut json = serde_json::to_value(file.load()?)?;
    let slot = json
        .pointer_mut(&json_pointer(key))
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
    *slot = value.clone();

    let config: SongjangConfig = serde_json::from_value(json)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
    file.store(&config)?;

    println!(
        "{} Set {} = {}",
        style("✓").green(),
        key,
        serde_json::to_string(&value)?
    );
    Ok(())
}

fn show_path(file: &ConfigFile) -> anyhow::Result<()> {
    println!("Configuration file: {}", file.path.display());

    if file.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'songjang config init' to create a configuration file.");
    }
    Ok(())
}
