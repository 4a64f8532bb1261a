use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use extrato_core::MoneyFormat;
use extrato_ingest::{AdapterRegistry, AdapterSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputSection,
    /// Used for CSV amounts. JSON always carries the canonical `1234.56` form.
    pub money: MoneyFormat,
    /// Extra institutions; an id that matches a built-in replaces it.
    pub adapters: Vec<AdapterSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
    pub delimiter: char,
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputSection::default(),
            money: MoneyFormat::brazilian_numeral(),
            adapters: Vec::new(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Csv,
            delimiter: ';',
            date_format: extrato_batch::export::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl OutputSection {
    pub fn delimiter_byte(&self) -> Result<u8> {
        match u8::try_from(self.delimiter) {
            Ok(b) if b.is_ascii() => Ok(b),
            _ => bail!("CSV delimiter must be a single ASCII character, got {:?}", self.delimiter),
        }
    }
}

impl Config {
    /// Built-in institutions plus the ones declared here.
    pub fn registry(&self) -> Result<AdapterRegistry> {
        let mut registry = AdapterRegistry::builtin().context("compile built-in adapters")?;
        for spec in &self.adapters {
            let id = spec.id.clone();
            registry
                .insert(spec.clone())
                .with_context(|| format!("adapter {id:?} in config"))?;
        }
        Ok(registry)
    }
}

pub fn extrato_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".extrato"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(extrato_home()?.join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn save_config(path: &Path, cfg: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }
    save_config(path, &Config::default())?;
    println!("Wrote {}", path.display());
    Ok(())
}
