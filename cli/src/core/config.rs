//! # ChainRS Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the demo configuration: which handlers exist, the order
//! they are linked in, where the second demo pass enters the chain, and which
//! requests the client sends.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit `--config <path>` (or `CHAINRS_CONFIG`). When given, no other file is read.
//! 2. Project-specific `.chainrs.toml` in the current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory (`~/.config/chainrs/` on Linux)
//! 4. Default values defined in the code (the classic Monkey > Squirrel > Dog demo)
//!
//! ## Examples
//!
//! ```toml
//! chain = ["Monkey", "Cat", "Dog"]
//! subchain_from = "Cat"
//! requests = ["Fish", "Banana", "Coffee"]
//!
//! [[handlers]]
//! name = "Cat"
//! accepts = "Fish"
//! ```
//!
use crate::core::error::{ChainrsError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The resolved configuration every command works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Handler names in link order. The first one is the chain's head.
    pub chain: Vec<String>,
    /// Entry point of the sub-chain pass in `chainrs demo`.
    /// When unset, the demo enters at the second node of the chain.
    pub subchain_from: Option<String>,
    /// Requests the client sends when none are given on the command line.
    pub requests: Vec<String>,
    /// Extra literal handlers, on top of the builtin Monkey, Squirrel and Dog.
    pub handlers: Vec<HandlerConfig>,
}

/// One configuration file as written. Unset keys stay `None` so layering can
/// tell them apart from keys spelled out with their default value.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub chain: Option<Vec<String>>,
    pub subchain_from: Option<String>,
    pub requests: Option<Vec<String>>,
    pub handlers: Option<Vec<HandlerConfig>>,
}

/// A handler that accepts exactly one literal request.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HandlerConfig {
    pub name: String,
    pub accepts: String,
}

impl Default for Config {
    fn default() -> Self {
        ConfigFile::default().resolve()
    }
}

impl ConfigFile {
    /// Lays `over` on top of `self`. Every key set in `over` wins.
    ///
    /// `subchain_from` belongs to the chain it was written with: when `over`
    /// sets `chain`, an entry point from `self` is dropped.
    fn overlay(self, over: ConfigFile) -> ConfigFile {
        let subchain_from = if over.chain.is_some() {
            over.subchain_from
        } else {
            over.subchain_from.or(self.subchain_from)
        };
        ConfigFile {
            chain: over.chain.or(self.chain),
            subchain_from,
            requests: over.requests.or(self.requests),
            handlers: over.handlers.or(self.handlers),
        }
    }

    /// Fills every unset key with its built-in default.
    fn resolve(self) -> Config {
        Config {
            chain: self.chain.unwrap_or_else(default_chain),
            subchain_from: self.subchain_from,
            requests: self.requests.unwrap_or_else(default_requests),
            handlers: self.handlers.unwrap_or_default(),
        }
    }
}

fn default_chain() -> Vec<String> {
    vec!["Monkey".into(), "Squirrel".into(), "Dog".into()]
}
fn default_requests() -> Vec<String> {
    vec!["Nut".into(), "Banana".into(), "Coffee".into()]
}

const PROJECT_CONFIG_FILENAME: &str = ".chainrs.toml";
const USER_CONFIG_FILENAME: &str = "config.toml";

/// Loads, merges and validates the configuration.
///
/// `explicit` is the `--config` value. It may start with `~`.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    let file = match explicit {
        Some(raw) => {
            let path = expand_path(raw);
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir =
                std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config, project_config)
        }
    };
    let config = file.resolve();
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "ChainRS", "chainrs") {
        let config_path = proj_dirs.config_dir().join(USER_CONFIG_FILENAME);
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<ConfigFile>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No .chainrs.toml found in the current directory or its ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.chainrs.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// The project file overrides the user file key by key.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> ConfigFile {
    let user = user.unwrap_or_default();
    match project {
        Some(project) => user.overlay(project),
        None => user,
    }
}

fn expand_path(raw: &str) -> PathBuf {
    let expanded = shellexpand::tilde(raw).into_owned();
    debug!("Expanded config path: {}", expanded);
    PathBuf::from(expanded)
}

/// Structural checks that need no handler instances.
///
/// Unknown or duplicated handler names are reported when the chain is built.
fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.chain.is_empty() {
        return Err(anyhow!(ChainrsError::EmptyChain));
    }
    for handler in &config.handlers {
        if handler.name.trim().is_empty() {
            return Err(anyhow!(ChainrsError::Config(format!(
                "Handler accepting '{}' has an empty name.",
                handler.accepts
            ))));
        }
        if handler.accepts.is_empty() {
            return Err(anyhow!(ChainrsError::Config(format!(
                "Handler '{}' has an empty 'accepts' value.",
                handler.name
            ))));
        }
    }
    if let Some(entry) = &config.subchain_from {
        if !config.chain.contains(entry) {
            return Err(anyhow!(ChainrsError::Config(format!(
                "subchain_from '{}' is not part of the chain.",
                entry
            ))));
        }
        if config.chain[0] == *entry {
            return Err(anyhow!(ChainrsError::Config(format!(
                "subchain_from '{}' is the head of the chain, not a sub-chain.",
                entry
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}

impl Config {
    /// Name of the node where the demo's sub-chain pass starts.
    pub fn subchain_entry(&self) -> Option<&str> {
        self.subchain_from
            .as_deref()
            .or_else(|| self.chain.get(1).map(String::as_str))
    }
}
