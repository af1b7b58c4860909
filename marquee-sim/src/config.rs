//! Simulator configuration
//!
//! A TOML file supplies the message and timing:
//!
//! ```toml
//! [message]
//! text = "SCROLLING DISPLAYS"
//!
//! [timing]
//! tick_terminal = 131071
//! ```
//!
//! CLI flags override file values; anything left unset falls back to the
//! core defaults.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use heapless::String as HString;
use serde::Deserialize;

use marquee_core::{MarqueeConfig, MESSAGE_LEN};

/// Parsed configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    message: MessageSection,
    #[serde(default)]
    timing: TimingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MessageSection {
    text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TimingSection {
    tick_terminal: Option<u32>,
}

/// Read and parse a configuration file.
pub fn load_file(path: &Path) -> Result<FileConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

/// Merge file values and CLI overrides into a controller configuration.
pub fn resolve(
    file: Option<FileConfig>,
    message: Option<&str>,
    tick_terminal: Option<u32>,
) -> Result<MarqueeConfig> {
    let file = file.unwrap_or_default();
    let mut config = MarqueeConfig::default();

    if let Some(text) = message.map(str::to_owned).or(file.message.text) {
        config.message = HString::try_from(text.as_str())
            .map_err(|_| anyhow!("message {text:?} is longer than {MESSAGE_LEN} glyphs"))?;
    }
    if let Some(terminal) = tick_terminal.or(file.timing.tick_terminal) {
        config.tick_terminal = terminal;
    }

    Ok(config)
}
