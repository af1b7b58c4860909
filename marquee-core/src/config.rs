//! Configuration type definitions
//!
//! The message content and scroll timing are supplied at construction.
//! Loading them from a file or CLI is the host harness's concern; the core
//! only defines the types and their defaults.

use heapless::String;

use crate::rom::MESSAGE_LEN;
use crate::tick::DEFAULT_TERMINAL;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Message shown when no configuration is provided.
pub const DEFAULT_MESSAGE: &str = "SCROLLING DISPLAYS";

/// Controller configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarqueeConfig {
    /// Message on the displays, up to [`MESSAGE_LEN`] glyphs.
    pub message: String<MESSAGE_LEN>,
    /// Divider terminal count; the scroll advances every `terminal + 1`
    /// reference ticks.
    pub tick_terminal: u32,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        let mut message = String::new();
        // DEFAULT_MESSAGE fits MESSAGE_LEN by construction.
        let _ = message.push_str(DEFAULT_MESSAGE);
        Self {
            message,
            tick_terminal: DEFAULT_TERMINAL,
        }
    }
}
