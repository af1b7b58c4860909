//! Controller composition
//!
//! Owns one of each datapath block and advances them in a fixed order every
//! reference tick: divider first, then position counter (enabled by the
//! divider pulse), then pattern lookup, then the multiplexer. The slow
//! scroll domain and the fast refresh domain never share mutable state;
//! they meet only in the read-only pattern array handed to the multiplexer.

use crate::config::MarqueeConfig;
use crate::mux::{DisplayMultiplexer, MuxOutput};
use crate::position::{PositionControls, PositionCounter};
use crate::rom::{MessageError, MessageRom};
use crate::tick::{TickGenerator, DEFAULT_TERMINAL};

/// External control inputs, e.g. board buttons and switches.
///
/// All inactive by default; the core never asserts these itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlInputs {
    /// Asynchronous scroll-position reset.
    pub reset: bool,
    /// Synchronous load of `load_value` as the scroll position.
    pub load: bool,
    /// Position loaded while `load` is active, masked to 4 bits.
    pub load_value: u8,
}

/// The two externally visible signals, sampled once per reference tick.
pub type DisplayFrame = MuxOutput;

/// Cycle-accurate model of the whole display controller.
#[derive(Debug, Clone)]
pub struct MarqueeController {
    tick: TickGenerator,
    position: PositionCounter,
    rom: MessageRom,
    mux: DisplayMultiplexer,
    ticks: u64,
}

impl MarqueeController {
    /// Controller with the default one-second scroll cadence.
    pub fn new(message: &str) -> Result<Self, MessageError> {
        Self::with_timing(message, DEFAULT_TERMINAL)
    }

    /// Controller with an explicit divider terminal, for harnesses that
    /// want a faster scroll than the hardware cadence.
    pub fn with_timing(message: &str, tick_terminal: u32) -> Result<Self, MessageError> {
        Ok(Self {
            tick: TickGenerator::new(tick_terminal),
            position: PositionCounter::new(),
            rom: MessageRom::new(message)?,
            mux: DisplayMultiplexer::new(),
            ticks: 0,
        })
    }

    /// Controller from a configuration value.
    pub fn from_config(config: &MarqueeConfig) -> Result<Self, MessageError> {
        Self::with_timing(config.message.as_str(), config.tick_terminal)
    }

    /// Advance the model by one reference tick.
    ///
    /// The multiplexer advances every tick; the scroll position advances
    /// only when the divider pulses (or a control input forces it), so the
    /// message moves at most once per `terminal + 1` ticks while the
    /// refresh free-runs.
    pub fn step(&mut self, inputs: ControlInputs) -> DisplayFrame {
        let pulse = self.tick.step();
        let position = self.position.step(PositionControls {
            reset: inputs.reset,
            load: inputs.load,
            load_value: inputs.load_value,
            enable: pulse,
        });
        let patterns = self.rom.patterns_at(position);
        self.ticks += 1;
        self.mux.step(patterns)
    }

    /// Current scroll position, 0–15.
    pub fn position(&self) -> u8 {
        self.position.value()
    }

    /// Current multiplexer digit select, 0–3.
    pub fn select(&self) -> u8 {
        self.mux.select()
    }

    /// Reference ticks stepped so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}
