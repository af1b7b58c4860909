//! Board-agnostic core logic for the marquee display controller
//!
//! This crate contains the cycle-accurate behavioral model of the
//! controller, free of any host or board dependencies:
//!
//! - Reference-tick divider producing the slow scroll cadence
//! - Wrapping scroll-position counter with prioritized controls
//! - Seven-segment font and scrolling-message ROM
//! - High-speed display multiplexer (shared segment bus, one-hot anodes)
//! - Controller composing the four blocks on a single time base
//! - Configuration type definitions
//!
//! Everything advances on one logical reference tick; there is no wall-clock
//! dependency anywhere, so a harness can drive the model at any rate and
//! always observe the same output sequence.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod font;
pub mod mux;
pub mod position;
pub mod rom;
pub mod tick;

pub use config::{MarqueeConfig, DEFAULT_MESSAGE};
pub use controller::{ControlInputs, DisplayFrame, MarqueeController};
pub use mux::{DisplayMultiplexer, MuxOutput, PHASE_BITS};
pub use position::{PositionControls, PositionCounter, POSITION_COUNT};
pub use rom::{MessageError, MessageRom, DIGIT_COUNT, MESSAGE_LEN};
pub use tick::{TickGenerator, DEFAULT_TERMINAL};
