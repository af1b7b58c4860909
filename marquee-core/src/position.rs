//! Scroll position counter
//!
//! A 4-bit wrapping counter that tracks which window of the message is on
//! the displays. Control lines are evaluated in a fixed priority order:
//! reset, then load, then enable, then hold. Every branch drives a defined
//! next value.

/// Number of scroll positions (4-bit counter).
pub const POSITION_COUNT: u8 = 16;

const POSITION_MASK: u8 = POSITION_COUNT - 1;

/// Control lines sampled by the position counter each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PositionControls {
    /// Asynchronous reset; overrides every other control.
    pub reset: bool,
    /// Synchronous load of `load_value`.
    pub load: bool,
    /// Value loaded while `load` is active, masked to 4 bits.
    pub load_value: u8,
    /// Count enable, normally the divider pulse.
    pub enable: bool,
}

impl PositionControls {
    /// All controls inactive: the counter holds its value.
    pub const fn inactive() -> Self {
        Self {
            reset: false,
            load: false,
            load_value: 0,
            enable: false,
        }
    }

    /// Count enable only.
    pub const fn advance() -> Self {
        Self {
            reset: false,
            load: false,
            load_value: 0,
            enable: true,
        }
    }

    /// Load a specific position.
    pub const fn load(value: u8) -> Self {
        Self {
            reset: false,
            load: true,
            load_value: value,
            enable: false,
        }
    }

    /// Reset to position zero.
    pub const fn reset() -> Self {
        Self {
            reset: true,
            load: false,
            load_value: 0,
            enable: false,
        }
    }
}

/// Wrapping scroll position counter, range 0–15.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PositionCounter {
    value: u8,
}

impl PositionCounter {
    /// Counter starting at position zero.
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Apply one step of the control priority chain and return the new value.
    ///
    /// Reset wins over load, load over enable; with nothing asserted the
    /// value holds. `load_value` outside 0–15 is masked, never rejected.
    pub fn step(&mut self, ctrl: PositionControls) -> u8 {
        self.value = if ctrl.reset {
            0
        } else if ctrl.load {
            ctrl.load_value & POSITION_MASK
        } else if ctrl.enable {
            (self.value + 1) & POSITION_MASK
        } else {
            self.value
        };
        self.value
    }

    /// Current position, `0..POSITION_COUNT`.
    pub fn value(&self) -> u8 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_after_full_cycle() {
        let mut counter = PositionCounter::new();

        for expected in 1..16 {
            assert_eq!(counter.step(PositionControls::advance()), expected);
        }
        assert_eq!(counter.step(PositionControls::advance()), 0);
    }

    #[test]
    fn test_hold_keeps_value() {
        let mut counter = PositionCounter::new();
        counter.step(PositionControls::load(7));

        for _ in 0..10 {
            assert_eq!(counter.step(PositionControls::inactive()), 7);
        }
    }

    #[test]
    fn test_load_overrides_enable() {
        let mut counter = PositionCounter::new();
        counter.step(PositionControls::advance());

        let ctrl = PositionControls {
            load: true,
            load_value: 9,
            enable: true,
            ..PositionControls::inactive()
        };
        assert_eq!(counter.step(ctrl), 9);
    }

    #[test]
    fn test_reset_overrides_everything() {
        let mut counter = PositionCounter::new();
        counter.step(PositionControls::load(12));

        let ctrl = PositionControls {
            reset: true,
            load: true,
            load_value: 5,
            enable: true,
        };
        assert_eq!(counter.step(ctrl), 0);
    }

    #[test]
    fn test_load_value_is_masked() {
        let mut counter = PositionCounter::new();

        assert_eq!(counter.step(PositionControls::load(0x79)), 0x09);
    }
}
