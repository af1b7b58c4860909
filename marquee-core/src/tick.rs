//! Slow-tick generation
//!
//! The scroll position must advance about once per second while the rest of
//! the model runs at the full reference rate. There is no second clock;
//! the generator counts reference ticks up to a terminal value and emits a
//! single-tick enable pulse as it wraps.

/// Terminal count for a one-second scroll cadence at the 100 MHz reference
/// rate. The running count stays within the source register's 26-bit range.
pub const DEFAULT_TERMINAL: u32 = 49_999_999;

/// Divider deriving the slow scroll-update pulse from the reference tick.
///
/// The pulse train is perfectly periodic: exactly one `step` in every
/// `terminal + 1` returns `true`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickGenerator {
    count: u32,
    terminal: u32,
}

impl Default for TickGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINAL)
    }
}

impl TickGenerator {
    /// Create a generator pulsing every `terminal + 1` reference ticks.
    pub const fn new(terminal: u32) -> Self {
        Self { count: 0, terminal }
    }

    /// Advance one reference tick.
    ///
    /// Returns `true` on the tick where the count wraps back to zero.
    /// The count never exceeds the terminal value: it resets exactly there,
    /// so the arithmetic is bounded by construction.
    pub fn step(&mut self) -> bool {
        if self.count == self.terminal {
            self.count = 0;
            true
        } else {
            self.count += 1;
            false
        }
    }

    /// Current count, `0..=terminal`.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Configured terminal count.
    pub fn terminal(&self) -> u32 {
        self.terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_on_fourth_tick() {
        let mut tick = TickGenerator::new(3);

        let pulses: [bool; 4] = core::array::from_fn(|_| tick.step());
        assert_eq!(pulses, [false, false, false, true]);
        assert_eq!(tick.count(), 0);
    }

    #[test]
    fn test_period_repeats() {
        let mut tick = TickGenerator::new(9);

        for _ in 0..5 {
            for _ in 0..9 {
                assert!(!tick.step());
            }
            assert!(tick.step());
        }
    }

    #[test]
    fn test_zero_terminal_pulses_every_tick() {
        let mut tick = TickGenerator::new(0);

        assert!(tick.step());
        assert!(tick.step());
        assert_eq!(tick.count(), 0);
    }

    #[test]
    fn test_count_stays_bounded() {
        let mut tick = TickGenerator::new(5);

        for _ in 0..100 {
            tick.step();
            assert!(tick.count() <= tick.terminal());
        }
    }
}
