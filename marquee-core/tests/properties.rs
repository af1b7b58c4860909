//! Property tests for the datapath invariants.

use proptest::prelude::*;

use marquee_core::{
    ControlInputs, DisplayMultiplexer, MarqueeController, PositionControls, PositionCounter,
    TickGenerator, DIGIT_COUNT,
};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Exactly one pulse per terminal + 1 steps, on the last one.
    #[test]
    fn pulse_train_is_periodic(terminal in 0u32..=64) {
        let mut tick = TickGenerator::new(terminal);

        for _ in 0..4 {
            for _ in 0..terminal {
                prop_assert!(!tick.step());
            }
            prop_assert!(tick.step());
            prop_assert_eq!(tick.count(), 0);
        }
    }

    /// Sixteen enabled steps bring the counter back to any starting value.
    #[test]
    fn wraparound_returns_to_start(start in 0u8..16) {
        let mut counter = PositionCounter::new();
        counter.step(PositionControls::load(start));

        for _ in 0..16 {
            counter.step(PositionControls::advance());
        }
        prop_assert_eq!(counter.value(), start);
    }

    /// Reset wins no matter what else is asserted.
    #[test]
    fn reset_has_highest_priority(
        load in any::<bool>(),
        enable in any::<bool>(),
        load_value in any::<u8>(),
        start in 0u8..16,
    ) {
        let mut counter = PositionCounter::new();
        counter.step(PositionControls::load(start));

        let value = counter.step(PositionControls {
            reset: true,
            load,
            load_value,
            enable,
        });
        prop_assert_eq!(value, 0);
    }

    /// Load beats enable and always lands masked to 4 bits.
    #[test]
    fn load_beats_enable_and_masks(load_value in any::<u8>(), start in 0u8..16) {
        let mut counter = PositionCounter::new();
        counter.step(PositionControls::load(start));

        let value = counter.step(PositionControls {
            load: true,
            load_value,
            enable: true,
            ..PositionControls::inactive()
        });
        prop_assert_eq!(value, load_value & 0x0F);
    }

    /// The multiplexer output is total and one-hot-low at every phase.
    #[test]
    fn mux_output_total_and_one_hot(
        steps in 1usize..5_000,
        patterns in proptest::array::uniform4(0u8..=0x7F),
    ) {
        let mut mux = DisplayMultiplexer::new();

        for _ in 0..steps {
            let out = mux.step(patterns);
            let select = mux.select();
            prop_assert!(select < DIGIT_COUNT as u8);
            prop_assert_eq!(out.segments, patterns[select as usize]);
            prop_assert_eq!((out.anodes & 0x0F).count_ones(), 3);
            prop_assert_eq!(out.anodes & (1 << select), 0);
        }
    }

    /// Short of the divider period, the scroll position never moves.
    #[test]
    fn position_holds_within_divider_period(run in 1u32..5_000) {
        let mut ctrl = MarqueeController::with_timing("HELLO", 5_000).unwrap();

        for _ in 0..run {
            ctrl.step(ControlInputs::default());
            prop_assert_eq!(ctrl.position(), 0);
        }
    }
}
