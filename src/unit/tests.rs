//! Tests for unit conversion and safe-range derivation.
use super::*;

/// 1 kHz tick counter, the shape of a classic millisecond uptime clock.
struct KiloHertzTick;

impl TimeSource for KiloHertzTick {
    const TICKS_PER_SECOND: u64 = 1_000;

    fn now() -> RawTick {
        0
    }
}

/// 80 MHz cycle counter whose core clock can be boosted to 160 MHz.
struct BoostableCycles;

impl TimeSource for BoostableCycles {
    const TICKS_PER_SECOND: u64 = 80_000_000;
    const TICKS_PER_SECOND_MAX: u64 = 160_000_000;

    fn now() -> RawTick {
        0
    }
}

#[test]
/// On a 1 kHz source one millisecond is exactly one tick, both ways.
fn test_millis_on_khz_is_identity() {
    assert_eq!(TimeMillis::<KiloHertzTick>::to_ticks(100), 100);
    assert_eq!(TimeMillis::<KiloHertzTick>::to_unit(100), 100);
}

#[test]
/// Sub-tick durations truncate toward zero, never up.
fn test_to_ticks_rounds_down() {
    // 1500 µs on a 1 kHz counter → 1.5 ticks → 1
    assert_eq!(TimeMicros::<KiloHertzTick>::to_ticks(1_500), 1);
    assert_eq!(TimeMicros::<KiloHertzTick>::to_ticks(999), 0);
}

#[test]
/// Millisecond range on a 1 kHz counter is the full span minus two ticks,
/// about 49.7 days.
fn test_max_duration_millis_khz() {
    assert_eq!(TimeMillis::<KiloHertzTick>::MAX_DURATION, u32::MAX - 1);
}

#[test]
/// Units coarser than the tick saturate at the full u32 duration range.
fn test_max_duration_saturates_for_coarse_units() {
    // 1 ns is far finer than a 1 kHz tick: every u32 nanosecond count is
    // expressible, the cap is the duration type itself.
    assert_eq!(TimeNanos::<KiloHertzTick>::MAX_DURATION, u32::MAX);
}

#[test]
/// Range derivation uses the boosted rate, not the nominal one.
fn test_max_duration_uses_worst_case_rate() {
    // (2^32 - 2) cycles at 160 MHz → 26843 ms / 26843545 µs
    assert_eq!(TimeMillis::<BoostableCycles>::MAX_DURATION, 26_843);
    assert_eq!(TimeMicros::<BoostableCycles>::MAX_DURATION, 26_843_545);
}

#[test]
/// A duration that survived validation always converts back to no more
/// than what was asked for.
fn test_round_trip_never_exceeds_request() {
    let d = 1_234_567;
    let ticks = TimeMicros::<BoostableCycles>::to_ticks(d);
    assert!(TimeMicros::<BoostableCycles>::to_unit(ticks) <= d);
}
