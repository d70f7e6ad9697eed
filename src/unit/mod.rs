//! Bridges a raw tick reading to a semantic duration unit. A [`TimeUnit`]
//! pairs a [`TimeSource`] with a fixed units-per-second ratio and derives,
//! at compile time, the largest duration that stays unambiguous across a
//! single counter wrap.
use crate::policy::{RawTick, TimeSource};
use core::marker::PhantomData;

/// Largest elapsed-tick span a timeout may cover.
///
/// One tick short of the counter's full range, so an expiry sitting right
/// at the wrap point is still distinguishable from "not yet expired".
const MAX_SAFE_TICKS: u64 = (RawTick::MAX - 1) as u64;

const fn max_duration(ticks_per_second_max: u64, units_per_second: u64) -> u32 {
    let max = MAX_SAFE_TICKS * units_per_second / ticks_per_second_max;
    if max > RawTick::MAX as u64 {
        // Unit coarser than the tick: every u32 duration converts safely.
        RawTick::MAX
    } else {
        max as u32
    }
}

/// The composed time-unit role consumed by the timeout state machine:
/// a tick source plus conversions to and from one duration unit.
///
/// Stateless by contract; implementations are type-level carriers.
pub trait TimePolicy {
    /// Largest requestable duration, in the unit's scale.
    const MAX_DURATION: u32;

    /// Current reading of the underlying tick source.
    fn now() -> RawTick;

    /// Convert a duration in the unit's scale to raw ticks, rounding down.
    ///
    /// Truncation keeps a too-fine duration from firing late rather than
    /// early turning into the opposite: a timeout can only be shortened by
    /// less than one tick, never lengthened.
    fn to_ticks(duration: u32) -> RawTick;

    /// Convert raw ticks back to the unit's scale, rounding down.
    fn to_unit(ticks: RawTick) -> u32;
}

/// Fixed-ratio unit conversion over a tick source.
///
/// `UNITS_PER_SECOND` selects the duration unit: 1_000 for milliseconds,
/// 1_000_000 for microseconds, 1_000_000_000 for nanoseconds. See the
/// [`TimeMillis`], [`TimeMicros`] and [`TimeNanos`] aliases.
#[derive(Debug, Clone, Copy)]
pub struct TimeUnit<S, const UNITS_PER_SECOND: u64> {
    _source: PhantomData<S>,
}

/// Milliseconds over the tick source `S`.
pub type TimeMillis<S> = TimeUnit<S, 1_000>;
/// Microseconds over the tick source `S`.
pub type TimeMicros<S> = TimeUnit<S, 1_000_000>;
/// Nanoseconds over the tick source `S`.
pub type TimeNanos<S> = TimeUnit<S, 1_000_000_000>;

impl<S: TimeSource, const UNITS_PER_SECOND: u64> TimePolicy for TimeUnit<S, UNITS_PER_SECOND> {
    // Derived against the worst-case tick rate, so a runtime clock boost
    // cannot push an accepted duration past the safe span.
    const MAX_DURATION: u32 = max_duration(S::TICKS_PER_SECOND_MAX, UNITS_PER_SECOND);

    #[inline]
    fn now() -> RawTick {
        S::now()
    }

    #[inline]
    fn to_ticks(duration: u32) -> RawTick {
        (duration as u64 * S::TICKS_PER_SECOND / UNITS_PER_SECOND) as RawTick
    }

    #[inline]
    fn to_unit(ticks: RawTick) -> u32 {
        (ticks as u64 * UNITS_PER_SECOND / S::TICKS_PER_SECOND) as u32
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
