//! Ready-to-use timeout types for the shipped hardware clocks, mirroring
//! the generic catalog in [`crate::timeout`] with the source filled in.
#[cfg(feature = "cortex-m")]
use crate::policy::CycleCount;
#[cfg(feature = "embassy-time")]
use crate::policy::EmbassyClock;
#[cfg(feature = "cortex-m")]
use crate::timeout::{OneShot, Periodic};
#[cfg(feature = "cortex-m")]
use crate::unit::{TimeMicros, TimeMillis, TimeNanos};

//==================================================================================
// Standard versions, based on the embassy-time driver. Long range, coarse
// resolution: with a millisecond-grade TICK_HZ the millisecond aliases
// cover about 49.7 days.
//==================================================================================

/// One-shot millisecond timeout on the embassy-time clock.
#[cfg(feature = "embassy-time")]
pub type OneShotMs = crate::timeout::OneShotMs<EmbassyClock>;
/// Periodic millisecond timeout on the embassy-time clock.
#[cfg(feature = "embassy-time")]
pub type PeriodicMs = crate::timeout::PeriodicMs<EmbassyClock>;

/// One-shot microsecond timeout on the embassy-time clock.
#[cfg(feature = "embassy-time")]
pub type OneShotUs = crate::timeout::OneShotUs<EmbassyClock>;
/// Periodic microsecond timeout on the embassy-time clock.
#[cfg(feature = "embassy-time")]
pub type PeriodicUs = crate::timeout::PeriodicUs<EmbassyClock>;

//==================================================================================
// Fast versions, based on the DWT cycle counter and intended to be polled
// very often: they trade range for resolution and a cheaper counter read.
// `CPU_HZ` is the core clock in cycles per second; at 80 MHz the
// millisecond alias tops out around 53 s, the nanosecond one around 4 s.
//==================================================================================

/// One-shot millisecond timeout on the cycle counter of a `CPU_HZ` core.
#[cfg(feature = "cortex-m")]
pub type OneShotFastMs<const CPU_HZ: u64> = OneShot<TimeMillis<CycleCount<CPU_HZ>>>;
/// Periodic millisecond timeout on the cycle counter of a `CPU_HZ` core.
#[cfg(feature = "cortex-m")]
pub type PeriodicFastMs<const CPU_HZ: u64> = Periodic<TimeMillis<CycleCount<CPU_HZ>>>;

/// One-shot microsecond timeout on the cycle counter of a `CPU_HZ` core.
#[cfg(feature = "cortex-m")]
pub type OneShotFastUs<const CPU_HZ: u64> = OneShot<TimeMicros<CycleCount<CPU_HZ>>>;
/// Periodic microsecond timeout on the cycle counter of a `CPU_HZ` core.
#[cfg(feature = "cortex-m")]
pub type PeriodicFastUs<const CPU_HZ: u64> = Periodic<TimeMicros<CycleCount<CPU_HZ>>>;

/// One-shot nanosecond timeout on the cycle counter of a `CPU_HZ` core.
#[cfg(feature = "cortex-m")]
pub type OneShotFastNs<const CPU_HZ: u64> = OneShot<TimeNanos<CycleCount<CPU_HZ>>>;
/// Periodic nanosecond timeout on the cycle counter of a `CPU_HZ` core.
#[cfg(feature = "cortex-m")]
pub type PeriodicFastNs<const CPU_HZ: u64> = Periodic<TimeNanos<CycleCount<CPU_HZ>>>;
