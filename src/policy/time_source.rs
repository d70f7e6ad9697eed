//! Monotonic tick-source contract. The core never reads hardware itself;
//! it goes through a [`TimeSource`] implementation supplied by the hosting
//! environment. Two adapters ship with the crate: a coarse, long-range
//! clock (embassy-time driver) and a fast, high-resolution one (Cortex-M
//! DWT cycle counter), each behind its own feature flag.

/// Raw reading of a monotonic hardware counter.
///
/// Ticks count up from an arbitrary, implementation-defined epoch and wrap
/// modulo 2^32; only differences between two readings are meaningful.
pub type RawTick = u32;

/// Contract for a monotonically increasing tick counter.
///
/// `now()` must be a pure read with no side effects observable to the
/// timeout logic. Wrapping past [`RawTick::MAX`] is expected and handled by
/// the consumers through modular arithmetic.
pub trait TimeSource {
    /// Nominal counter increments per second.
    const TICKS_PER_SECOND: u64;

    /// Worst-case counter rate, used when deriving the safe duration range.
    ///
    /// Differs from [`Self::TICKS_PER_SECOND`] only for sources whose clock
    /// can be boosted at runtime (e.g. a cycle counter on a core that can
    /// switch to a higher frequency).
    const TICKS_PER_SECOND_MAX: u64 = Self::TICKS_PER_SECOND;

    /// Current counter reading.
    fn now() -> RawTick;
}

/// Coarse, long-range clock backed by the `embassy-time` driver.
///
/// The driver's 64-bit tick count is truncated to 32 bits, which keeps the
/// modular-difference arithmetic of the consumers intact. Resolution and
/// range follow the configured `embassy_time::TICK_HZ`.
#[cfg(feature = "embassy-time")]
#[derive(Debug, Clone, Copy)]
pub struct EmbassyClock;

#[cfg(feature = "embassy-time")]
impl TimeSource for EmbassyClock {
    const TICKS_PER_SECOND: u64 = embassy_time::TICK_HZ;

    #[inline]
    fn now() -> RawTick {
        embassy_time::Instant::now().as_ticks() as RawTick
    }
}

/// Fast, high-resolution clock backed by the Cortex-M DWT cycle counter.
///
/// `HZ` is the core clock frequency in cycles per second. Reading the
/// counter is a single volatile load, so this source suits sub-millisecond
/// timeouts polled at high frequency, at the price of a short range.
///
/// The cycle counter is not running out of reset: enable trace in the DCB
/// and the cycle counter in the DWT before the first reading.
#[cfg(feature = "cortex-m")]
#[derive(Debug, Clone, Copy)]
pub struct CycleCount<const HZ: u64>;

#[cfg(feature = "cortex-m")]
impl<const HZ: u64> TimeSource for CycleCount<HZ> {
    const TICKS_PER_SECOND: u64 = HZ;

    #[inline]
    fn now() -> RawTick {
        cortex_m::peripheral::DWT::cycle_count()
    }
}
