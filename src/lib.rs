//! `polled-timeout` library: a non-blocking timeout primitive for embedded
//! `no_std` code. Callers poll [`timeout::PolledTimeout`] from a main loop or
//! task to learn whether a configured duration has elapsed; the time source,
//! the duration unit, and the idle-wait behavior are interchangeable policies
//! composed at compile time with zero dispatch cost.
#![no_std]
//==================================================================================
/// Errors reported when arming a timeout.
pub mod error;
/// Policy contracts and their shipped implementations: monotonic tick
/// sources and per-poll yield strategies.
pub mod policy;
/// Ready-made timeout types for the supported hardware clocks.
#[cfg(any(feature = "embassy-time", feature = "cortex-m"))]
pub mod presets;
/// The polled timeout state machine and its named instantiations.
pub mod timeout;
/// Tick-to-duration conversion and range derivation.
pub mod unit;
//==================================================================================
pub use error::TimeoutError;
pub use policy::{NoYield, RawTick, TimeSource, YieldPolicy};
pub use timeout::{OneShot, Periodic, PolledTimeout};
pub use unit::{TimeMicros, TimeMillis, TimeNanos, TimePolicy, TimeUnit};
//==================================================================================
