//! The two external collaborator contracts a polled timeout is built on:
//! a monotonic tick source and a per-poll yield strategy. Both are plain
//! traits implemented by zero-sized (or near-zero-sized) policy types, so
//! composition is resolved entirely at compile time.
/// Monotonic counter contract and the shipped hardware adapters.
pub mod time_source;
/// Per-poll yield contract, the no-op policy, and the bounded idle-wait.
pub mod yield_policy;

pub use time_source::{RawTick, TimeSource};
pub use yield_policy::{DelayYield, NoYield, YieldPolicy};

#[cfg(feature = "cortex-m")]
pub use time_source::CycleCount;
#[cfg(feature = "embassy-time")]
pub use time_source::EmbassyClock;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
