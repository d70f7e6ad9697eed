//! Per-poll yield contract. A one-shot timeout invokes the policy once per
//! unexpired poll, giving the caller a hook to idle or run housekeeping
//! between polls without the timeout itself ever blocking.
use embedded_hal::delay::DelayNs;

/// Action performed while a one-shot timeout has not yet expired.
///
/// Invoked at most once per `expired()` call. Implementations must not
/// block indefinitely and must not touch the timeout's own state.
pub trait YieldPolicy {
    /// Run the yield action.
    fn execute(&mut self);
}

/// No-op policy: the caller does its own work between polls.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoYield;

impl YieldPolicy for NoYield {
    #[inline]
    fn execute(&mut self) {}
}

/// Bounded idle-wait: each unexpired poll blocks for `MILLIS` milliseconds
/// on an externally supplied delay provider.
///
/// Meant for callers that intend to spin-wait on a timeout anyway and would
/// rather hand the idle time to a hardware delay (which may service
/// housekeeping, e.g. a WFI-based implementation) than burn cycles.
#[derive(Debug)]
pub struct DelayYield<D: DelayNs, const MILLIS: u32> {
    delay: D,
}

impl<D: DelayNs, const MILLIS: u32> DelayYield<D, MILLIS> {
    /// Wrap a delay provider into a yield policy.
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    /// Give the delay provider back to the caller.
    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: DelayNs, const MILLIS: u32> YieldPolicy for DelayYield<D, MILLIS> {
    #[inline]
    fn execute(&mut self) {
        self.delay.delay_ms(MILLIS);
    }
}
