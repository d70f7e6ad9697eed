//! Tests for the shipped yield policies.
use super::*;
use embedded_hal::delay::DelayNs;

/// Delay provider recording every request it receives, in nanoseconds.
struct RecordingDelay {
    total_ns: u64,
    calls: u32,
}

impl RecordingDelay {
    fn new() -> Self {
        Self {
            total_ns: 0,
            calls: 0,
        }
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }
}

#[test]
/// `NoYield` is a zero-sized type, so the default composition carries no cost.
fn test_no_yield_is_zero_sized() {
    assert_eq!(core::mem::size_of::<NoYield>(), 0);
    NoYield.execute();
}

#[test]
/// Each execute() blocks for exactly the fixed, compile-time amount.
fn test_delay_yield_requests_fixed_delay() {
    let mut policy: DelayYield<_, 10> = DelayYield::new(RecordingDelay::new());

    policy.execute();
    policy.execute();

    let delay = policy.release();
    // 2 polls × 10 ms
    assert_eq!(delay.total_ns, 2 * 10_000_000);
}

#[test]
/// The wrapped provider survives the round trip through the policy.
fn test_delay_yield_releases_provider() {
    let mut policy: DelayYield<_, 1> = DelayYield::new(RecordingDelay::new());
    policy.execute();

    let delay = policy.release();
    assert_eq!(delay.calls, 1);
}
