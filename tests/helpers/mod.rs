/// Test doubles to simulate the hardware counter during integration tests.
///
/// `sim_clock!` declares a [`polled_timeout::TimeSource`] backed by an
/// atomic the test drives by hand. Each invocation creates a distinct
/// counter type and static, so tests running in parallel stay isolated.
macro_rules! sim_clock {
    ($clock:ident, $now:ident, $hz:expr) => {
        static $now: core::sync::atomic::AtomicU32 = core::sync::atomic::AtomicU32::new(0);
        #[derive(Debug)]
        struct $clock;
        #[allow(dead_code)]
        impl $clock {
            fn set(ticks: polled_timeout::RawTick) {
                $now.store(ticks, core::sync::atomic::Ordering::Relaxed);
            }
            fn advance(ticks: polled_timeout::RawTick) {
                // fetch_add wraps on overflow, like the hardware counter.
                $now.fetch_add(ticks, core::sync::atomic::Ordering::Relaxed);
            }
        }
        impl polled_timeout::TimeSource for $clock {
            const TICKS_PER_SECOND: u64 = $hz;
            fn now() -> polled_timeout::RawTick {
                $now.load(core::sync::atomic::Ordering::Relaxed)
            }
        }
    };
}

pub(crate) use sim_clock;
