//! Polled timeout state machine. A [`PolledTimeout`] owns one armed
//! deadline and answers expiry queries without ever blocking; the mode
//! (one-shot or periodic) is fixed at the type level, and all elapsed-time
//! arithmetic is modular so a single counter wrap is handled transparently.
use crate::error::TimeoutError;
use crate::policy::{NoYield, RawTick, YieldPolicy};
use crate::unit::TimePolicy;
use core::marker::PhantomData;

/// A non-blocking timeout polled from a single owning context.
///
/// `PERIODIC` selects the behavior after expiry is detected: a one-shot
/// (`false`) stays expired until explicitly re-armed, a periodic (`true`)
/// advances its deadline by exactly one period and keeps going. The two
/// modes share all arithmetic. `P` fixes the tick source and duration
/// unit, `Y` the action taken while a one-shot poll comes back unexpired.
///
/// # Caller obligations
/// Poll at least once per [`Self::max_duration()`] window: the tick data
/// cannot distinguish one counter wrap from several, so polling gaps
/// longer than the full counter range are out of contract.
///
/// # Concurrency
/// One instance, one polling context. The mutating operations take
/// `&mut self`, which already rules out unsynchronized sharing.
#[derive(Debug)]
pub struct PolledTimeout<const PERIODIC: bool, P, Y = NoYield> {
    /// Counter reading the deadline is anchored to.
    start: RawTick,
    /// Armed duration, in raw ticks.
    timeout: RawTick,
    /// Sticky expiry marker; only the one-shot path reads it.
    expired: bool,
    yielder: Y,
    _policy: PhantomData<P>,
}

/// A timeout that reports expiry once and stays expired until re-armed.
pub type OneShot<P, Y = NoYield> = PolledTimeout<false, P, Y>;
/// A timeout that automatically re-arms one period past its deadline.
pub type Periodic<P, Y = NoYield> = PolledTimeout<true, P, Y>;

impl<const PERIODIC: bool, P, Y> PolledTimeout<PERIODIC, P, Y>
where
    P: TimePolicy,
    Y: YieldPolicy,
{
    /// Arm a timeout for `duration`, expressed in the unit of `P`.
    ///
    /// Rejects durations above [`Self::max_duration()`]; see
    /// [`TimeoutError::DurationOverflow`].
    pub fn new(duration: u32) -> Result<Self, TimeoutError>
    where
        Y: Default,
    {
        Self::with_yield(duration, Y::default())
    }

    /// Arm a timeout for `duration` with an explicit yield-policy instance.
    ///
    /// Needed for stateful policies such as
    /// [`DelayYield`](crate::policy::DelayYield), which carry the delay
    /// provider they delegate to.
    pub fn with_yield(duration: u32, yielder: Y) -> Result<Self, TimeoutError> {
        let timeout = Self::checked_ticks(duration)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("arming timeout: {} units -> {} ticks", duration, timeout);

        Ok(Self {
            start: P::now(),
            timeout,
            expired: false,
            yielder,
            _policy: PhantomData,
        })
    }

    /// Whether the armed duration has elapsed.
    ///
    /// One-shot mode: the first expired query latches the state, and every
    /// later query answers `true` without reading the counter until a
    /// [`reset`](Self::reset) or [`restart`](Self::restart); while still
    /// unexpired, the yield policy runs once before `false` is returned.
    ///
    /// Periodic mode: an expired query advances the deadline by exactly
    /// one period, anchored to the old deadline rather than to the current
    /// reading, so call jitter never accumulates into drift. The yield
    /// policy is not involved; periodic timeouts are meant for tight-loop
    /// scheduling, not idle-waiting.
    pub fn expired(&mut self) -> bool {
        if PERIODIC {
            self.expired_periodic()
        } else {
            self.expired_one_shot()
        }
    }

    /// Re-arm from the current counter reading with a new duration.
    ///
    /// Transitions an expired one-shot back to armed. Rejects durations
    /// above [`Self::max_duration()`], leaving the instance untouched.
    pub fn reset(&mut self, duration: u32) -> Result<(), TimeoutError> {
        self.timeout = Self::checked_ticks(duration)?;
        self.restart();
        Ok(())
    }

    /// Re-arm from the current counter reading, keeping the duration.
    pub fn restart(&mut self) {
        self.start = P::now();
        self.expired = false;
    }

    /// Time left before expiry, in the unit of `P`, clamped to zero.
    ///
    /// Purely informational: reading it neither latches one-shot expiry
    /// nor re-arms a periodic.
    pub fn remaining(&self) -> u32 {
        if self.expired {
            return 0;
        }
        let elapsed = P::now().wrapping_sub(self.start);
        if elapsed >= self.timeout {
            0
        } else {
            P::to_unit(self.timeout - elapsed)
        }
    }

    /// The armed duration, expressed back in the unit of `P`.
    pub fn duration(&self) -> u32 {
        P::to_unit(self.timeout)
    }

    /// Whether there is anything to wait for (the duration is nonzero).
    pub fn can_wait(&self) -> bool {
        self.timeout != 0
    }

    /// Largest duration this timeout type accepts.
    pub const fn max_duration() -> u32 {
        P::MAX_DURATION
    }

    fn checked_ticks(duration: u32) -> Result<RawTick, TimeoutError> {
        if duration > P::MAX_DURATION {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "rejecting timeout duration {} (unit maximum {})",
                duration,
                P::MAX_DURATION
            );
            return Err(TimeoutError::DurationOverflow {
                requested: duration,
                max: P::MAX_DURATION,
            });
        }
        Ok(P::to_ticks(duration))
    }

    fn check_expired(&self, now: RawTick) -> bool {
        // Modular subtraction stays correct across one counter wrap as long
        // as the armed span respects MAX_DURATION.
        now.wrapping_sub(self.start) >= self.timeout
    }

    fn expired_one_shot(&mut self) -> bool {
        if self.expired {
            return true;
        }
        if self.check_expired(P::now()) {
            self.expired = true;
            return true;
        }
        self.yielder.execute();
        false
    }

    fn expired_periodic(&mut self) -> bool {
        if self.check_expired(P::now()) {
            // Anchor to the previous deadline, not to now().
            self.start = self.start.wrapping_add(self.timeout);
            return true;
        }
        false
    }
}

//==================================================================================
// Named instantiations: one alias per duration unit and mode, all paired
// with the no-op yield policy, generic over the tick source.
//==================================================================================
use crate::unit::{TimeMicros, TimeMillis, TimeNanos};

/// One-shot millisecond timeout over the tick source `S`.
pub type OneShotMs<S> = OneShot<TimeMillis<S>>;
/// Periodic millisecond timeout over the tick source `S`.
pub type PeriodicMs<S> = Periodic<TimeMillis<S>>;

/// One-shot microsecond timeout over the tick source `S`.
pub type OneShotUs<S> = OneShot<TimeMicros<S>>;
/// Periodic microsecond timeout over the tick source `S`.
pub type PeriodicUs<S> = Periodic<TimeMicros<S>>;

/// One-shot nanosecond timeout over the tick source `S`.
pub type OneShotNs<S> = OneShot<TimeNanos<S>>;
/// Periodic nanosecond timeout over the tick source `S`.
pub type PeriodicNs<S> = Periodic<TimeNanos<S>>;
