//! Error definitions shared across library modules.
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors that can occur while arming or re-arming a polled timeout.
pub enum TimeoutError {
    /// The requested duration cannot be tracked without ambiguity: converted
    /// to raw ticks it would exceed the counter's safe span, so a single
    /// counter wrap could no longer be told apart from "not yet expired".
    #[error("Requested duration {requested} exceeds the unit maximum {max}")]
    DurationOverflow {
        /// Duration the caller asked for, in the unit's scale.
        requested: u32,
        /// Largest duration the unit can represent safely.
        max: u32,
    },
}
