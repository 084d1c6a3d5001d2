//! Event-based dispatch for the two interrupt sources.

/// The hardware events that drive the intervalometer.
///
/// On bare metal each variant corresponds to one interrupt service routine:
/// the pin-change interrupt raised on any button transition and the periodic
/// timer-overflow interrupt. A host dispatcher (or a test) feeds them into
/// [`Intervalometer::dispatch`](crate::intervalometer::Intervalometer::dispatch),
/// which guarantees the two handlers exclude each other the way
/// interrupt-mask bracketing does on bare metal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A logic-level transition on either button line.
    InputChanged,

    /// One overflow of the free-running sub-second hardware timer.
    TimerTick,
}

/// What a dispatched event did to the intervalometer.
///
/// Invalid input sequencing (e.g. adjusting after arming) is not an error;
/// it is silently ignored by design, and that intent is reported as
/// [`Outcome::Ignored`] so hosts and tests can still observe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Adjust press counted; the configured unit count after wrapping.
    Adjusted {
        /// New unit count (0..=6), each unit worth 10 seconds.
        units: u8,
    },

    /// Start press armed the timelapse and fired the manual trigger.
    Armed {
        /// Locked-in interval in seconds; 0 means manual-only operation.
        interval_seconds: u16,
        /// Whether the periodic timer interrupt was enabled.
        timer_enabled: bool,
    },

    /// Start press fired a manual trigger on an already-armed device.
    Triggered,

    /// Timer tick advanced the sub-second counter.
    TickCounted,

    /// Timer tick completed a whole second.
    SecondElapsed {
        /// Seconds elapsed since the last automatic trigger.
        elapsed_seconds: u16,
    },

    /// Timer tick completed the configured interval and fired the trigger.
    IntervalElapsed,

    /// The event had no effect (bounce settled to no press, or an adjust
    /// press after arming).
    Ignored,
}
