//! Shutter triggering across the configured protocol set.
//!
//! Provides [`ShutterTrigger`] which fires every configured camera protocol
//! in order on each release, and the [`InterruptControl`] trait used to hold
//! interrupts off while a latency-sensitive pulse train goes out.

use crate::protocol::Protocol;
use crate::pulse::IrEmitter;
use crate::time::Delay;
use heapless::Vec;

/// Trait for abstracting the interrupt mask of the host platform.
///
/// The transmission of an IR frame is latency-sensitive; a pulse train that
/// gets preempted mid-burst desynchronizes the demodulator in the camera.
/// [`ShutterTrigger::release`] brackets every transmission in
/// `disable`/`enable`, and the intervalometer brackets its event handlers the
/// same way so the two interrupt sources cannot observe each other's
/// half-finished state.
///
/// On bare metal this maps to the global interrupt-enable flag and the timer
/// interrupt mask; in a threaded simulation a mutex held for the bracketed
/// duration gives the same guarantee.
pub trait InterruptControl {
    /// Masks all interrupt sources.
    fn disable(&mut self);

    /// Unmasks interrupt sources masked by `disable`.
    fn enable(&mut self);

    /// Unmasks the periodic timer interrupt.
    ///
    /// The timer source starts masked at power-on and is only ever unmasked
    /// once a nonzero timelapse interval has been armed, so a device used as
    /// a plain manual remote never wakes for timer ticks.
    fn enable_timer(&mut self);
}

/// Errors that can occur while building a trigger configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerError {
    /// No protocols were configured; a release would transmit nothing.
    EmptyProtocolSet,

    /// More protocols were added than the trigger's capacity `N`.
    CapacityExceeded,
}

impl core::fmt::Display for TriggerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TriggerError::EmptyProtocolSet => {
                write!(f, "trigger must have at least one protocol configured")
            }
            TriggerError::CapacityExceeded => {
                write!(f, "protocol set capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TriggerError {}

/// Fires the camera shutter by transmitting every configured protocol.
///
/// The protocol set is fixed at construction time; there is no runtime
/// reconfiguration. A device configured for two camera brands fires both
/// encodings back-to-back on every trigger, which roughly doubles trigger
/// latency and energy cost but needs no runtime branching.
///
/// # Type Parameters
/// * `N` - Maximum number of protocols in the set
#[derive(Debug, Clone)]
pub struct ShutterTrigger<const N: usize> {
    protocols: Vec<Protocol, N>,
}

impl<const N: usize> ShutterTrigger<N> {
    /// Creates a new trigger builder.
    pub fn builder() -> TriggerBuilder<N> {
        TriggerBuilder::new()
    }

    /// Transmits one complete frame of every configured protocol, in the
    /// order they were added.
    ///
    /// Interrupts are held off for the whole duration: either the full pulse
    /// train of every protocol goes out, or (on a true hardware fault)
    /// nothing observable happens. There is no feedback channel from the
    /// camera, so there is nothing to return.
    pub fn release<E: IrEmitter, D: Delay, Q: InterruptControl>(
        &self,
        emitter: &mut E,
        delay: &mut D,
        irq: &mut Q,
    ) {
        irq.disable();

        for protocol in &self.protocols {
            protocol.transmit(emitter, delay);
        }

        irq.enable();
    }

    /// Returns the configured protocols in firing order.
    pub fn protocols(&self) -> &[Protocol] {
        &self.protocols
    }
}

/// Builder for a validated protocol set.
#[derive(Debug)]
pub struct TriggerBuilder<const N: usize> {
    protocols: Vec<Protocol, N>,
    overflowed: bool,
}

impl<const N: usize> TriggerBuilder<N> {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self {
            protocols: Vec::new(),
            overflowed: false,
        }
    }

    /// Adds a protocol to the set. Order of addition is firing order.
    pub fn protocol(mut self, protocol: Protocol) -> Self {
        if self.protocols.push(protocol).is_err() {
            self.overflowed = true;
        }
        self
    }

    /// Builds and validates the trigger configuration.
    ///
    /// # Errors
    /// * `EmptyProtocolSet` - No protocols were added
    /// * `CapacityExceeded` - More than `N` protocols were added
    pub fn build(self) -> Result<ShutterTrigger<N>, TriggerError> {
        if self.overflowed {
            return Err(TriggerError::CapacityExceeded);
        }

        if self.protocols.is_empty() {
            return Err(TriggerError::EmptyProtocolSet);
        }

        Ok(ShutterTrigger {
            protocols: self.protocols,
        })
    }
}

impl<const N: usize> Default for TriggerBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
