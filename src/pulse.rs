//! Carrier-modulated pulse generation for the IR emitter.
//!
//! A protocol frame is physically nothing but bursts (runs of on/off toggles
//! at the carrier frequency) separated by dark gaps. This module provides the
//! [`IrEmitter`] hardware trait and the [`burst`]/[`gap`] primitives that the
//! protocol encoders compose frames from.

use crate::time::Delay;

/// Trait for abstracting the IR emitter output line.
///
/// Implement this for your hardware (a GPIO driving the IR LED through a
/// transistor switch, active high). Handle any hardware errors internally -
/// these methods cannot fail, because there is no feedback channel to report
/// a failed transmission over anyway.
pub trait IrEmitter {
    /// Drives the emitter line high (LED conducting).
    fn set_high(&mut self);

    /// Drives the emitter line low (LED dark).
    fn set_low(&mut self);
}

/// An IR carrier frequency, stored as its calibrated half-period.
///
/// During a burst the emitter toggles on and off once per half-period, so a
/// full carrier cycle takes twice this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Carrier {
    half_period_ns: u32,
}

impl Carrier {
    /// 32 kHz carrier (15.24 us half-period).
    pub const KHZ_32: Carrier = Carrier::from_half_period_ns(15_240);

    /// 38 kHz carrier (13.16 us half-period).
    pub const KHZ_38: Carrier = Carrier::from_half_period_ns(13_160);

    /// 38.4 kHz carrier (13.02 us half-period).
    pub const KHZ_38_4: Carrier = Carrier::from_half_period_ns(13_020);

    /// 40 kHz carrier (12.5 us half-period).
    pub const KHZ_40: Carrier = Carrier::from_half_period_ns(12_500);

    /// Creates a carrier from a half-period in nanoseconds.
    pub const fn from_half_period_ns(half_period_ns: u32) -> Self {
        Self { half_period_ns }
    }

    /// Returns the half-period in nanoseconds.
    pub const fn half_period_ns(&self) -> u32 {
        self.half_period_ns
    }
}

/// Emits `cycles` carrier cycles: on for a half-period, off for a half-period.
///
/// Cycle counts are what the camera protocols specify their bursts in, so
/// burst lengths in the encoders read directly off the protocol tables.
pub fn burst<E: IrEmitter, D: Delay>(
    emitter: &mut E,
    delay: &mut D,
    carrier: Carrier,
    cycles: u16,
) {
    for _ in 0..cycles {
        emitter.set_high();
        delay.delay_ns(carrier.half_period_ns);
        emitter.set_low();
        delay.delay_ns(carrier.half_period_ns);
    }
}

/// Holds the emitter dark for the given number of microseconds.
///
/// The emitter is already low when a burst ends; a gap is purely a timed wait.
pub fn gap<D: Delay>(delay: &mut D, micros: u32) {
    delay.delay_us(micros);
}
