//! Status LED feedback routines.

use crate::time::Delay;

/// On/off duty cycle of a feedback flash in milliseconds.
pub const FLASH_MS: u32 = 250;

/// On time of a heartbeat flash in milliseconds. There is no explicit off
/// delay; the interval to the next flash comes from the caller's cadence.
pub const FAST_FLASH_MS: u32 = 20;

/// Trait for abstracting the status LED output line.
///
/// Implement this for your hardware (a GPIO driving the indicator LED,
/// active high). These methods cannot fail; handle hardware errors
/// internally.
pub trait StatusLed {
    /// Turns the LED on.
    fn set_high(&mut self);

    /// Turns the LED off.
    fn set_low(&mut self);
}

/// Flashes the LED `count` times at a 250 ms on / 250 ms off duty cycle.
///
/// Blocking. Used for configuration feedback: one flash per configured
/// 10-second timelapse unit, one flash per adjust press, two at power-on.
pub fn flash<L: StatusLed, D: Delay>(led: &mut L, delay: &mut D, count: u8) {
    for _ in 0..count {
        led.set_high();
        delay.delay_ms(FLASH_MS);
        led.set_low();
        delay.delay_ms(FLASH_MS);
    }
}

/// Flashes the LED `count` times with a 20 ms on time and no off delay.
///
/// Blocking. Used for the once-per-second "timelapse alive" heartbeat.
pub fn fast_flash<L: StatusLed, D: Delay>(led: &mut L, delay: &mut D, count: u8) {
    for _ in 0..count {
        led.set_high();
        delay.delay_ms(FAST_FLASH_MS);
        led.set_low();
    }
}
