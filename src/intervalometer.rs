//! The intervalometer state machine.
//!
//! Provides [`Intervalometer`] which owns the whole persistent state of the
//! device and turns the two interrupt sources (button pin-change, periodic
//! timer overflow) into timelapse configuration, arming and shutter
//! triggering. On bare metal each interrupt service routine forwards its
//! event into [`Intervalometer::dispatch`]; in a simulation or test a
//! single-threaded loop does the same.

use crate::event::{Event, Outcome};
use crate::indicator::{fast_flash, flash, StatusLed};
use crate::pulse::IrEmitter;
use crate::time::Delay;
use crate::trigger::{InterruptControl, ShutterTrigger};

/// Settle time after a button edge before the lines are re-sampled.
pub const DEBOUNCE_MS: u32 = 50;

/// Additional settle time on the start button, filtering accidental taps.
pub const START_SETTLE_MS: u32 = 250;

/// Timer overflows per counted second. The sub-second counter rolls over
/// when it exceeds this value; calibrated for a free-running 8-bit timer
/// behind a clk/1024 prescaler.
pub const TICKS_PER_SECOND: u8 = 30;

/// Sub-second counter value at which the main loop's heartbeat poll flashes.
pub const HEARTBEAT_POLL_TICK: u8 = 10;

/// Largest configurable unit count. Capping at six keeps the interval at or
/// below 60 seconds, inside a typical camera's power-save timeout.
pub const MAX_LAPSE_UNITS: u8 = 6;

/// Seconds of interval time per adjust-button press.
pub const SECONDS_PER_UNIT: u16 = 10;

/// Trait for abstracting the two button input lines.
///
/// Both lines are pulled high and read low while pressed. The handler
/// re-samples them through this trait after the debounce settle, so
/// implementations must return the live level, not a latched one.
pub trait InputPins {
    /// Returns true while the start/trigger button line reads low.
    fn start_pressed(&self) -> bool;

    /// Returns true while the adjust button line reads low.
    fn adjust_pressed(&self) -> bool;
}

/// The complete control logic of the camera remote.
///
/// Owns the hardware seams (pins, emitter, LED, delay, interrupt control)
/// and every field of the device's persistent state. There are no globals
/// and no heap; all configuration resets with the value, the way the
/// device's state dies with power-off.
///
/// Field ownership follows a single-writer discipline: `lapse_units`,
/// `armed` and `interval_seconds` are written only by the input handler,
/// `second_tick` and `elapsed_seconds` only by the tick handler. The tick
/// handler reads `interval_seconds` but never writes it, so the two event
/// sources share no writable field.
///
/// # Type Parameters
/// * `P` - Button pins implementation
/// * `E` - IR emitter implementation
/// * `L` - Status LED implementation
/// * `D` - Delay implementation
/// * `Q` - Interrupt control implementation
/// * `N` - Maximum number of protocols in the trigger set
pub struct Intervalometer<P, E, L, D, Q, const N: usize>
where
    P: InputPins,
    E: IrEmitter,
    L: StatusLed,
    D: Delay,
    Q: InterruptControl,
{
    pins: P,
    emitter: E,
    led: L,
    delay: D,
    irq: Q,
    trigger: ShutterTrigger<N>,

    lapse_units: u8,
    armed: bool,
    interval_seconds: u16,
    second_tick: u8,
    elapsed_seconds: u16,
}

impl<P, E, L, D, Q, const N: usize> Intervalometer<P, E, L, D, Q, N>
where
    P: InputPins,
    E: IrEmitter,
    L: StatusLed,
    D: Delay,
    Q: InterruptControl,
{
    /// Creates a new intervalometer with all state zeroed, as at power-on.
    ///
    /// The timer interrupt stays masked until a nonzero interval is armed.
    pub fn new(pins: P, emitter: E, led: L, delay: D, irq: Q, trigger: ShutterTrigger<N>) -> Self {
        Self {
            pins,
            emitter,
            led,
            delay,
            irq,
            trigger,
            lapse_units: 0,
            armed: false,
            interval_seconds: 0,
            second_tick: 0,
            elapsed_seconds: 0,
        }
    }

    /// Emits the power-on acknowledgment: two feedback flashes.
    ///
    /// Call once from the main loop after hardware init, before enabling
    /// interrupts.
    pub fn startup(&mut self) {
        flash(&mut self.led, &mut self.delay, 2);
    }

    /// Dispatches one hardware event into the state machine.
    ///
    /// Interrupts are held off for the handler's whole duration, so the two
    /// event sources are atomic with respect to each other and to the main
    /// loop. A timer tick can thereby be delayed for the duration of a
    /// debounce settle; seconds counting tolerates that bounded delay.
    pub fn dispatch(&mut self, event: Event) -> Outcome {
        self.irq.disable();

        let outcome = match event {
            Event::InputChanged => self.handle_input(),
            Event::TimerTick => self.handle_tick(),
        };

        self.irq.enable();
        outcome
    }

    /// Pin-change handler: debounce, classify, drive the configuration and
    /// trigger state machine.
    fn handle_input(&mut self) -> Outcome {
        self.delay.delay_ms(DEBOUNCE_MS);

        // Start button wins on a simultaneous press; it is checked first.
        if self.pins.start_pressed() {
            self.delay.delay_ms(START_SETTLE_MS);

            if !self.armed {
                // One-way latch: the configured interval is locked in for
                // the rest of the power cycle.
                self.armed = true;
                flash(&mut self.led, &mut self.delay, self.lapse_units);
                self.interval_seconds = u16::from(self.lapse_units) * SECONDS_PER_UNIT;

                let timer_enabled = self.interval_seconds > 0;
                if timer_enabled {
                    self.irq.enable_timer();
                }

                self.trigger
                    .release(&mut self.emitter, &mut self.delay, &mut self.irq);

                Outcome::Armed {
                    interval_seconds: self.interval_seconds,
                    timer_enabled,
                }
            } else {
                // Manual "take a picture now", independent of arming.
                self.trigger
                    .release(&mut self.emitter, &mut self.delay, &mut self.irq);
                Outcome::Triggered
            }
        } else if self.pins.adjust_pressed() {
            if self.armed {
                return Outcome::Ignored;
            }

            self.lapse_units += 1;
            if self.lapse_units > MAX_LAPSE_UNITS {
                self.lapse_units = 0;
            }
            flash(&mut self.led, &mut self.delay, 1);

            Outcome::Adjusted {
                units: self.lapse_units,
            }
        } else {
            // Bounce settled with neither line still low.
            Outcome::Ignored
        }
    }

    /// Timer-overflow handler: accumulate seconds, fire on interval.
    fn handle_tick(&mut self) -> Outcome {
        self.second_tick += 1;

        if self.second_tick > TICKS_PER_SECOND {
            self.second_tick = 0;
            self.elapsed_seconds += 1;

            if self.elapsed_seconds == self.interval_seconds {
                self.trigger
                    .release(&mut self.emitter, &mut self.delay, &mut self.irq);
                self.elapsed_seconds = 0;
                return Outcome::IntervalElapsed;
            }

            return Outcome::SecondElapsed {
                elapsed_seconds: self.elapsed_seconds,
            };
        }

        Outcome::TickCounted
    }

    /// Main-loop liveness indicator: one fast flash when the sub-second
    /// counter sits at the poll point.
    ///
    /// Best-effort by design; the read races with the tick handler and may
    /// observe a stale value, which costs at most one skipped or repeated
    /// heartbeat flash. It gates no state transition. Returns whether a
    /// flash was emitted.
    pub fn poll_heartbeat(&mut self) -> bool {
        if self.second_tick == HEARTBEAT_POLL_TICK {
            fast_flash(&mut self.led, &mut self.delay, 1);
            return true;
        }
        false
    }

    /// Returns the configured unit count (0..=6).
    pub fn lapse_units(&self) -> u8 {
        self.lapse_units
    }

    /// Returns true once the start button has locked in the configuration.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns the locked-in interval in seconds; 0 means manual-only.
    pub fn interval_seconds(&self) -> u16 {
        self.interval_seconds
    }

    /// Returns the sub-second tick counter.
    pub fn second_tick(&self) -> u8 {
        self.second_tick
    }

    /// Returns whole seconds elapsed since the last automatic trigger.
    pub fn elapsed_seconds(&self) -> u16 {
        self.elapsed_seconds
    }

    /// Returns the configured shutter trigger.
    pub fn trigger(&self) -> &ShutterTrigger<N> {
        &self.trigger
    }
}
