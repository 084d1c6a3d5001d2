#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Intervalometer`**: The complete control logic - timelapse configuration,
//!   arming, seconds counting and shutter triggering
//! - **`Event`**: The two interrupt sources (`InputChanged`, `TimerTick`) as values
//! - **`Outcome`**: What a dispatched event did to the state machine
//! - **`Protocol`**: One stateless IR frame encoder per camera brand
//! - **`ShutterTrigger`**: Fires every configured protocol per release
//! - **`Carrier`**: A calibrated IR carrier half-period
//! - **`IrEmitter` / `StatusLed` / `InputPins`**: Traits to implement for your GPIO lines
//! - **`Delay`**: Trait to implement for your busy-wait timing
//! - **`InterruptControl`**: Trait to implement for your interrupt masking
//!
//! All protocol timing is expressed in carrier cycles and microsecond gaps so
//! the frame tables in the encoders read directly against the protocol
//! documentation. Implementations of `Delay` need nanosecond resolution
//! because carrier half-periods are fractional microseconds.

pub mod event;
pub mod indicator;
pub mod intervalometer;
pub mod protocol;
pub mod pulse;
pub mod time;
pub mod trigger;

pub use event::{Event, Outcome};
pub use indicator::{fast_flash, flash, StatusLed};
pub use intervalometer::{InputPins, Intervalometer};
pub use protocol::Protocol;
pub use pulse::{burst, gap, Carrier, IrEmitter};
pub use time::Delay;
pub use trigger::{InterruptControl, ShutterTrigger, TriggerBuilder, TriggerError};
