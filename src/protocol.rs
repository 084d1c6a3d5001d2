//! Camera shutter-release IR protocol encoders.
//!
//! Each supported camera brand gets one stateless encoder that reproduces the
//! manufacturer's remote-control frame bit-exactly: carrier frequency, burst
//! lengths in carrier cycles, and inter-burst gap durations. Encoders only
//! compose [`burst`]/[`gap`] primitives; they carry no state between
//! transmissions.
//!
//! The Canon, Sony and Minolta frame tables were never verified against
//! real hardware and are kept as-is rather than corrected. Where those
//! protocols distinguish remote buttons by command code, the code is a
//! configuration field with the known constants exposed.

use crate::pulse::{burst, gap, Carrier, IrEmitter};
use crate::time::Delay;

/// Sony command code for the shutter.
pub const SONY_CMD_SHUTTER: u8 = 0x2D;

/// Sony alternate command code (the remote's second button).
pub const SONY_CMD_ALTERNATE: u8 = 0x37;

/// Sony device address.
pub const SONY_ADDRESS: u16 = 0x1E3A;

/// Minolta command code for the shutter.
pub const MINOLTA_CMD_SHUTTER: u16 = 0x141;

/// Minolta alternate command code.
pub const MINOLTA_CMD_ALTERNATE: u16 = 0x41;

/// Minolta device address.
pub const MINOLTA_ADDRESS: u16 = 0xCA34;

/// Olympus 32-bit shutter code, transmitted MSB-first.
pub const OLYMPUS_CODE: u32 = 0x61DC_807F;

/// Fuji (NEC-style) device address.
pub const FUJI_ADDRESS: u16 = 0x30CB;

/// Fuji (NEC-style) command word: 8-bit command plus its complement.
pub const FUJI_COMMAND: u16 = 0x7E81;

/// A camera shutter-release protocol.
///
/// Each variant is an independent encoder with its own carrier frequency and
/// frame structure. Variants carrying a field select between the command
/// codes the camera's own remote distinguishes its buttons by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Protocol {
    /// Canon RC-1 style, 32 kHz. Unverified against real hardware.
    ///
    /// Two 16-cycle bursts; the gap between them distinguishes an immediate
    /// shot from a delayed shot.
    Canon {
        /// Use the delayed-shot gap instead of the immediate-shot gap.
        delayed: bool,
    },

    /// Pentax, 38 kHz. One long burst, then seven short keep-alive bursts.
    Pentax,

    /// Nikon ML-L3 style, 38.4 kHz. A four-burst frame sent twice.
    Nikon,

    /// Olympus RM-1 style, 40 kHz. Header plus a fixed 32-bit code sent
    /// MSB-first, the bit value carried by the gap before each burst.
    Olympus,

    /// Sony, 40 kHz. Unverified against real hardware.
    ///
    /// Five repetitions of start burst, 7-bit command and 13-bit address,
    /// LSB-first, the bit value carried by the burst length.
    Sony {
        /// 7-bit command code; see [`SONY_CMD_SHUTTER`] / [`SONY_CMD_ALTERNATE`].
        ///
        /// The unverified table selected this from live button levels and
        /// fell back to 0 when neither read pressed (e.g. on a timer-driven
        /// trigger); here it is fixed at configuration time.
        command: u8,
    },

    /// Minolta, 38 kHz. Unverified against real hardware.
    ///
    /// Ten repetitions of start burst, 16-bit address and 16-bit command,
    /// LSB-first, the bit value carried by the gap after each burst.
    Minolta {
        /// 16-bit command code; see [`MINOLTA_CMD_SHUTTER`] / [`MINOLTA_CMD_ALTERNATE`].
        command: u16,
    },

    /// Fuji, 38 kHz NEC-style. 16-bit address and 16-bit command with
    /// pulse-distance bit encoding, terminated by a repeat frame.
    Fuji,
}

impl Protocol {
    /// Returns the carrier frequency this protocol modulates.
    pub const fn carrier(&self) -> Carrier {
        match self {
            Protocol::Canon { .. } => Carrier::KHZ_32,
            Protocol::Pentax | Protocol::Minolta { .. } | Protocol::Fuji => Carrier::KHZ_38,
            Protocol::Nikon => Carrier::KHZ_38_4,
            Protocol::Olympus | Protocol::Sony { .. } => Carrier::KHZ_40,
        }
    }

    /// Transmits one complete frame of this protocol.
    ///
    /// No return value and no partial-failure mode: there is no feedback
    /// channel from the camera, so either the full frame goes out or (on a
    /// true hardware fault) nothing observable happens. The caller is
    /// responsible for holding interrupts off for the duration; see
    /// [`ShutterTrigger::release`](crate::trigger::ShutterTrigger::release).
    pub fn transmit<E: IrEmitter, D: Delay>(&self, emitter: &mut E, delay: &mut D) {
        match *self {
            Protocol::Canon { delayed } => transmit_canon(emitter, delay, delayed),
            Protocol::Pentax => transmit_pentax(emitter, delay),
            Protocol::Nikon => transmit_nikon(emitter, delay),
            Protocol::Olympus => transmit_olympus(emitter, delay),
            Protocol::Sony { command } => transmit_sony(emitter, delay, command),
            Protocol::Minolta { command } => transmit_minolta(emitter, delay, command),
            Protocol::Fuji => transmit_fuji(emitter, delay),
        }
    }
}

/// Canon: 16 cycles, shot-type gap, 16 cycles.
fn transmit_canon<E: IrEmitter, D: Delay>(emitter: &mut E, delay: &mut D, delayed: bool) {
    const CYCLES: u16 = 16;
    // Immediate shot 7.33 ms, delayed shot 5.36 ms.
    let gap_us = if delayed { 5_360 } else { 7_330 };

    burst(emitter, delay, Carrier::KHZ_32, CYCLES);
    gap(delay, gap_us);
    burst(emitter, delay, Carrier::KHZ_32, CYCLES);
}

/// Pentax: 494-cycle burst, 3 ms gap, then 7 x (38 cycles + 1 ms gap).
fn transmit_pentax<E: IrEmitter, D: Delay>(emitter: &mut E, delay: &mut D) {
    burst(emitter, delay, Carrier::KHZ_38, 494);
    gap(delay, 3_000);

    for _ in 0..7 {
        burst(emitter, delay, Carrier::KHZ_38, 38);
        gap(delay, 1_000);
    }
}

/// Nikon: a four-burst frame sent twice, with an extra 63.2 ms pause after
/// the first repetition only.
fn transmit_nikon<E: IrEmitter, D: Delay>(emitter: &mut E, delay: &mut D) {
    for repetition in 0..2 {
        burst(emitter, delay, Carrier::KHZ_38_4, 77);
        gap(delay, 27_830);
        burst(emitter, delay, Carrier::KHZ_38_4, 15);
        gap(delay, 1_580);
        burst(emitter, delay, Carrier::KHZ_38_4, 16);
        gap(delay, 3_580);
        burst(emitter, delay, Carrier::KHZ_38_4, 16);

        if repetition == 0 {
            gap(delay, 63_200);
        }
    }
}

/// Olympus: 152 + 22 cycle header, 4 ms gap, then the fixed 32-bit code
/// MSB-first. Each bit is a gap followed by a 20-cycle burst; the gap length
/// carries the bit value (1.5 ms = 1, 500 us = 0).
fn transmit_olympus<E: IrEmitter, D: Delay>(emitter: &mut E, delay: &mut D) {
    burst(emitter, delay, Carrier::KHZ_40, 152);
    burst(emitter, delay, Carrier::KHZ_40, 22);
    gap(delay, 4_000);

    let mut mask: u32 = 0x8000_0000;
    for _ in 0..32 {
        if OLYMPUS_CODE & mask != 0 {
            gap(delay, 1_500);
        } else {
            gap(delay, 500);
        }
        burst(emitter, delay, Carrier::KHZ_40, 20);
        mask >>= 1;
    }
}

/// Sony: 5 x (96-cycle start, 640 us gap, 7 command bits, 13 address bits,
/// 11 ms trailer). Bits go LSB-first; a set bit is a 48-cycle burst, a clear
/// bit 24 cycles, each followed by a 640 us gap.
fn transmit_sony<E: IrEmitter, D: Delay>(emitter: &mut E, delay: &mut D, command: u8) {
    fn send_bits<E: IrEmitter, D: Delay>(emitter: &mut E, delay: &mut D, word: u16, count: u8) {
        let mut mask: u16 = 1;
        for _ in 0..count {
            let cycles = if word & mask != 0 { 48 } else { 24 };
            burst(emitter, delay, Carrier::KHZ_40, cycles);
            gap(delay, 640);
            mask <<= 1;
        }
    }

    for _ in 0..5 {
        burst(emitter, delay, Carrier::KHZ_40, 96);
        gap(delay, 640);
        send_bits(emitter, delay, command as u16, 7);
        send_bits(emitter, delay, SONY_ADDRESS, 13);
        gap(delay, 11_000);
    }
}

/// Minolta: 10 x (144-cycle start, 1.89 ms gap, 16 address bits, 16 command
/// bits, 18-cycle stop, 9.2 ms trailer). Each bit is an 18-cycle burst whose
/// trailing gap carries the value (1430 us = 1, 487 us = 0), LSB-first.
fn transmit_minolta<E: IrEmitter, D: Delay>(emitter: &mut E, delay: &mut D, command: u16) {
    fn send_bits<E: IrEmitter, D: Delay>(emitter: &mut E, delay: &mut D, word: u16) {
        let mut mask: u16 = 1;
        for _ in 0..16 {
            burst(emitter, delay, Carrier::KHZ_38, 18);
            if word & mask != 0 {
                gap(delay, 1_430);
            } else {
                gap(delay, 487);
            }
            mask <<= 1;
        }
    }

    for _ in 0..10 {
        burst(emitter, delay, Carrier::KHZ_38, 144);
        gap(delay, 1_890);

        send_bits(emitter, delay, MINOLTA_ADDRESS);
        send_bits(emitter, delay, command);

        burst(emitter, delay, Carrier::KHZ_38, 18);
        gap(delay, 9_200);
    }
}

/// Fuji: NEC framing. Double 171-cycle start mark (~9 ms), 4.5 ms gap,
/// 16 address bits and 16 command bits LSB-first (22-cycle burst, gap of
/// 1650 us = 1 / 560 us = 0), stop burst, 41 ms pause, then the terminating
/// repeat frame: double start mark, 2.2 ms gap, stop burst.
fn transmit_fuji<E: IrEmitter, D: Delay>(emitter: &mut E, delay: &mut D) {
    fn start_mark<E: IrEmitter, D: Delay>(emitter: &mut E, delay: &mut D) {
        // Two back-to-back bursts to reach the ~9 ms NEC leader mark.
        burst(emitter, delay, Carrier::KHZ_38, 171);
        burst(emitter, delay, Carrier::KHZ_38, 171);
    }

    fn send_bits<E: IrEmitter, D: Delay>(emitter: &mut E, delay: &mut D, word: u16) {
        let mut mask: u16 = 1;
        for _ in 0..16 {
            burst(emitter, delay, Carrier::KHZ_38, 22);
            if word & mask != 0 {
                gap(delay, 1_650);
            } else {
                gap(delay, 560);
            }
            mask <<= 1;
        }
    }

    start_mark(emitter, delay);
    gap(delay, 4_500);

    send_bits(emitter, delay, FUJI_ADDRESS);
    send_bits(emitter, delay, FUJI_COMMAND);

    // Stop bit.
    burst(emitter, delay, Carrier::KHZ_38, 22);
    gap(delay, 41_000);

    // Terminating repeat frame.
    start_mark(emitter, delay);
    gap(delay, 2_200);
    burst(emitter, delay, Carrier::KHZ_38, 22);
}
