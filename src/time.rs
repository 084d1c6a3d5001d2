//! Busy-wait delay abstraction for platform-agnostic timing.

/// Trait for abstracting blocking delays.
///
/// Every timed wait in the library goes through this trait: carrier
/// half-periods, inter-burst gaps, debounce settling and LED duty cycles.
/// On real hardware this is a calibrated spin loop; in tests it can advance
/// a virtual clock instead of blocking.
///
/// The primitive is nanoseconds because IR carrier half-periods are
/// fractional microseconds (e.g. 13.16 us for a 38 kHz carrier).
pub trait Delay {
    /// Blocks for at least the given number of nanoseconds.
    fn delay_ns(&mut self, ns: u32);

    /// Blocks for at least the given number of microseconds.
    fn delay_us(&mut self, us: u32) {
        self.delay_ns(us.saturating_mul(1_000));
    }

    /// Blocks for at least the given number of milliseconds.
    ///
    /// Chunked internally so long waits cannot overflow the nanosecond
    /// primitive (u32 nanoseconds caps out at ~4.29 s).
    fn delay_ms(&mut self, ms: u32) {
        let mut remaining = ms;
        while remaining > 1_000 {
            self.delay_ns(1_000_000_000);
            remaining -= 1_000;
        }
        self.delay_ns(remaining * 1_000_000);
    }
}
