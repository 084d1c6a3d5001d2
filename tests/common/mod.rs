//! Shared test infrastructure for ir-intervalometer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use ir_intervalometer::{
    Delay, Event, InputPins, InterruptControl, Intervalometer, IrEmitter, Outcome, ShutterTrigger,
    StatusLed,
};

// ============================================================================
// Recorder - virtual clock plus signal capture
// ============================================================================

/// One logic-level transition on a recorded output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Virtual-clock timestamp of the transition.
    pub at_ns: u64,
    /// Level after the transition.
    pub high: bool,
    /// Whether interrupts were masked when the transition happened.
    pub irq_masked: bool,
}

/// Central test fixture: a virtual clock that the mock delay advances, with
/// capture buffers for the IR emitter and status LED lines and controllable
/// button levels.
///
/// All mocks borrow the recorder, so a test can inspect captured signals
/// while the device under test still owns its hardware mocks.
pub struct Recorder {
    clock_ns: Cell<u64>,
    ir_edges: RefCell<Vec<Edge>>,
    led_edges: RefCell<Vec<Edge>>,
    start_pressed: Cell<bool>,
    adjust_pressed: Cell<bool>,
    irq_masked: Cell<bool>,
    timer_enabled: Cell<bool>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            clock_ns: Cell::new(0),
            ir_edges: RefCell::new(Vec::new()),
            led_edges: RefCell::new(Vec::new()),
            start_pressed: Cell::new(false),
            adjust_pressed: Cell::new(false),
            irq_masked: Cell::new(false),
            timer_enabled: Cell::new(false),
        }
    }

    /// Current virtual-clock reading in nanoseconds.
    pub fn now_ns(&self) -> u64 {
        self.clock_ns.get()
    }

    /// All IR emitter transitions captured so far.
    pub fn ir_edges(&self) -> Vec<Edge> {
        self.ir_edges.borrow().clone()
    }

    /// All status LED transitions captured so far.
    pub fn led_edges(&self) -> Vec<Edge> {
        self.led_edges.borrow().clone()
    }

    /// Discards captured transitions, keeping the clock running.
    pub fn clear_captures(&self) {
        self.ir_edges.borrow_mut().clear();
        self.led_edges.borrow_mut().clear();
    }

    /// Whether the periodic timer interrupt has been unmasked.
    pub fn timer_enabled(&self) -> bool {
        self.timer_enabled.get()
    }

    fn record(&self, buffer: &RefCell<Vec<Edge>>, high: bool) {
        buffer.borrow_mut().push(Edge {
            at_ns: self.clock_ns.get(),
            high,
            irq_masked: self.irq_masked.get(),
        });
    }
}

// ============================================================================
// Hardware mocks
// ============================================================================

/// Delay that advances the recorder's virtual clock instead of blocking.
pub struct MockDelay<'a>(pub &'a Recorder);

impl Delay for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        let now = self.0.clock_ns.get();
        self.0.clock_ns.set(now + u64::from(ns));
    }
}

/// IR emitter that records every edge with a timestamp.
pub struct MockEmitter<'a>(pub &'a Recorder);

impl IrEmitter for MockEmitter<'_> {
    fn set_high(&mut self) {
        self.0.record(&self.0.ir_edges, true);
    }

    fn set_low(&mut self) {
        self.0.record(&self.0.ir_edges, false);
    }
}

/// Status LED that records every edge with a timestamp.
pub struct MockLed<'a>(pub &'a Recorder);

impl StatusLed for MockLed<'_> {
    fn set_high(&mut self) {
        self.0.record(&self.0.led_edges, true);
    }

    fn set_low(&mut self) {
        self.0.record(&self.0.led_edges, false);
    }
}

/// Button lines driven by the recorder's controllable levels.
pub struct MockPins<'a>(pub &'a Recorder);

impl InputPins for MockPins<'_> {
    fn start_pressed(&self) -> bool {
        self.0.start_pressed.get()
    }

    fn adjust_pressed(&self) -> bool {
        self.0.adjust_pressed.get()
    }
}

/// Interrupt mask tracked as recorder state so edge captures can tell
/// whether a transmission ran with interrupts held off.
pub struct MockIrq<'a>(pub &'a Recorder);

impl InterruptControl for MockIrq<'_> {
    fn disable(&mut self) {
        self.0.irq_masked.set(true);
    }

    fn enable(&mut self) {
        self.0.irq_masked.set(false);
    }

    fn enable_timer(&mut self) {
        self.0.timer_enabled.set(true);
    }
}

// ============================================================================
// Device construction and event helpers
// ============================================================================

pub type TestDevice<'a, const N: usize> =
    Intervalometer<MockPins<'a>, MockEmitter<'a>, MockLed<'a>, MockDelay<'a>, MockIrq<'a>, N>;

/// Builds an intervalometer wired entirely to recorder-backed mocks.
pub fn device<const N: usize>(recorder: &Recorder, trigger: ShutterTrigger<N>) -> TestDevice<'_, N> {
    Intervalometer::new(
        MockPins(recorder),
        MockEmitter(recorder),
        MockLed(recorder),
        MockDelay(recorder),
        MockIrq(recorder),
        trigger,
    )
}

/// Presses and releases the start button through one pin-change event.
pub fn press_start<const N: usize>(recorder: &Recorder, device: &mut TestDevice<'_, N>) -> Outcome {
    recorder.start_pressed.set(true);
    let outcome = device.dispatch(Event::InputChanged);
    recorder.start_pressed.set(false);
    outcome
}

/// Presses and releases the adjust button through one pin-change event.
pub fn press_adjust<const N: usize>(recorder: &Recorder, device: &mut TestDevice<'_, N>) -> Outcome {
    recorder.adjust_pressed.set(true);
    let outcome = device.dispatch(Event::InputChanged);
    recorder.adjust_pressed.set(false);
    outcome
}

// ============================================================================
// Pulse-train analysis
// ============================================================================

/// A decoded burst: a run of carrier cycles plus the dark time to the next
/// burst (0 for the final burst of a capture).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Burst {
    pub cycles: usize,
    pub gap_after_ns: u64,
}

/// On-edge spacing above this is a burst boundary. The widest carrier cycle
/// is ~30.5 us (32 kHz) and the narrowest protocol gap is 487 us, so any
/// threshold between those works.
const BURST_BOUNDARY_NS: u64 = 100_000;

/// Groups recorded emitter edges into bursts and inter-burst gaps.
///
/// Back-to-back bursts with no gap between them (e.g. the NEC double start
/// mark) merge into one physical burst, which is what a receiver sees.
pub fn bursts(edges: &[Edge]) -> Vec<Burst> {
    let mut result = Vec::new();
    let mut cycles = 0usize;
    let mut last_on: Option<u64> = None;
    let mut last_off = 0u64;

    for edge in edges {
        if edge.high {
            if let Some(previous) = last_on {
                if edge.at_ns - previous > BURST_BOUNDARY_NS {
                    result.push(Burst {
                        cycles,
                        gap_after_ns: edge.at_ns - last_off,
                    });
                    cycles = 0;
                }
            }
            cycles += 1;
            last_on = Some(edge.at_ns);
        } else {
            last_off = edge.at_ns;
        }
    }

    if cycles > 0 {
        result.push(Burst {
            cycles,
            gap_after_ns: 0,
        });
    }

    result
}

/// Measured half-period of the first carrier cycle in a capture.
pub fn first_half_period_ns(edges: &[Edge]) -> u64 {
    assert!(edges.len() >= 2, "capture holds no complete carrier cycle");
    assert!(edges[0].high && !edges[1].high);
    edges[1].at_ns - edges[0].at_ns
}

/// Counts LED flashes (on-edges) in a capture.
pub fn led_flash_count(edges: &[Edge]) -> usize {
    edges.iter().filter(|e| e.high).count()
}

/// On-time in nanoseconds of the `index`-th LED flash.
pub fn led_flash_on_ns(edges: &[Edge], index: usize) -> u64 {
    let ons: Vec<&Edge> = edges.iter().filter(|e| e.high).collect();
    let offs: Vec<&Edge> = edges.iter().filter(|e| !e.high).collect();
    offs[index].at_ns - ons[index].at_ns
}
