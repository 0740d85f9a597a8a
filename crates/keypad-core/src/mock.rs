//! Recording test doubles for the engine's collaborators.
//!
//! These allow the loop, dispatcher and interpreter to be exercised on the
//! host with the exact call sequences asserted. They live in the crate
//! (not behind `cfg(test)`) so integration tests and the simulator can use
//! them too.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use embedded_hal::delay::DelayNs;

use mux_matrix::{KeySlot, RawScan};

use crate::engine::ScanSource;
use crate::host::HostLink;
use crate::illum::{ColorTable, Illuminator};
use crate::keyboard::Keyboard;
use crate::keycode::KeyCode;

/// Error type used by mocks that are scripted to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl core::fmt::Display for MockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "scripted mock failure")
    }
}

impl core::error::Error for MockError {}

/// One recorded keyboard call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Press(KeyCode),
    Release(KeyCode),
    ReleaseAll,
}

/// Keyboard that records every call; can be scripted to fail on press.
#[derive(Debug, Default)]
pub struct MockKeyboard {
    pub events: Vec<KeyEvent>,
    pub fail_on_press: bool,
}

impl MockKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn release_all_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| **event == KeyEvent::ReleaseAll)
            .count()
    }
}

impl Keyboard for MockKeyboard {
    type Error = MockError;

    fn press(&mut self, key: KeyCode) -> Result<(), Self::Error> {
        if self.fail_on_press {
            return Err(MockError);
        }
        self.events.push(KeyEvent::Press(key));
        Ok(())
    }

    fn release(&mut self, key: KeyCode) -> Result<(), Self::Error> {
        self.events.push(KeyEvent::Release(key));
        Ok(())
    }

    fn release_all(&mut self) -> Result<(), Self::Error> {
        self.events.push(KeyEvent::ReleaseAll);
        Ok(())
    }
}

/// Host link backed by queues.
#[derive(Debug, Default)]
pub struct MockHost {
    pub inbound: VecDeque<String>,
    pub sent: Vec<String>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) {
        self.inbound.push_back(String::from(line));
    }
}

impl HostLink for MockHost {
    type Error = MockError;

    fn poll_line(&mut self) -> Option<String> {
        self.inbound.pop_front()
    }

    fn send_line(&mut self, line: &str) -> Result<(), Self::Error> {
        self.sent.push(String::from(line));
        Ok(())
    }
}

/// Illuminator that keeps every painted table.
#[derive(Debug, Default)]
pub struct MockIlluminator {
    pub painted: Vec<ColorTable>,
}

impl MockIlluminator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Illuminator for MockIlluminator {
    type Error = MockError;

    fn paint(&mut self, colors: &ColorTable) -> Result<(), Self::Error> {
        self.painted.push(colors.clone());
        Ok(())
    }
}

/// Delay that records instead of sleeping. Values are normalized to
/// nanoseconds as they arrive.
#[derive(Debug, Default)]
pub struct MockDelay {
    pub sleeps_ns: Vec<u64>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded sleeps converted to whole milliseconds, sub-millisecond
    /// waits dropped.
    pub fn sleeps_ms(&self) -> Vec<u32> {
        self.sleeps_ns
            .iter()
            .filter(|ns| **ns >= 1_000_000)
            .map(|ns| (ns / 1_000_000) as u32)
            .collect()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.sleeps_ns.push(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.sleeps_ns.push(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.sleeps_ns.push(u64::from(ms) * 1_000_000);
    }
}

/// Scan source that replays a scripted sequence of raw scans, then keeps
/// returning the final entry.
#[derive(Debug, Default)]
pub struct ScriptedMatrix {
    scans: VecDeque<RawScan>,
    last: RawScan,
    pub fail_next: bool,
}

impl ScriptedMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_scan(&mut self, slots: &[KeySlot]) {
        self.scans.push_back(slots.to_vec());
    }
}

impl ScanSource for ScriptedMatrix {
    type Error = MockError;

    fn scan(&mut self, _delay: &mut impl DelayNs) -> Result<RawScan, Self::Error> {
        if self.fail_next {
            self.fail_next = false;
            return Err(MockError);
        }
        if let Some(scan) = self.scans.pop_front() {
            self.last = scan;
        }
        Ok(self.last.clone())
    }
}
