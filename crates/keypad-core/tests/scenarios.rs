//! End-to-end flows over the whole engine with scripted hardware.

use keypad_core::{
    Engine, KeyCode, KeyEvent, MockDelay, MockHost, MockIlluminator, MockKeyboard, ScriptedMatrix,
};

struct Pad {
    engine: Engine,
    matrix: ScriptedMatrix,
    keyboard: MockKeyboard,
    host: MockHost,
    illum: MockIlluminator,
    delay: MockDelay,
}

impl Pad {
    fn new() -> Self {
        Self {
            engine: Engine::new(),
            matrix: ScriptedMatrix::new(),
            keyboard: MockKeyboard::new(),
            host: MockHost::new(),
            illum: MockIlluminator::new(),
            delay: MockDelay::new(),
        }
    }

    fn poll(&mut self) {
        self.engine.poll(
            &mut self.matrix,
            &mut self.keyboard,
            &mut self.host,
            &mut self.illum,
            &mut self.delay,
        );
    }
}

#[test]
fn single_key_macro_end_to_end() {
    let mut pad = Pad::new();
    pad.host
        .push_line(r#"{"keys": {"a1": "X"}, "symbols": {"X": "F9"}}"#);

    // Two consecutive sweeps agree while the stable set is empty.
    pad.matrix.push_scan(&["a1"]);
    pad.matrix.push_scan(&["a1"]);
    pad.poll();
    pad.poll();

    assert_eq!(
        pad.keyboard.events,
        [
            KeyEvent::Press(KeyCode::F9),
            KeyEvent::Release(KeyCode::F9)
        ]
    );
    // Tap hold interval sat between press and release.
    assert!(pad.delay.sleeps_ms().contains(&keypad_core::TAP_HOLD_MS));
}

#[test]
fn hold_macro_spans_press_and_release_cycles() {
    let mut pad = Pad::new();
    pad.host
        .push_line(r#"{"keys": {"b2": "\\S"}, "symbols": {"\\S": "LEFT_SHIFT"}}"#);

    pad.matrix.push_scan(&["b2"]);
    pad.matrix.push_scan(&["b2"]);
    pad.poll();
    pad.poll();
    assert_eq!(pad.keyboard.events, [KeyEvent::Press(KeyCode::LShift)]);

    // Key goes away; two agreeing empty sweeps commit the release.
    pad.matrix.push_scan(&[]);
    pad.matrix.push_scan(&[]);
    pad.poll();
    pad.poll();
    assert_eq!(
        pad.keyboard.events,
        [
            KeyEvent::Press(KeyCode::LShift),
            KeyEvent::Release(KeyCode::LShift),
            KeyEvent::ReleaseAll,
        ]
    );
}

#[test]
fn chord_emits_host_message_once() {
    let mut pad = Pad::new();
    pad.host
        .push_line(r#"{"keys": {"a1-b2": "MSG:OPEN:mail"}}"#);

    pad.matrix.push_scan(&["b2", "a1"]);
    pad.matrix.push_scan(&["a1", "b2"]);
    pad.poll();
    pad.poll();

    assert_eq!(
        pad.host.sent,
        [r#"{"key":"a1-b2","code":"OPEN:mail","pressed":true}"#]
    );
    assert!(pad.keyboard.events.is_empty());

    // Releasing the chord does not repeat the message.
    pad.matrix.push_scan(&[]);
    pad.matrix.push_scan(&[]);
    pad.poll();
    pad.poll();
    assert_eq!(pad.host.sent.len(), 1);
}

#[test]
fn transient_sweep_reaches_nothing() {
    let mut pad = Pad::new();
    pad.host
        .push_line(r#"{"keys": {"a1": "X"}, "symbols": {"X": "F9"}}"#);

    // One noisy sweep, gone again on the next: no events, ever.
    pad.matrix.push_scan(&["a1"]);
    pad.matrix.push_scan(&[]);
    pad.matrix.push_scan(&[]);
    for _ in 0..4 {
        pad.poll();
    }
    assert!(pad.keyboard.events.is_empty());
    assert!(pad.host.sent.is_empty());
}

#[test]
fn reconfiguration_lands_between_dispatch_cycles() {
    let mut pad = Pad::new();
    pad.host
        .push_line(r#"{"keys": {"a1": "X"}, "symbols": {"X": "F1"}}"#);
    pad.matrix.push_scan(&["a1"]);
    pad.matrix.push_scan(&["a1"]);
    pad.poll();

    // Arrives while a1 is mid-confirmation; applied at the top of the next
    // iteration, so that iteration dispatches against the new table.
    pad.host
        .push_line(r#"{"keys": {"a1": "Y"}, "symbols": {"Y": "F2"}}"#);
    pad.poll();

    assert_eq!(
        pad.keyboard.events,
        [
            KeyEvent::Press(KeyCode::F2),
            KeyEvent::Release(KeyCode::F2)
        ]
    );
}
