//! Stroke string interpreter.
//!
//! A stroke string is consumed left to right with a single bit of carried
//! state: whether the previous character was the escape marker. Unescaped
//! characters tap their mapped key. Escaped characters change the release
//! behavior by case: non-lowercase holds the key across the press and
//! release invocations of the same combination, lowercase acts on the
//! press invocation only. Escaped characters resolve through a separate,
//! escape-prefixed symbol namespace.
//!
//! Two behaviors are kept deliberately, macro definitions in the field
//! depend on them:
//! - the pause directive sleeps and then still falls through to the symbol
//!   lookup for its own (unprefixed) character;
//! - an escape marker as the final character arms the escape state and then
//!   does nothing.

use alloc::string::String;

use embedded_hal::delay::DelayNs;

use crate::config::Snapshot;
use crate::keyboard::Keyboard;
use crate::{MACRO_PAUSE_MS, TAP_HOLD_MS};

/// Marks the next character as escaped. Resolves through the normal symbol
/// lookup itself, which by convention maps nothing.
pub const ESCAPE_MARKER: char = '\\';

/// Escaped character (either case) that sleeps instead of being prefixed.
pub const PAUSE_MARKER: char = 'p';

/// Interpret one stroke string against the keyboard.
///
/// `press` is true when invoked for a press transition and false for the
/// matching release transition of the same combination.
pub fn run<K, D>(
    snapshot: &Snapshot,
    strokes: &str,
    press: bool,
    keyboard: &mut K,
    delay: &mut D,
) -> Result<(), K::Error>
where
    K: Keyboard,
    D: DelayNs,
{
    let mut escaped = false;
    for ch in strokes.chars() {
        let mut release = true;
        let mut lookup = String::new();
        if escaped {
            escaped = false;
            release = if !ch.is_lowercase() {
                // Hold: press now, release on the release invocation.
                !press
            } else {
                // One-shot: tap on press, nothing on release.
                press
            };
            if ch.eq_ignore_ascii_case(&PAUSE_MARKER) {
                delay.delay_ms(MACRO_PAUSE_MS);
                lookup.push(ch);
            } else {
                lookup.push(ESCAPE_MARKER);
                lookup.push(ch);
            }
        } else {
            if ch == ESCAPE_MARKER {
                escaped = true;
            }
            lookup.push(ch);
        }

        if let Some(code) = snapshot.symbol(&lookup.to_uppercase()) {
            match (press, release) {
                (true, false) => keyboard.press(code)?,
                (true, true) => {
                    keyboard.press(code)?;
                    delay.delay_ms(TAP_HOLD_MS);
                    keyboard.release(code)?;
                }
                (false, true) => keyboard.release(code)?,
                (false, false) => {}
            }
        }
    }
    Ok(())
}
