//! Command dispatch for one stabilizer transition.

use embedded_hal::delay::DelayNs;

use crate::combo;
use crate::config::{Action, Snapshot};
use crate::host::{HostLink, HostMessage};
use crate::keyboard::Keyboard;
use crate::stabilizer::Diff;
use crate::strokes;

/// Errors escaping one dispatch cycle.
#[derive(Debug)]
pub enum DispatchError<K, H> {
    Keyboard(K),
    Host(H),
}

impl<K: core::fmt::Debug, H: core::fmt::Debug> core::fmt::Display for DispatchError<K, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DispatchError::Keyboard(err) => write!(f, "keyboard error: {err:?}"),
            DispatchError::Host(err) => write!(f, "host link error: {err:?}"),
        }
    }
}

impl<K: core::fmt::Debug, H: core::fmt::Debug> core::error::Error for DispatchError<K, H> {}

/// Route one transition to its configured actions.
///
/// The newly-pressed and newly-released sets are canonicalized and looked
/// up independently. Host messages fire on the press transition only;
/// macro actions run on both, with the `press` flag telling the
/// interpreter which side it is on. An unmatched combination is a no-op.
///
/// When the transition pressed nothing, every key is released as a
/// safeguard against missed release events.
pub fn dispatch<K, H, D>(
    snapshot: &Snapshot,
    diff: &Diff,
    keyboard: &mut K,
    host: &mut H,
    delay: &mut D,
) -> Result<(), DispatchError<K::Error, H::Error>>
where
    K: Keyboard,
    H: HostLink,
    D: DelayNs,
{
    let pressed_combo = combo::canonical(diff.pressed.iter().copied());
    match snapshot.action(&pressed_combo) {
        Some(Action::HostMessage(payload)) => {
            let message = HostMessage {
                key: &pressed_combo,
                code: payload,
                pressed: true,
            };
            match serde_json::to_string(&message) {
                Ok(line) => {
                    log::info!("sending message: {line}");
                    host.send_line(&line).map_err(DispatchError::Host)?;
                }
                Err(err) => log::warn!("could not encode host message: {err}"),
            }
        }
        Some(Action::Macro(code)) => {
            strokes::run(snapshot, code, true, keyboard, delay).map_err(DispatchError::Keyboard)?;
        }
        None => {}
    }

    let released_combo = combo::canonical(diff.released.iter().copied());
    if let Some(Action::Macro(code)) = snapshot.action(&released_combo) {
        strokes::run(snapshot, code, false, keyboard, delay).map_err(DispatchError::Keyboard)?;
    }

    if diff.pressed.is_empty() {
        keyboard.release_all().map_err(DispatchError::Keyboard)?;
    }

    Ok(())
}
