//! Keyboard output abstraction.
//! The engine emits press/release events; the transport (USB HID on the
//! device, a recording mock in tests) lives behind this trait.

use core::fmt::Debug;

use crate::keycode::KeyCode;

/// Trait for the virtual keyboard the interpreter types on.
///
/// `release` and `release_all` must be idempotent: releasing a key that is
/// not held is a successful no-op.
pub trait Keyboard {
    /// Error type for keyboard operations
    type Error: Debug;

    /// Report a key as held.
    fn press(&mut self, key: KeyCode) -> Result<(), Self::Error>;

    /// Report a key as no longer held.
    fn release(&mut self, key: KeyCode) -> Result<(), Self::Error>;

    /// Release every held key, including any this side lost track of.
    fn release_all(&mut self) -> Result<(), Self::Error>;
}
