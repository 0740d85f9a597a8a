//! Portable engine for the macro keypad firmware.
//! Runs on the ESP target and on the host for tests.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

extern crate alloc;

pub mod combo;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod host;
pub mod illum;
pub mod keyboard;
pub mod keycode;
pub mod mock;
pub mod stabilizer;
pub mod strokes;

pub use combo::{canonical, COMBO_SEPARATOR};
pub use config::{parse_config_line, Action, ConfigDoc, Snapshot, HOST_MESSAGE_MARKER};
pub use dispatch::{dispatch, DispatchError};
pub use engine::{Engine, EngineError, ScanSource};
pub use host::{HostLink, HostMessage};
pub use illum::{ColorTable, Illuminator, Rgb};
pub use keyboard::Keyboard;
pub use keycode::KeyCode;
pub use mock::{KeyEvent, MockDelay, MockHost, MockIlluminator, MockKeyboard, ScriptedMatrix};
pub use stabilizer::{Diff, Stabilizer};
pub use strokes::{ESCAPE_MARKER, PAUSE_MARKER};

pub use mux_matrix::{
    ColumnLevel, KeySlot, Layout, MatrixBus, MatrixConfig, MatrixScanner, RawScan,
};

/// Debounce wait after a raw scan that disagrees with the previous one.
pub const DEBOUNCE_MS: u32 = 50;
/// Hold time between press and release of a tapped key.
pub const TAP_HOLD_MS: u32 = 50;
/// Sleep performed by the macro pause directive.
pub const MACRO_PAUSE_MS: u32 = 150;
/// Idle wait at the end of one loop iteration.
pub const LOOP_IDLE_MS: u32 = 10;
/// Pause before scanning resumes after a failed iteration.
pub const RECOVERY_PAUSE_MS: u32 = 1000;
