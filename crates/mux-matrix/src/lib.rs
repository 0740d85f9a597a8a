//! Driver for multiplexer-addressed, analog-sensed key matrices.
//!
//! The target hardware senses key switches through a single analog line: one
//! column at a time is driven low, an analog multiplexer selects the row to
//! route onto the sense line, and the scaled voltage decides whether the
//! switch at that position is closed.
//!
//! ## Hardware Requirements
//!
//! - 3 GPIO pins for the multiplexer row address (A/B/C)
//! - One GPIO pin per column, switchable between push-pull output and
//!   high-impedance input
//! - One analog input shared by all switch positions
//!
//! ## Ghosting and aliasing
//!
//! Residual charge on the sense node reads as a false closure on a later
//! column unless the column is actively discharged. [`MatrixScanner::scan`]
//! therefore deactivates every column in two phases: drive high for one
//! step, then float. Implementations of [`MatrixBus`] must perform both
//! operations exactly as requested.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mux_matrix::{Layout, MatrixConfig, MatrixScanner};
//!
//! let layout = Layout::new(&[
//!     &[Some("a1"), Some("a2")],
//!     &[Some("b1"), None],
//! ])?;
//! let config = MatrixConfig::new(550, 50)?;
//! let mut scanner = MatrixScanner::new(bus, layout, config);
//!
//! scanner.release_all_columns()?;
//! let closed = scanner.scan(&mut delay)?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bus;
mod config;
mod error;
mod layout;
mod scanner;

pub use bus::{ColumnLevel, MatrixBus};
pub use config::{FULL_SCALE_MV, MatrixConfig};
pub use error::{ConfigError, LayoutError};
pub use layout::{KeySlot, Layout};
pub use scanner::{MatrixScanner, RawScan};
