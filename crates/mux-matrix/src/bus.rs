//! Hardware interface abstraction
//!
//! [`MatrixBus`] is the seam between the portable scan sequencing and the
//! target's pins. The driver never touches a pin directly; it asks the bus
//! to select a row, drive or float a column, and sample the sense line.

use core::fmt::Debug;

/// Output level for a column that is actively driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLevel {
    /// Drive low: arms the column for sensing (switches pull the sense
    /// node toward ground through the closed contact).
    Low,
    /// Drive high: discharge step of the two-phase deactivation.
    High,
}

/// Trait for the pins and analog input behind a scanned matrix.
///
/// ## Implementing
///
/// - `select_row` sets the three multiplexer address lines to the binary
///   value of `row`.
/// - `drive_column` must configure the column pin as a push-pull output at
///   the requested level.
/// - `float_column` must put the column pin into a high-impedance input
///   state so it neither drives nor is driven.
/// - `read_millivolts` samples the shared analog sense line, scaled to
///   millivolts.
pub trait MatrixBus {
    /// Error type for bus operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Route the given row onto the analog sense line.
    fn select_row(&mut self, row: u8) -> Result<(), Self::Error>;

    /// Drive a column pin as an output at the given level.
    fn drive_column(&mut self, col: u8, level: ColumnLevel) -> Result<(), Self::Error>;

    /// Put a column pin into a high-impedance state.
    fn float_column(&mut self, col: u8) -> Result<(), Self::Error>;

    /// Sample the analog sense line, in millivolts.
    fn read_millivolts(&mut self) -> Result<u16, Self::Error>;
}
