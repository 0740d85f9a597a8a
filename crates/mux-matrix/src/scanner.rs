//! Matrix sweep sequencing
//!
//! Pure sequencing over a [`MatrixBus`] so the scan order and the
//! anti-aliasing discharge can be unit-tested without hardware.

use alloc::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::bus::{ColumnLevel, MatrixBus};
use crate::config::MatrixConfig;
use crate::layout::{KeySlot, Layout};

/// The set of slots reading closed in one sweep. Unordered; produced fresh
/// every sweep.
pub type RawScan = Vec<KeySlot>;

/// Sweeps the matrix one column at a time.
pub struct MatrixScanner<B> {
    bus: B,
    layout: Layout,
    config: MatrixConfig,
}

impl<B: MatrixBus> MatrixScanner<B> {
    pub fn new(bus: B, layout: Layout, config: MatrixConfig) -> Self {
        Self {
            bus,
            layout,
            config,
        }
    }

    /// The layout this scanner decodes against.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Float every column. Call once before the first sweep so no column
    /// drives the matrix between scans.
    pub fn release_all_columns(&mut self) -> Result<(), B::Error> {
        for col in 0..self.layout.cols() {
            self.bus.drive_column(col as u8, ColumnLevel::High)?;
            self.bus.float_column(col as u8)?;
        }
        Ok(())
    }

    /// Read every switch position once and return the closed slots.
    ///
    /// For each column: drive the column low, then for each row select the
    /// row on the multiplexer, wait the settle interval and sample the
    /// sense line; a reading below the threshold is a closed switch.
    ///
    /// Each column is then deactivated in two phases: driven high for one
    /// step to discharge the sense node, then floated. Skipping the
    /// discharge step leaves residual charge that reads as a phantom
    /// closure on a neighbouring column.
    pub fn scan<D: DelayNs>(&mut self, delay: &mut D) -> Result<RawScan, B::Error> {
        let mut closed = RawScan::new();
        for col in 0..self.layout.cols() {
            self.bus.drive_column(col as u8, ColumnLevel::Low)?;
            for row in 0..self.layout.rows() {
                self.bus.select_row(row as u8)?;
                delay.delay_us(self.config.settle_us);
                let millivolts = self.bus.read_millivolts()?;
                if millivolts < self.config.threshold_mv {
                    if let Some(slot) = self.layout.slot_at(row, col) {
                        closed.push(slot);
                    }
                }
            }
            self.bus.drive_column(col as u8, ColumnLevel::High)?;
            self.bus.float_column(col as u8)?;
        }
        if !closed.is_empty() {
            log::trace!("raw scan: {closed:?}");
        }
        Ok(closed)
    }
}
