//! The control loop body.
//!
//! One iteration: drain at most one pending host line (a decoded document
//! replaces the configuration snapshot before anything else runs), sweep
//! the matrix, stabilize, dispatch, idle. Everything is cooperative and
//! single-threaded; interpreter sleeps block the whole loop so key timing
//! stays deterministic relative to the host.
//!
//! An error anywhere inside the iteration is caught at the iteration
//! boundary: a diagnostic is logged, every key is released so nothing
//! stays stuck on the host, and scanning resumes after a fixed pause. The
//! loop never terminates.

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;

use mux_matrix::{MatrixBus, MatrixScanner, RawScan};

use crate::config::{parse_config_line, Snapshot};
use crate::dispatch::{dispatch, DispatchError};
use crate::host::HostLink;
use crate::illum::Illuminator;
use crate::keyboard::Keyboard;
use crate::stabilizer::Stabilizer;
use crate::{LOOP_IDLE_MS, RECOVERY_PAUSE_MS};

/// Anything that can produce a raw scan. Implemented by
/// [`MatrixScanner`] over real pins and by scripted mocks in tests.
pub trait ScanSource {
    type Error: Debug;

    fn scan(&mut self, delay: &mut impl DelayNs) -> Result<RawScan, Self::Error>;
}

impl<B: MatrixBus> ScanSource for MatrixScanner<B> {
    type Error = B::Error;

    fn scan(&mut self, delay: &mut impl DelayNs) -> Result<RawScan, Self::Error> {
        MatrixScanner::scan(self, delay)
    }
}

/// Errors escaping one loop iteration.
#[derive(Debug)]
pub enum EngineError<M, K, H, I> {
    Matrix(M),
    Keyboard(K),
    Host(H),
    Illuminator(I),
}

impl<M, K, H, I> core::fmt::Display for EngineError<M, K, H, I>
where
    M: Debug,
    K: Debug,
    H: Debug,
    I: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::Matrix(err) => write!(f, "matrix error: {err:?}"),
            EngineError::Keyboard(err) => write!(f, "keyboard error: {err:?}"),
            EngineError::Host(err) => write!(f, "host link error: {err:?}"),
            EngineError::Illuminator(err) => write!(f, "illuminator error: {err:?}"),
        }
    }
}

impl<M: Debug, K: Debug, H: Debug, I: Debug> core::error::Error for EngineError<M, K, H, I> {}

/// Owns the configuration snapshot and the stabilizer state.
#[derive(Debug, Default)]
pub struct Engine {
    stabilizer: Stabilizer,
    config: Snapshot,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration currently in effect.
    pub fn config(&self) -> &Snapshot {
        &self.config
    }

    /// Run one iteration, absorbing any failure.
    ///
    /// This is the method the firmware loop calls forever. On error the
    /// fail-safe fires: log, release all keys, pause, resume.
    pub fn poll<S, K, H, I, D>(
        &mut self,
        matrix: &mut S,
        keyboard: &mut K,
        host: &mut H,
        illum: &mut I,
        delay: &mut D,
    ) where
        S: ScanSource,
        K: Keyboard,
        H: HostLink,
        I: Illuminator,
        D: DelayNs,
    {
        if let Err(err) = self.step(matrix, keyboard, host, illum, delay) {
            log::error!("iteration failed: {err}");
            if keyboard.release_all().is_err() {
                log::error!("release-all failed; keys may be stuck until next dispatch");
            }
            delay.delay_ms(RECOVERY_PAUSE_MS);
        }
    }

    /// One full iteration; any error aborts it and propagates.
    fn step<S, K, H, I, D>(
        &mut self,
        matrix: &mut S,
        keyboard: &mut K,
        host: &mut H,
        illum: &mut I,
        delay: &mut D,
    ) -> Result<(), EngineError<S::Error, K::Error, H::Error, I::Error>>
    where
        S: ScanSource,
        K: Keyboard,
        H: HostLink,
        I: Illuminator,
        D: DelayNs,
    {
        // Configuration is drained before the sweep, so a replacement can
        // never interleave with the dispatch it follows.
        if let Some(line) = host.poll_line() {
            match parse_config_line(&line) {
                Some(doc) => {
                    log::info!("applying configuration update");
                    self.config = Snapshot::from_doc(doc, &self.config);
                    illum
                        .paint(self.config.colors())
                        .map_err(EngineError::Illuminator)?;
                }
                None => log::debug!("discarding undecodable configuration line"),
            }
        }

        let raw = matrix.scan(delay).map_err(EngineError::Matrix)?;
        let diff = self.stabilizer.observe(&raw, delay);
        if !diff.is_empty() {
            dispatch(&self.config, &diff, keyboard, host, delay).map_err(|err| match err {
                DispatchError::Keyboard(err) => EngineError::Keyboard(err),
                DispatchError::Host(err) => EngineError::Host(err),
            })?;
        }

        delay.delay_ms(LOOP_IDLE_MS);
        Ok(())
    }
}
