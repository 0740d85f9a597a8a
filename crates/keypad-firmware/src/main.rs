//! Macro keypad firmware for the ESP32-S3 carrier board.
//!
//! Bring-up wires the peripherals into the portable engine, then loops
//! forever: drain one configuration line, sweep the matrix, stabilize,
//! dispatch. Everything that can be tested without hardware lives in
//! `keypad-core` and `mux-matrix`; this binary is glue.

mod board;
mod hid;
mod led;
mod matrix_bus;
mod serial;

use esp_idf_svc::hal::delay::Delay;
use esp_idf_svc::hal::i2c::{config::Config as I2cConfig, I2cDriver};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::units::Hertz;

use keypad_core::{Engine, Layout, MatrixConfig, MatrixScanner};

use hid::UsbHidKeyboard;
use led::LedPanel;
use matrix_bus::EspMatrixBus;
use serial::HostPort;

fn main() {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    log::info!("starting keypad engine");

    let peripherals = Peripherals::take().unwrap();

    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio8,
        peripherals.pins.gpio9,
        &I2cConfig::new().baudrate(Hertz(400_000)),
    )
    .unwrap();
    let mut leds = LedPanel::new(i2c, board::LED_I2C_ADDR).unwrap();

    let layout = Layout::new(board::LAYOUT).unwrap();
    let config = MatrixConfig::new(board::ADC_THRESHOLD_MV, board::SETTLE_US).unwrap();
    let bus = EspMatrixBus::new(
        board::MUX_ADDR_PINS,
        board::COLUMN_PINS,
        board::SENSE_ADC_CHANNEL,
    )
    .unwrap();
    let mut scanner = MatrixScanner::new(bus, layout, config);
    scanner.release_all_columns().unwrap();

    let mut keyboard = UsbHidKeyboard::new().unwrap();
    let mut host = HostPort::new().unwrap();
    let mut engine = Engine::new();
    // Busy-waits the microsecond settle intervals, yields for the longer
    // sleeps.
    let mut delay = Delay::new_default();

    log::info!(
        "scanning {} slots; push configuration as one JSON line over USB-Serial/JTAG",
        scanner.layout().slot_count()
    );

    loop {
        engine.poll(
            &mut scanner,
            &mut keyboard,
            &mut host,
            &mut leds,
            &mut delay,
        );
    }
}
