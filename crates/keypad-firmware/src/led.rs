//! IS31FL3743 LED panel behind the color table.

use esp_idf_svc::hal::delay::BLOCK;
use esp_idf_svc::hal::i2c::I2cDriver;
use esp_idf_svc::sys::EspError;

use keypad_core::{ColorTable, Illuminator, Rgb};

use crate::board;

const REG_UNLOCK: u8 = 0xFE;
const UNLOCK_MAGIC: u8 = 0xC5;
const REG_PAGE: u8 = 0xFD;
const PAGE_PWM: u8 = 0x00;
const PAGE_SCALING: u8 = 0x01;
const PAGE_CONFIG: u8 = 0x02;
const REG_CONFIG: u8 = 0x00;
const CONFIG_NORMAL: u8 = 0x01;
const REG_GLOBAL_CURRENT: u8 = 0x01;
const CHANNEL_COUNT: u8 = 198;

// Bring-up values carried over from the board's reference firmware.
const LED_SCALING: u8 = 0x20;
const GLOBAL_CURRENT: u8 = 0x20;

pub struct LedPanel<'d> {
    i2c: I2cDriver<'d>,
    addr: u8,
}

impl<'d> LedPanel<'d> {
    pub fn new(i2c: I2cDriver<'d>, addr: u8) -> Result<Self, EspError> {
        let mut panel = Self { i2c, addr };
        panel.select_page(PAGE_SCALING)?;
        for channel in 0..CHANNEL_COUNT {
            panel.write_reg(channel + 1, LED_SCALING)?;
        }
        panel.select_page(PAGE_CONFIG)?;
        panel.write_reg(REG_GLOBAL_CURRENT, GLOBAL_CURRENT)?;
        panel.write_reg(REG_CONFIG, CONFIG_NORMAL)?;
        Ok(panel)
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), EspError> {
        self.i2c.write(self.addr, &[reg, value], BLOCK)
    }

    fn select_page(&mut self, page: u8) -> Result<(), EspError> {
        self.write_reg(REG_UNLOCK, UNLOCK_MAGIC)?;
        self.write_reg(REG_PAGE, page)
    }

    fn set_channel(&mut self, channel: u8, value: u8) -> Result<(), EspError> {
        // PWM registers are 1-based on page 0.
        self.write_reg(channel + 1, value)
    }
}

impl Illuminator for LedPanel<'_> {
    type Error = EspError;

    fn paint(&mut self, colors: &ColorTable) -> Result<(), Self::Error> {
        self.select_page(PAGE_PWM)?;
        for (slot, base) in board::LED_INDEX {
            let rgb = colors.get(*slot).copied().unwrap_or(Rgb::OFF);
            self.set_channel(base + 2, rgb.r)?;
            self.set_channel(base + 1, rgb.g)?;
            self.set_channel(*base, rgb.b)?;
        }
        Ok(())
    }
}
