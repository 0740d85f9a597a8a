//! GPIO/ADC implementation of the matrix bus.

use esp_idf_svc::sys::{self, esp, EspError};

use keypad_core::{ColumnLevel, MatrixBus};

const ADC_WIDTH_BIT_12: u32 = 3;
const ADC_ATTEN_DB_11: u32 = 3;
const ADC_MAX_COUNT: i32 = 4095;
const ADC_FULL_SCALE_MV: i32 = 3300;

/// Matrix pins driven through the raw GPIO/ADC API. Column pins switch
/// between push-pull output and floating input at scan time, which the
/// typed pin drivers do not model.
pub struct EspMatrixBus {
    mux: [i32; 3],
    columns: [i32; 8],
    channel: sys::adc_channel_t,
}

impl EspMatrixBus {
    pub fn new(
        mux: [i32; 3],
        columns: [i32; 8],
        channel: sys::adc_channel_t,
    ) -> Result<Self, EspError> {
        for pin in mux {
            esp!(unsafe { sys::gpio_reset_pin(pin) })?;
            esp!(unsafe { sys::gpio_set_direction(pin, sys::gpio_mode_t_GPIO_MODE_OUTPUT) })?;
        }
        for pin in columns {
            esp!(unsafe { sys::gpio_reset_pin(pin) })?;
            esp!(unsafe { sys::gpio_set_direction(pin, sys::gpio_mode_t_GPIO_MODE_INPUT) })?;
            esp!(unsafe { sys::gpio_set_pull_mode(pin, sys::gpio_pull_mode_t_GPIO_FLOATING) })?;
        }
        unsafe {
            sys::adc1_config_width(ADC_WIDTH_BIT_12);
            sys::adc1_config_channel_atten(channel, ADC_ATTEN_DB_11);
        }
        Ok(Self {
            mux,
            columns,
            channel,
        })
    }
}

impl MatrixBus for EspMatrixBus {
    type Error = EspError;

    fn select_row(&mut self, row: u8) -> Result<(), Self::Error> {
        for (bit, pin) in self.mux.iter().enumerate() {
            let level = u32::from((row >> bit) & 1);
            esp!(unsafe { sys::gpio_set_level(*pin, level) })?;
        }
        Ok(())
    }

    fn drive_column(&mut self, col: u8, level: ColumnLevel) -> Result<(), Self::Error> {
        let pin = self.columns[col as usize];
        esp!(unsafe { sys::gpio_set_direction(pin, sys::gpio_mode_t_GPIO_MODE_OUTPUT) })?;
        let level = match level {
            ColumnLevel::Low => 0,
            ColumnLevel::High => 1,
        };
        esp!(unsafe { sys::gpio_set_level(pin, level) })?;
        Ok(())
    }

    fn float_column(&mut self, col: u8) -> Result<(), Self::Error> {
        let pin = self.columns[col as usize];
        esp!(unsafe { sys::gpio_set_direction(pin, sys::gpio_mode_t_GPIO_MODE_INPUT) })?;
        Ok(())
    }

    fn read_millivolts(&mut self) -> Result<u16, Self::Error> {
        let raw = unsafe { sys::adc1_get_raw(self.channel) };
        Ok((raw * ADC_FULL_SCALE_MV / ADC_MAX_COUNT) as u16)
    }
}
