//! USB HID keyboard output.
//!
//! Maintains a 6-key-rollover boot report and hands it to the TinyUSB HID
//! device. The transport does the rest; this wrapper only keeps the report
//! consistent with the engine's press/release calls.

use esp_idf_svc::sys::{self, esp, EspError};

use keypad_core::{KeyCode, Keyboard};

const HID_INSTANCE: u8 = 0;
const REPORT_ID: u8 = 0;
const ROLLOVER: usize = 6;

pub struct UsbHidKeyboard {
    modifiers: u8,
    keys: [u8; ROLLOVER],
}

impl UsbHidKeyboard {
    pub fn new() -> Result<Self, EspError> {
        let mut config = sys::tinyusb_config_t::default();
        esp!(unsafe { sys::tinyusb_driver_install(&mut config as *mut _) })?;
        Ok(Self {
            modifiers: 0,
            keys: [0; ROLLOVER],
        })
    }

    fn send_report(&mut self) {
        // Boot report layout: modifier byte, reserved byte, six usages.
        let report: [u8; 8] = [
            self.modifiers,
            0,
            self.keys[0],
            self.keys[1],
            self.keys[2],
            self.keys[3],
            self.keys[4],
            self.keys[5],
        ];
        unsafe {
            if sys::tud_hid_n_ready(HID_INSTANCE) {
                sys::tud_hid_n_report(
                    HID_INSTANCE,
                    REPORT_ID,
                    report.as_ptr().cast(),
                    report.len() as u16,
                );
            }
        }
    }
}

impl Keyboard for UsbHidKeyboard {
    type Error = EspError;

    fn press(&mut self, key: KeyCode) -> Result<(), Self::Error> {
        if key.is_modifier() {
            self.modifiers |= key.modifier_bit();
        } else if !self.keys.contains(&key.usage()) {
            match self.keys.iter_mut().find(|slot| **slot == 0) {
                Some(slot) => *slot = key.usage(),
                None => log::warn!("report full, dropping {key:?}"),
            }
        }
        self.send_report();
        Ok(())
    }

    fn release(&mut self, key: KeyCode) -> Result<(), Self::Error> {
        if key.is_modifier() {
            self.modifiers &= !key.modifier_bit();
        } else {
            for slot in self.keys.iter_mut() {
                if *slot == key.usage() {
                    *slot = 0;
                }
            }
        }
        self.send_report();
        Ok(())
    }

    fn release_all(&mut self) -> Result<(), Self::Error> {
        self.modifiers = 0;
        self.keys = [0; ROLLOVER];
        self.send_report();
        Ok(())
    }
}
