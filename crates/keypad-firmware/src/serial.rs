//! Host link over the USB-Serial/JTAG console.

use esp_idf_svc::sys::{self, esp, EspError};

use keypad_core::HostLink;

pub struct HostPort {
    buffer: Vec<u8>,
}

impl HostPort {
    pub fn new() -> Result<Self, EspError> {
        let mut config = sys::usb_serial_jtag_driver_config_t {
            tx_buffer_size: 1024,
            rx_buffer_size: 1024,
        };
        esp!(unsafe { sys::usb_serial_jtag_driver_install(&mut config as *mut _) })?;
        Ok(Self { buffer: Vec::new() })
    }

    fn write_str(&self, text: &str) {
        let mut written = 0;
        while written < text.len() {
            let chunk = &text.as_bytes()[written..];
            let sent = unsafe {
                sys::usb_serial_jtag_write_bytes(chunk.as_ptr().cast(), chunk.len(), 100)
            };
            if sent <= 0 {
                return;
            }
            written += sent as usize;
        }
    }
}

impl HostLink for HostPort {
    type Error = EspError;

    fn poll_line(&mut self) -> Option<String> {
        let mut temp = [0u8; 64];
        let read = unsafe {
            sys::usb_serial_jtag_read_bytes(temp.as_mut_ptr().cast(), temp.len() as u32, 0)
        };
        if read <= 0 {
            return None;
        }

        for &b in &temp[..read as usize] {
            match b {
                b'\n' => {
                    // Undecodable input is discarded without a diagnostic to
                    // the host.
                    let line = String::from_utf8(core::mem::take(&mut self.buffer))
                        .ok()
                        .map(|line| line.trim().to_string())?;
                    if line.is_empty() {
                        return None;
                    }
                    return Some(line);
                }
                b'\r' => {}
                _ => {
                    self.buffer.push(b);
                    if self.buffer.len() > 4096 {
                        self.buffer.clear();
                    }
                }
            }
        }

        None
    }

    fn send_line(&mut self, line: &str) -> Result<(), Self::Error> {
        self.write_str(line);
        self.write_str("\n");
        Ok(())
    }
}
