//! Board description for the 24-key pad (ESP32-S3 carrier).

use esp_idf_svc::sys;

use keypad_core::KeySlot;

/// Sense voltage below which a switch reads closed.
pub const ADC_THRESHOLD_MV: u16 = 550;
/// Settle time between row select and ADC sample.
pub const SETTLE_US: u32 = 50;

/// Which switch sits at which (row, column) position. Positions without a
/// switch are `None`.
pub const LAYOUT: &[&[Option<KeySlot>]] = &[
    &[
        Some("f1"),
        Some("b3"),
        Some("c3"),
        Some("d3"),
        Some("e3"),
        Some("f3"),
        Some("b4"),
        Some("d4"),
    ],
    &[
        Some("f4"),
        Some("a1"),
        Some("a2"),
        None,
        Some("a4"),
        Some("c4"),
        Some("e4"),
        Some("f2"),
    ],
    &[
        Some("b1"),
        Some("c1"),
        Some("d1"),
        Some("e1"),
        Some("b2"),
        Some("c2"),
        Some("d2"),
        Some("e2"),
    ],
    &[None, None, None, None, Some("a3"), None, None, None],
];

/// Multiplexer address lines A/B/C.
pub const MUX_ADDR_PINS: [i32; 3] = [35, 36, 37];

/// Column drive pins, one per matrix column.
pub const COLUMN_PINS: [i32; 8] = [4, 5, 6, 7, 15, 16, 17, 18];

/// ADC1 channel the multiplexer output feeds (GPIO1 on the S3).
pub const SENSE_ADC_CHANNEL: sys::adc_channel_t = sys::adc_channel_t_ADC_CHANNEL_0;

/// I2C address of the IS31FL3743 LED controller.
pub const LED_I2C_ADDR: u8 = 0x20;

/// First PWM channel of each key's RGB triplet on the LED controller
/// (blue; green and red follow at +1 and +2).
pub const LED_INDEX: &[(KeySlot, u8)] = &[
    ("a1", 40),
    ("a2", 37),
    ("a3", 52),
    ("a4", 49),
    ("b1", 4),
    ("b2", 1),
    ("b3", 16),
    ("b4", 13),
    ("c1", 22),
    ("c2", 19),
    ("c3", 34),
    ("c4", 31),
    ("d1", 58),
    ("d2", 55),
    ("d3", 70),
    ("d4", 67),
    ("e1", 25),
    ("e2", 61),
    ("e3", 64),
    ("e4", 28),
    ("f1", 7),
    ("f2", 43),
    ("f3", 46),
    ("f4", 10),
];
