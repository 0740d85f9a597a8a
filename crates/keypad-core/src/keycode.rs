//! USB HID keycodes.
//! See USB HID Usage Tables, Section 10 (Keyboard/Keypad Page 0x07).
//!
//! Symbol tables in configuration documents name keycodes with the spelled-
//! out names the host tooling uses (`"ENTER"`, `"LEFT_SHIFT"`,
//! `"SPACEBAR"`, ...). [`KeyCode::from_name`] resolves those names against
//! this closed enumeration at configuration-load time; unknown names are an
//! explicit `None`, never a reflective lookup.

/// A key on the keyboard/keypad usage page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum KeyCode {
    // Letters
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    Z = 0x1D,

    // Numbers
    N1 = 0x1E,
    N2 = 0x1F,
    N3 = 0x20,
    N4 = 0x21,
    N5 = 0x22,
    N6 = 0x23,
    N7 = 0x24,
    N8 = 0x25,
    N9 = 0x26,
    N0 = 0x27,

    // Control keys
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    LBracket = 0x2F,
    RBracket = 0x30,
    Backslash = 0x31,
    /// Non-US # and ~
    Pound = 0x32,
    Semicolon = 0x33,
    Quote = 0x34,
    Grave = 0x35,
    Comma = 0x36,
    Dot = 0x37,
    Slash = 0x38,
    CapsLock = 0x39,

    // Function keys
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,

    // Keypad
    NumLock = 0x53,
    KpSlash = 0x54,
    KpAsterisk = 0x55,
    KpMinus = 0x56,
    KpPlus = 0x57,
    KpEnter = 0x58,
    Kp1 = 0x59,
    Kp2 = 0x5A,
    Kp3 = 0x5B,
    Kp4 = 0x5C,
    Kp5 = 0x5D,
    Kp6 = 0x5E,
    Kp7 = 0x5F,
    Kp8 = 0x60,
    Kp9 = 0x61,
    Kp0 = 0x62,
    KpDot = 0x63,

    Application = 0x65,
    Power = 0x66,

    // Modifiers
    LCtrl = 0xE0,
    LShift = 0xE1,
    LAlt = 0xE2,
    LGui = 0xE3,
    RCtrl = 0xE4,
    RShift = 0xE5,
    RAlt = 0xE6,
    RGui = 0xE7,
}

impl KeyCode {
    /// The HID usage ID.
    pub fn usage(self) -> u8 {
        self as u8
    }

    /// Check if this keycode is a modifier (LCtrl..RGui).
    pub fn is_modifier(self) -> bool {
        (0xE0..=0xE7).contains(&(self as u8))
    }

    /// Get the modifier bit mask (bit 0 = LCtrl, bit 7 = RGui).
    pub fn modifier_bit(self) -> u8 {
        if self.is_modifier() {
            1 << (self as u8 - 0xE0)
        } else {
            0
        }
    }

    /// Resolve a spelled-out keycode name, case-insensitively.
    ///
    /// Accepts the aliases host configurations use (`"RETURN"`/`"ENTER"`,
    /// `"SPACE"`/`"SPACEBAR"`, `"GUI"`/`"WINDOWS"`/`"COMMAND"`, ...).
    /// Unknown names resolve to `None`.
    pub fn from_name(name: &str) -> Option<KeyCode> {
        use KeyCode::*;
        let folded = name.trim().to_uppercase();
        let code = match folded.as_str() {
            "A" => A,
            "B" => B,
            "C" => C,
            "D" => D,
            "E" => E,
            "F" => F,
            "G" => G,
            "H" => H,
            "I" => I,
            "J" => J,
            "K" => K,
            "L" => L,
            "M" => M,
            "N" => N,
            "O" => O,
            "P" => P,
            "Q" => Q,
            "R" => R,
            "S" => S,
            "T" => T,
            "U" => U,
            "V" => V,
            "W" => W,
            "X" => X,
            "Y" => Y,
            "Z" => Z,
            "ONE" => N1,
            "TWO" => N2,
            "THREE" => N3,
            "FOUR" => N4,
            "FIVE" => N5,
            "SIX" => N6,
            "SEVEN" => N7,
            "EIGHT" => N8,
            "NINE" => N9,
            "ZERO" => N0,
            "ENTER" | "RETURN" => Enter,
            "ESCAPE" => Escape,
            "BACKSPACE" => Backspace,
            "TAB" => Tab,
            "SPACEBAR" | "SPACE" => Space,
            "MINUS" => Minus,
            "EQUALS" => Equal,
            "LEFT_BRACKET" => LBracket,
            "RIGHT_BRACKET" => RBracket,
            "BACKSLASH" => Backslash,
            "POUND" => Pound,
            "SEMICOLON" => Semicolon,
            "QUOTE" => Quote,
            "GRAVE_ACCENT" => Grave,
            "COMMA" => Comma,
            "PERIOD" => Dot,
            "FORWARD_SLASH" => Slash,
            "CAPS_LOCK" => CapsLock,
            "F1" => F1,
            "F2" => F2,
            "F3" => F3,
            "F4" => F4,
            "F5" => F5,
            "F6" => F6,
            "F7" => F7,
            "F8" => F8,
            "F9" => F9,
            "F10" => F10,
            "F11" => F11,
            "F12" => F12,
            "PRINT_SCREEN" => PrintScreen,
            "SCROLL_LOCK" => ScrollLock,
            "PAUSE" => Pause,
            "INSERT" => Insert,
            "HOME" => Home,
            "PAGE_UP" => PageUp,
            "DELETE" => Delete,
            "END" => End,
            "PAGE_DOWN" => PageDown,
            "RIGHT_ARROW" => Right,
            "LEFT_ARROW" => Left,
            "DOWN_ARROW" => Down,
            "UP_ARROW" => Up,
            "KEYPAD_NUMLOCK" => NumLock,
            "KEYPAD_FORWARD_SLASH" => KpSlash,
            "KEYPAD_ASTERISK" => KpAsterisk,
            "KEYPAD_MINUS" => KpMinus,
            "KEYPAD_PLUS" => KpPlus,
            "KEYPAD_ENTER" => KpEnter,
            "KEYPAD_ONE" => Kp1,
            "KEYPAD_TWO" => Kp2,
            "KEYPAD_THREE" => Kp3,
            "KEYPAD_FOUR" => Kp4,
            "KEYPAD_FIVE" => Kp5,
            "KEYPAD_SIX" => Kp6,
            "KEYPAD_SEVEN" => Kp7,
            "KEYPAD_EIGHT" => Kp8,
            "KEYPAD_NINE" => Kp9,
            "KEYPAD_ZERO" => Kp0,
            "KEYPAD_PERIOD" => KpDot,
            "APPLICATION" => Application,
            "POWER" => Power,
            "LEFT_CONTROL" | "CONTROL" => LCtrl,
            "LEFT_SHIFT" | "SHIFT" => LShift,
            "LEFT_ALT" | "ALT" | "OPTION" => LAlt,
            "LEFT_GUI" | "GUI" | "WINDOWS" | "COMMAND" => LGui,
            "RIGHT_CONTROL" => RCtrl,
            "RIGHT_SHIFT" => RShift,
            "RIGHT_ALT" => RAlt,
            "RIGHT_GUI" => RGui,
            _ => return None,
        };
        Some(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_resolves_aliases() {
        assert_eq!(KeyCode::from_name("ENTER"), Some(KeyCode::Enter));
        assert_eq!(KeyCode::from_name("RETURN"), Some(KeyCode::Enter));
        assert_eq!(KeyCode::from_name("SPACEBAR"), Some(KeyCode::Space));
        assert_eq!(KeyCode::from_name("WINDOWS"), Some(KeyCode::LGui));
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(KeyCode::from_name("left_shift"), Some(KeyCode::LShift));
        assert_eq!(KeyCode::from_name("f5"), Some(KeyCode::F5));
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(KeyCode::from_name("HYPERDRIVE"), None);
        assert_eq!(KeyCode::from_name(""), None);
    }

    #[test]
    fn modifier_bits() {
        assert!(KeyCode::LCtrl.is_modifier());
        assert_eq!(KeyCode::LCtrl.modifier_bit(), 0x01);
        assert_eq!(KeyCode::RGui.modifier_bit(), 0x80);
        assert!(!KeyCode::A.is_modifier());
        assert_eq!(KeyCode::A.modifier_bit(), 0);
        assert_eq!(KeyCode::A.usage(), 0x04);
    }
}
