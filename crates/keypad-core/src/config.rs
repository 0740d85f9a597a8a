//! Configuration documents and the live snapshot.
//!
//! The host pushes one JSON line per reconfiguration. The document is
//! decoded as a unit into [`ConfigDoc`]; a line that does not decode is
//! discarded and the previous snapshot stays in effect. [`Snapshot`] is the
//! validated, typed form the dispatcher and interpreter read; it is
//! replaced wholesale between dispatch cycles, never mutated field by
//! field.

use alloc::collections::BTreeMap;
use alloc::string::String;

use serde::Deserialize;

use crate::illum::{ColorTable, Rgb};
use crate::keycode::KeyCode;

/// Reserved prefix marking an action string as a host message.
pub const HOST_MESSAGE_MARKER: &str = "MSG:";

/// Wire form of one configuration push. Unknown extra fields (the host
/// daemon includes window-management bookkeeping) are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigDoc {
    /// Slot name to 6-hex-digit RGB string.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    /// Combination key to action string.
    #[serde(default)]
    pub keys: BTreeMap<String, String>,
    /// Character (possibly escape-prefixed) to keycode name. Omitting the
    /// field keeps the previous symbol table.
    #[serde(default)]
    pub symbols: Option<BTreeMap<String, String>>,
}

/// Decode one inbound line. `None` means the line is discarded.
pub fn parse_config_line(line: &str) -> Option<ConfigDoc> {
    serde_json::from_str(line.trim()).ok()
}

/// What a combination is configured to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Forward the payload to the host instead of typing.
    HostMessage(String),
    /// Run the stroke string through the interpreter.
    Macro(String),
}

impl Action {
    fn parse(raw: &str) -> Action {
        match raw.strip_prefix(HOST_MESSAGE_MARKER) {
            Some(payload) => Action::HostMessage(String::from(payload)),
            None => Action::Macro(String::from(raw)),
        }
    }
}

/// The validated configuration the engine runs against.
#[derive(Debug, Default)]
pub struct Snapshot {
    actions: BTreeMap<String, Action>,
    colors: ColorTable,
    symbols: BTreeMap<String, KeyCode>,
}

impl Snapshot {
    /// Build the snapshot that replaces `previous` when `doc` is applied.
    ///
    /// Actions and colors are rebuilt from the document (absent fields
    /// clear them); the symbol table is carried over when the document
    /// omits it. Invalid colors and unknown keycode names are dropped
    /// individually with a diagnostic.
    pub fn from_doc(doc: ConfigDoc, previous: &Snapshot) -> Snapshot {
        let actions = doc
            .keys
            .into_iter()
            .map(|(combo, raw)| (combo, Action::parse(&raw)))
            .collect();

        let mut colors = ColorTable::new();
        for (slot, hex) in doc.colors {
            match Rgb::from_hex(&hex) {
                Some(rgb) => {
                    colors.insert(slot, rgb);
                }
                None => log::warn!("dropping invalid color {hex:?} for slot {slot:?}"),
            }
        }

        let symbols = match doc.symbols {
            Some(raw) => {
                let mut symbols = BTreeMap::new();
                for (chars, name) in raw {
                    match KeyCode::from_name(&name) {
                        Some(code) => {
                            symbols.insert(chars.to_uppercase(), code);
                        }
                        None => log::warn!("dropping unknown keycode {name:?} for {chars:?}"),
                    }
                }
                symbols
            }
            None => previous.symbols.clone(),
        };

        Snapshot {
            actions,
            colors,
            symbols,
        }
    }

    /// Action configured for a canonical combination key.
    pub fn action(&self, combo: &str) -> Option<&Action> {
        self.actions.get(combo)
    }

    /// Keycode for an upper-case-folded symbol lookup string.
    pub fn symbol(&self, lookup: &str) -> Option<KeyCode> {
        self.symbols.get(lookup).copied()
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> ConfigDoc {
        parse_config_line(json).unwrap()
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        assert!(parse_config_line("{\"keys\": ").is_none());
        assert!(parse_config_line("not json at all").is_none());
        assert!(parse_config_line("").is_none());
    }

    #[test]
    fn parse_tolerates_host_bookkeeping_fields() {
        let doc = doc(r#"{"window": "editor", "version": 3, "keys": {"a1": "X"}}"#);
        assert_eq!(doc.keys.len(), 1);
    }

    #[test]
    fn actions_split_on_reserved_marker() {
        let doc = doc(r#"{"keys": {"a1": "MSG:record", "b2": "xyz"}}"#);
        let snapshot = Snapshot::from_doc(doc, &Snapshot::default());
        assert_eq!(
            snapshot.action("a1"),
            Some(&Action::HostMessage(String::from("record")))
        );
        assert_eq!(
            snapshot.action("b2"),
            Some(&Action::Macro(String::from("xyz")))
        );
        assert_eq!(snapshot.action("c3"), None);
    }

    #[test]
    fn absent_fields_clear_actions_and_colors() {
        let first = Snapshot::from_doc(
            doc(r#"{"keys": {"a1": "X"}, "colors": {"a1": "ff0000"}}"#),
            &Snapshot::default(),
        );
        assert!(first.action("a1").is_some());
        assert_eq!(first.colors().len(), 1);

        let second = Snapshot::from_doc(doc(r#"{}"#), &first);
        assert!(second.action("a1").is_none());
        assert!(second.colors().is_empty());
    }

    #[test]
    fn omitted_symbols_keep_previous_table() {
        let first = Snapshot::from_doc(doc(r#"{"symbols": {"X": "F5"}}"#), &Snapshot::default());
        assert_eq!(first.symbol("X"), Some(KeyCode::F5));

        let second = Snapshot::from_doc(doc(r#"{"keys": {"a1": "X"}}"#), &first);
        assert_eq!(second.symbol("X"), Some(KeyCode::F5));

        let third = Snapshot::from_doc(doc(r#"{"symbols": {}}"#), &second);
        assert_eq!(third.symbol("X"), None);
    }

    #[test]
    fn symbol_keys_fold_to_upper_case() {
        let snapshot = Snapshot::from_doc(
            doc(r#"{"symbols": {"x": "A", "\\y": "B"}}"#),
            &Snapshot::default(),
        );
        assert_eq!(snapshot.symbol("X"), Some(KeyCode::A));
        assert_eq!(snapshot.symbol("\\Y"), Some(KeyCode::B));
        assert_eq!(snapshot.symbol("x"), None);
    }

    #[test]
    fn unknown_keycode_names_are_dropped() {
        let snapshot = Snapshot::from_doc(
            doc(r#"{"symbols": {"X": "WARP_CORE", "Y": "F1"}}"#),
            &Snapshot::default(),
        );
        assert_eq!(snapshot.symbol("X"), None);
        assert_eq!(snapshot.symbol("Y"), Some(KeyCode::F1));
    }

    #[test]
    fn invalid_colors_are_dropped_individually() {
        let snapshot = Snapshot::from_doc(
            doc(r#"{"colors": {"a1": "ff0000", "b2": "red"}}"#),
            &Snapshot::default(),
        );
        assert_eq!(
            snapshot.colors().get("a1"),
            Some(&Rgb {
                r: 0xFF,
                g: 0,
                b: 0
            })
        );
        assert!(!snapshot.colors().contains_key("b2"));
    }
}
