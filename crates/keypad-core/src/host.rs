//! Host serial link abstraction and the outbound message document.

use core::fmt::Debug;

use alloc::string::String;

use serde::Serialize;

/// Line-oriented link to the host daemon.
///
/// Inbound lines carry configuration documents; outbound lines carry
/// [`HostMessage`]s. Both directions are newline-terminated UTF-8; input
/// that does not decode is discarded by the implementation.
pub trait HostLink {
    /// Error type for send failures
    type Error: Debug;

    /// Return one complete pending line, without its terminator, if any.
    /// Never blocks.
    fn poll_line(&mut self) -> Option<String>;

    /// Write one line plus terminator and flush it out.
    fn send_line(&mut self, line: &str) -> Result<(), Self::Error>;
}

/// Out-of-band message sent to the host when a combination resolves to a
/// host-message action.
#[derive(Debug, Serialize)]
pub struct HostMessage<'a> {
    /// The triggering combination key.
    pub key: &'a str,
    /// The action payload with the reserved marker stripped.
    pub code: &'a str,
    /// Always the press transition; host messages never fire on release.
    pub pressed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_message_wire_form() {
        let msg = HostMessage {
            key: "a1-b2",
            code: "OPEN:terminal",
            pressed: true,
        };
        let line = serde_json::to_string(&msg).unwrap();
        assert_eq!(
            line,
            r#"{"key":"a1-b2","code":"OPEN:terminal","pressed":true}"#
        );
    }
}
