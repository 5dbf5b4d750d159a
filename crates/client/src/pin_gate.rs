use kindred_core::pin::{PinMatch, SharedPin};

/// Local check of an entered PIN before a delete is sent.
///
/// Gives immediate feedback only. The server check is authoritative and, for
/// some collections, stricter: a PIN that passes here can still get a 403.
#[derive(Debug, Clone)]
pub struct PinGate {
    known: SharedPin,
}

impl PinGate {
    pub fn new(known: SharedPin) -> Self {
        Self { known }
    }

    /// Compares ignoring ASCII case.
    pub fn admits(&self, entered: &str) -> bool {
        self.known.verify(Some(entered), PinMatch::IgnoreAsciiCase)
    }
}
