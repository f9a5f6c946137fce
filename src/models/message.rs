// Message envelope models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message kind; serializes to lowercase JSON (e.g. "status"). Kinds this
/// layer does not handle deserialize to `Unknown` and are ignored on
/// dispatch, so the transport may grow new kinds without breaking old
/// dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Status,
    Log,
    Metrics,
    #[serde(other)]
    Unknown,
}

impl MessageKind {
    /// Parse from a transport kind string (e.g. "status", "metrics").
    pub fn from_wire(s: &str) -> Self {
        match s {
            "status" => MessageKind::Status,
            "log" => MessageKind::Log,
            "metrics" => MessageKind::Metrics,
            _ => MessageKind::Unknown,
        }
    }
}

/// One push message as it appears on a JSON feed: the kind plus the
/// kind-specific content, still undecoded. Transports that already split the
/// two may call `HostState::handle_message` directly instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub content: Value,
}
