use serde::Deserialize;

/// Inbound echo request. Never stored; it only shapes the echo response.
#[derive(Debug, Deserialize)]
pub struct Message {
    pub message: String,
    pub user: String,
}
