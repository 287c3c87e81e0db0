use serde::Deserialize;

fn default_mark_as_read() -> bool {
    true
}

/// Query parameters for the single inbox entry reads
#[derive(Debug, Clone, Deserialize)]
pub struct ReadReceivedQuery {
    pub receiver: Option<String>,
    #[serde(rename = "markAsRead", default = "default_mark_as_read")]
    pub mark_as_read: bool,
}
