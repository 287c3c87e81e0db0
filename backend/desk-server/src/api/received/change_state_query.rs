use serde::Deserialize;

/// Query parameters for PATCH /api/tickets/received/{pno}/state
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeStateQuery {
    pub receiver: Option<String>,
    pub state: Option<String>,
}
