/// Unvalidated ticket creation input, as received from a client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub purpose: Option<String>,
    pub requirement: Option<String>,
    pub grade: Option<String>,
    /// `yyyy-MM-dd HH:mm`
    pub deadline: Option<String>,
    pub receivers: Option<Vec<String>>,
}
