use crate::{TicketGrade, TicketState};

/// Optional listing predicates. Unset fields do not restrict the result.
///
/// `read` and `state` only apply to the inbox; the sent listing ignores them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketFilter {
    pub grade: Option<TicketGrade>,
    pub read: Option<bool>,
    pub state: Option<TicketState>,
    pub keyword: Option<String>,
}

impl TicketFilter {
    /// Keyword with surrounding whitespace removed, `None` when blank
    pub fn keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}
