use desk_service::TicketDraft;

use serde::Deserialize;

/// Body of POST /api/tickets. Every field is optional here so that missing
/// values surface as validation errors naming the field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTicketRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub purpose: Option<String>,
    pub requirement: Option<String>,
    pub grade: Option<String>,
    pub deadline: Option<String>,
    pub receivers: Option<Vec<String>>,
}

impl From<CreateTicketRequest> for TicketDraft {
    fn from(req: CreateTicketRequest) -> Self {
        TicketDraft {
            title: req.title,
            content: req.content,
            purpose: req.purpose,
            requirement: req.requirement,
            grade: req.grade,
            deadline: req.deadline,
            receivers: req.receivers,
        }
    }
}
