use serde::Deserialize;

/// `?writer=` on single-ticket writer endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WriterQuery {
    pub writer: Option<String>,
}
