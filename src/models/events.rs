use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct IssueEvent {
    pub event: String,

    pub created_at: String,
}
