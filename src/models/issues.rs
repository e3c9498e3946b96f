use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,

    pub state: String,

    #[serde(default)]
    pub state_reason: Option<String>,

    pub title: String,

    pub html_url: String,

    #[serde(default)]
    pub labels: Vec<Label>,

    #[serde(default)]
    pub assignees: Vec<User>,

    pub created_at: String,

    #[serde(default)]
    pub closed_at: Option<String>,

    #[serde(default)]
    pub milestone: Option<Milestone>,

    #[serde(default)]
    pub pull_request: Option<PullRequestRef>,

    #[serde(skip)]
    pub last_assigned_at: Option<String>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    pub fn has_assignees(&self) -> bool {
        !self.assignees.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Milestone {
    pub title: String,

    pub state: String,

    #[serde(default)]
    pub due_on: Option<String>,

    pub html_url: String,
}

/// Present only on pull requests; its contents are not used.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestRef {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_pull_request_with_milestone() {
        let raw = serde_json::json!({
            "number": 7,
            "state": "closed",
            "state_reason": "completed",
            "title": "Add export",
            "html_url": "https://github.com/octo/repo/pull/7",
            "labels": [{ "name": "bug", "color": "d73a4a" }, { "name": "ui" }],
            "assignees": [{ "login": "octocat", "id": 1 }],
            "created_at": "2024-01-01T10:00:00Z",
            "closed_at": "2024-01-02T10:00:00Z",
            "milestone": {
                "title": "v1",
                "state": "open",
                "due_on": null,
                "html_url": "https://github.com/octo/repo/milestone/1"
            },
            "pull_request": { "html_url": "https://github.com/octo/repo/pull/7" }
        });

        let issue: Issue = serde_json::from_value(raw).unwrap();
        assert!(issue.is_pull_request());
        assert!(issue.has_assignees());
        assert_eq!(issue.labels.len(), 2);
        assert_eq!(issue.milestone.as_ref().unwrap().due_on, None);
        assert_eq!(issue.last_assigned_at, None);
    }

    #[test]
    fn tolerates_null_optional_fields() {
        let raw = serde_json::json!({
            "number": 1,
            "state": "open",
            "state_reason": null,
            "title": "A",
            "html_url": "https://github.com/octo/repo/issues/1",
            "labels": [],
            "assignees": [],
            "created_at": "2024-01-01T10:00:00Z",
            "closed_at": null,
            "milestone": null
        });

        let issue: Issue = serde_json::from_value(raw).unwrap();
        assert!(!issue.is_pull_request());
        assert!(!issue.has_assignees());
        assert!(issue.closed_at.is_none());
        assert!(issue.milestone.is_none());
    }
}
