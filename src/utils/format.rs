use crate::models::issues::Issue;
use crate::models::sheets::{Cell, SheetRow};
use crate::utils::constants::{ISSUE_KIND, LIST_SEPARATOR, PULL_REQUEST_KIND};

/// `open`, `closed`, or `closed-<reason>` when GitHub reports a state reason.
pub fn status(issue: &Issue) -> String {
    match issue.state_reason.as_deref().filter(|r| !r.is_empty()) {
        Some(reason) => format!("{}-{}", issue.state, reason),
        None => issue.state.clone(),
    }
}

pub fn format_row(issue: &Issue) -> SheetRow {
    let labels: Vec<&str> = issue.labels.iter().map(|l| l.name.as_str()).collect();
    let assignees: Vec<&str> = issue.assignees.iter().map(|a| a.login.as_str()).collect();
    let milestone = issue.milestone.as_ref();

    SheetRow([
        Cell::Number(issue.number),
        Cell::Text(status(issue)),
        Cell::text(if issue.is_pull_request() {
            PULL_REQUEST_KIND
        } else {
            ISSUE_KIND
        }),
        Cell::text(&issue.title),
        Cell::text(&issue.html_url),
        Cell::Text(labels.join(LIST_SEPARATOR)),
        Cell::text(&issue.created_at),
        Cell::text(issue.closed_at.as_deref().unwrap_or_default()),
        Cell::Text(assignees.join(LIST_SEPARATOR)),
        Cell::optional(issue.last_assigned_at.as_deref()),
        Cell::optional(milestone.map(|m| m.title.as_str())),
        Cell::optional(milestone.map(|m| m.state.as_str())),
        Cell::optional(milestone.and_then(|m| m.due_on.as_deref())),
        Cell::optional(milestone.map(|m| m.html_url.as_str())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::issues::{Label, Milestone, PullRequestRef, User};

    fn plain_issue() -> Issue {
        Issue {
            number: 1,
            state: "open".to_string(),
            state_reason: None,
            title: "A".to_string(),
            html_url: "https://github.com/octo/repo/issues/1".to_string(),
            labels: vec![],
            assignees: vec![],
            created_at: "2024-01-01T00:00:00Z".to_string(),
            closed_at: None,
            milestone: None,
            pull_request: None,
            last_assigned_at: None,
        }
    }

    #[test]
    fn minimal_issue_leaves_optional_cells_empty() {
        let row = format_row(&plain_issue());

        assert_eq!(
            row.cells(),
            [
                Cell::Number(1),
                Cell::text("open"),
                Cell::text("Issue"),
                Cell::text("A"),
                Cell::text("https://github.com/octo/repo/issues/1"),
                Cell::text(""),
                Cell::text("2024-01-01T00:00:00Z"),
                Cell::text(""),
                Cell::text(""),
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
            ]
        );
    }

    #[test]
    fn milestone_fills_last_four_cells() {
        let mut issue = plain_issue();
        issue.milestone = Some(Milestone {
            title: "v1".to_string(),
            state: "open".to_string(),
            due_on: Some("2024-01-01".to_string()),
            html_url: "m".to_string(),
        });

        let row = format_row(&issue);
        assert_eq!(
            row.cells()[10..],
            [
                Cell::text("v1"),
                Cell::text("open"),
                Cell::text("2024-01-01"),
                Cell::text("m"),
            ]
        );
    }

    #[test]
    fn milestone_without_due_date_leaves_deadline_empty() {
        let mut issue = plain_issue();
        issue.milestone = Some(Milestone {
            title: "backlog".to_string(),
            state: "open".to_string(),
            due_on: None,
            html_url: "m".to_string(),
        });

        assert_eq!(format_row(&issue).cells()[12], Cell::Empty);
    }

    #[test]
    fn closed_pull_request_with_reason_labels_and_assignees() {
        let mut issue = plain_issue();
        issue.state = "closed".to_string();
        issue.state_reason = Some("not_planned".to_string());
        issue.pull_request = Some(PullRequestRef {});
        issue.closed_at = Some("2024-02-01T00:00:00Z".to_string());
        issue.labels = vec![
            Label { name: "bug".to_string() },
            Label { name: "ui".to_string() },
        ];
        issue.assignees = vec![
            User { login: "zoe".to_string() },
            User { login: "adam".to_string() },
        ];
        issue.last_assigned_at = Some("2024-01-15T00:00:00Z".to_string());

        let row = format_row(&issue);
        let cells = row.cells();
        assert_eq!(cells[1], Cell::text("closed-not_planned"));
        assert_eq!(cells[2], Cell::text("Pull Request"));
        assert_eq!(cells[5], Cell::text("bug, ui"));
        assert_eq!(cells[7], Cell::text("2024-02-01T00:00:00Z"));
        assert_eq!(cells[8], Cell::text("zoe, adam"));
        assert_eq!(cells[9], Cell::text("2024-01-15T00:00:00Z"));
    }

    #[test]
    fn blank_state_reason_is_ignored() {
        let mut issue = plain_issue();
        issue.state_reason = Some(String::new());
        assert_eq!(status(&issue), "open");
    }
}
