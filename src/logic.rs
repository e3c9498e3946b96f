use async_trait::async_trait;
use tracing::{debug, info};

use crate::actions;
use crate::args::Args;
use crate::clients::github::GitHubClient;
use crate::clients::sheets::SheetsClient;
use crate::config::ImportConfig;
use crate::error::ImportResult;
use crate::models::events::IssueEvent;
use crate::models::issues::Issue;
use crate::models::sheets::SheetRow;
use crate::utils::constants::ASSIGNED_EVENT;
use crate::utils::format::format_row;

/// Read side: the repository's issue tracker.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// One page of issues and pull requests in every state, 1-based.
    async fn issues_page(&self, page: u32) -> ImportResult<Vec<Issue>>;

    /// The issue's full event history, oldest first.
    async fn issue_events(&self, number: u64) -> ImportResult<Vec<IssueEvent>>;
}

/// Write side: one spreadsheet document.
#[async_trait]
pub trait SheetSink: Send + Sync {
    async fn clear(&self, range: &str) -> ImportResult<()>;

    async fn append(&self, range: &str, rows: &[SheetRow]) -> ImportResult<()>;
}

/// Validates the raw inputs, then runs the export. Returns the number of
/// exported rows.
pub async fn start(args: Args) -> ImportResult<usize> {
    let config = {
        let _group = actions::group("Checking inputs");
        let config = ImportConfig::from_args(args)?;
        debug!(?config, "inputs accepted");
        config
    };
    run(&config).await
}

pub async fn run(config: &ImportConfig) -> ImportResult<usize> {
    let github = {
        let _group = actions::group("Initializing GitHub client");
        if config.github_token.is_none() {
            actions::warning("GitHub access token is not provided");
        }
        let client = GitHubClient::new(
            &config.github_api_url,
            config.repository.clone(),
            config.github_token.clone(),
        )?;
        info!(
            authenticated = client.is_authenticated(),
            repository = %config.repository,
            "GitHub client ready"
        );
        client
    };

    let issues = {
        let _group = actions::group(&format!("Getting all issues in {}", config.repository));
        let mut issues = collect_issues(&github).await?;
        info!("all pages processed, searching for assignments");
        enrich_last_assignment(&github, &mut issues).await?;
        issues
    };

    let sheets = {
        let _group = actions::group("Authenticating via Google API service account");
        let client = SheetsClient::authenticate(
            &config.sheets_api_url,
            &config.document_id,
            &config.service_account_credentials,
        )
        .await?;
        info!("Sheets client ready");
        client
    };

    publish(&sheets, &config.sheet_name, &issues).await
}

/// Requests page 1, 2, ... until a page comes back empty.
pub async fn collect_issues(source: &dyn IssueSource) -> ImportResult<Vec<Issue>> {
    let mut issues = Vec::new();
    let mut page = 1;
    loop {
        info!(page, "getting issues page");
        let batch = source.issues_page(page).await?;
        info!(page, count = batch.len(), "received issues");
        if batch.is_empty() {
            break;
        }
        issues.extend(batch);
        page += 1;
    }
    Ok(issues)
}

/// Timestamp of the most recent `assigned` event, trusting the API's order.
pub fn last_assignment(events: &[IssueEvent]) -> Option<&str> {
    events
        .iter()
        .rev()
        .find(|e| e.event == ASSIGNED_EVENT)
        .map(|e| e.created_at.as_str())
}

/// Fills `last_assigned_at` for every issue that has assignees.
pub async fn enrich_last_assignment(
    source: &dyn IssueSource,
    issues: &mut [Issue],
) -> ImportResult<()> {
    for issue in issues.iter_mut().filter(|i| i.has_assignees()) {
        info!(number = issue.number, title = %issue.title, "getting events");
        let events = source.issue_events(issue.number).await?;
        debug!(number = issue.number, count = events.len(), "received events");
        issue.last_assigned_at = last_assignment(&events).map(str::to_string);
    }
    Ok(())
}

pub fn format_rows(issues: &[Issue]) -> Vec<SheetRow> {
    issues.iter().map(format_row).collect()
}

/// Clears the sheet, then appends the header and every issue row.
pub async fn publish(
    sink: &dyn SheetSink,
    sheet_name: &str,
    issues: &[Issue],
) -> ImportResult<usize> {
    {
        let _group = actions::group(&format!("Cleaning old sheet ({sheet_name})"));
        sink.clear(sheet_name).await?;
        info!(sheet_name, "sheet cleared");
    }

    let rows = {
        let _group = actions::group("Formatting issues for Sheets");
        let rows = format_rows(issues);
        for row in &rows {
            debug!(row = %serde_json::to_string(row).unwrap_or_default(), "formatted");
        }
        rows
    };

    let _group = actions::group(&format!("Adding issues to sheet ({sheet_name})"));
    let range = format!("{sheet_name}!A1:1");
    info!("adding header");
    sink.append(&range, &[SheetRow::header()]).await?;
    info!(count = rows.len(), "appending data");
    sink.append(&range, &rows).await?;
    Ok(rows.len())
}
