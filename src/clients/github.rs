use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Repository;
use crate::error::{check_status, ImportResult};
use crate::logic::IssueSource;
use crate::models::events::IssueEvent;
use crate::models::issues::Issue;
use crate::utils::constants::{GITHUB_API_VERSION, GITHUB_PER_PAGE, USER_AGENT};

pub struct GitHubClient {
    client: Client,
    base_url: String,
    repository: Repository,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(base_url: &str, repository: Repository, token: Option<String>) -> ImportResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            repository,
            token,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_page<T: DeserializeOwned>(&self, url: &str, page: u32) -> ImportResult<Vec<T>> {
        debug!(url, page, "GET");
        let response = self
            .get(url)
            .query(&[("page", page), ("per_page", GITHUB_PER_PAGE)])
            .send()
            .await?;
        let items = check_status("GitHub", response)
            .await?
            .json::<Vec<T>>()
            .await?;
        Ok(items)
    }
}

#[async_trait]
impl IssueSource for GitHubClient {
    async fn issues_page(&self, page: u32) -> ImportResult<Vec<Issue>> {
        let url = format!(
            "{}/repos/{}/{}/issues?state=all",
            self.base_url, self.repository.owner, self.repository.name
        );
        self.get_page(&url, page).await
    }

    async fn issue_events(&self, number: u64) -> ImportResult<Vec<IssueEvent>> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/events",
            self.base_url, self.repository.owner, self.repository.name, number
        );

        let mut events = Vec::new();
        let mut page = 1;
        loop {
            let batch: Vec<IssueEvent> = self.get_page(&url, page).await?;
            if batch.is_empty() {
                break;
            }
            events.extend(batch);
            page += 1;
        }
        Ok(events)
    }
}
