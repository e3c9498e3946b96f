use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::clients::auth;
use crate::error::{check_status, ImportError, ImportResult};
use crate::logic::SheetSink;
use crate::models::sheets::{SheetRow, ValueRange};
use crate::utils::constants::{USER_AGENT, VALUE_INPUT_OPTION};

/// Google Sheets v4 `spreadsheets.values` client bound to one document.
pub struct SheetsClient {
    client: Client,
    base_url: String,
    document_id: String,
    access_token: String,
}

impl SheetsClient {
    /// Parses the service-account key and trades it for an access token.
    pub async fn authenticate(
        base_url: &str,
        document_id: &str,
        credentials_json: &str,
    ) -> ImportResult<Self> {
        let key = auth::parse_key(credentials_json)?;
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let access_token = auth::fetch_access_token(&client, &key).await?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            document_id: document_id.to_string(),
            access_token,
        })
    }

    fn values_url(&self, range: &str, action: &str) -> ImportResult<Url> {
        let target = format!("{range}:{action}");
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ImportError::Configuration(format!("invalid Sheets API url: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| {
                ImportError::Configuration(format!("Sheets API url cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                self.document_id.as_str(),
                "values",
                target.as_str(),
            ]);
        Ok(url)
    }
}

#[async_trait]
impl SheetSink for SheetsClient {
    async fn clear(&self, range: &str) -> ImportResult<()> {
        let response = self
            .client
            .post(self.values_url(range, "clear")?)
            .bearer_auth(&self.access_token)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        check_status("Sheets", response).await?;
        Ok(())
    }

    async fn append(&self, range: &str, rows: &[SheetRow]) -> ImportResult<()> {
        let response = self
            .client
            .post(self.values_url(range, "append")?)
            .bearer_auth(&self.access_token)
            .query(&[("valueInputOption", VALUE_INPUT_OPTION)])
            .json(&ValueRange::rows(range, rows))
            .send()
            .await?;
        check_status("Sheets", response).await?;
        Ok(())
    }
}
