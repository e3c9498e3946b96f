use std::fmt;

use crate::args::Args;
use crate::error::{ImportError, ImportResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Parses `owner/name`.
    pub fn parse(full_name: &str) -> ImportResult<Self> {
        match full_name.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(ImportError::Configuration(format!(
                "invalid repository: expected 'owner/name', got '{full_name}'"
            ))),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Validated inputs of one export run.
#[derive(Clone)]
pub struct ImportConfig {
    pub service_account_credentials: String,
    pub document_id: String,
    pub sheet_name: String,
    pub github_token: Option<String>,
    pub repository: Repository,
    pub github_api_url: String,
    pub sheets_api_url: String,
}

impl ImportConfig {
    pub fn from_args(args: Args) -> ImportResult<Self> {
        let service_account_credentials = non_empty(args.service_account_credentials);
        let document_id = non_empty(args.document_id);
        let sheet_name = non_empty(args.sheet_name);

        let (Some(service_account_credentials), Some(document_id), Some(sheet_name)) =
            (service_account_credentials, document_id, sheet_name)
        else {
            return Err(ImportError::Configuration(
                "service account credentials, document id and sheet name are all required"
                    .to_string(),
            ));
        };

        let repository = non_empty(args.repository).ok_or_else(|| {
            ImportError::Configuration("repository is required (owner/name)".to_string())
        })?;

        Ok(Self {
            service_account_credentials,
            document_id,
            sheet_name,
            github_token: non_empty(args.github_token),
            repository: Repository::parse(&repository)?,
            github_api_url: args.github_api_url.trim_end_matches('/').to_string(),
            sheets_api_url: args.sheets_api_url.trim_end_matches('/').to_string(),
        })
    }
}

impl fmt::Debug for ImportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportConfig")
            .field("service_account_credentials", &"<redacted>")
            .field("document_id", &self.document_id)
            .field("sheet_name", &self.sheet_name)
            .field("github_token", &self.github_token.as_ref().map(|_| "<redacted>"))
            .field("repository", &self.repository)
            .field("github_api_url", &self.github_api_url)
            .field("sheets_api_url", &self.sheets_api_url)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
