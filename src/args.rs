use clap::Parser;

use crate::utils::constants::{GITHUB_API_URL, SHEETS_API_URL};

/// Every option falls back to the GitHub Actions input variable of the same
/// name, so the binary runs unchanged as an action step.
#[derive(Parser, Debug)]
#[command(name = "issue-sheet-export", version, about = "Export repository issues to a Google Sheet")]
pub struct Args {
    /// Google service-account key, as JSON text
    #[arg(long, env = "INPUT_GOOGLE-API-SERVICE-ACCOUNT-CREDENTIALS", hide_env_values = true)]
    pub service_account_credentials: Option<String>,

    #[arg(long, env = "INPUT_DOCUMENT-ID")]
    pub document_id: Option<String>,

    #[arg(long, env = "INPUT_SHEET-NAME")]
    pub sheet_name: Option<String>,

    #[arg(long, env = "INPUT_GITHUB-ACCESS-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Target repository as `owner/name`
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_URL)]
    pub github_api_url: String,

    #[arg(long, env = "SHEETS_API_URL", default_value = SHEETS_API_URL)]
    pub sheets_api_url: String,
}
