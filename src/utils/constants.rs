
pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const GITHUB_PER_PAGE: u32 = 100;
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub const SHEETS_API_URL: &str = "https://sheets.googleapis.com";
pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
pub const ASSERTION_LIFETIME_SECS: i64 = 3600;

pub const VALUE_INPUT_OPTION: &str = "USER_ENTERED";
pub const MAJOR_DIMENSION: &str = "ROWS";

pub const ASSIGNED_EVENT: &str = "assigned";
pub const PULL_REQUEST_KIND: &str = "Pull Request";
pub const ISSUE_KIND: &str = "Issue";
pub const LIST_SEPARATOR: &str = ", ";

pub const COLUMN_COUNT: usize = 14;
pub const HEADER: [&str; COLUMN_COUNT] = [
    "#",
    "Status",
    "Type",
    "Title",
    "URI",
    "Labels",
    "Created At",
    "Closed At",
    "Assignees",
    "Last Assignee Date",
    "Milestone",
    "Milestone Status",
    "Milestone Deadline",
    "Milestone URI",
];
