use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde_json::error::Category;
use tracing::debug;

use crate::error::{ImportError, ImportResult};
use crate::models::credentials::{AssertionClaims, ServiceAccountKey, TokenResponse};
use crate::utils::constants::{ASSERTION_LIFETIME_SECS, JWT_BEARER_GRANT, SHEETS_SCOPE};

/// Unparseable JSON is a data format error; JSON that is not a usable
/// service-account key is a rejected credential.
pub fn parse_key(credentials_json: &str) -> ImportResult<ServiceAccountKey> {
    serde_json::from_str(credentials_json).map_err(|e| match e.classify() {
        Category::Data => {
            ImportError::Authentication(format!("invalid service account key: {e}"))
        }
        Category::Io | Category::Syntax | Category::Eof => ImportError::DataFormat(e),
    })
}

/// Builds the RS256-signed assertion for the JWT-bearer grant.
pub fn sign_assertion(key: &ServiceAccountKey, issued_at: i64) -> ImportResult<String> {
    let claims = AssertionClaims {
        iss: &key.client_email,
        scope: SHEETS_SCOPE,
        aud: &key.token_uri,
        iat: issued_at,
        exp: issued_at + ASSERTION_LIFETIME_SECS,
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| ImportError::Authentication(format!("invalid service account private key: {e}")))?;
    encode(&header, &claims, &signing_key)
        .map_err(|e| ImportError::Authentication(format!("could not sign assertion: {e}")))
}

/// Exchanges a service-account key for a Sheets-scoped access token.
pub async fn fetch_access_token(client: &Client, key: &ServiceAccountKey) -> ImportResult<String> {
    let assertion = sign_assertion(key, Utc::now().timestamp())?;

    debug!(token_uri = %key.token_uri, client_email = %key.client_email, "requesting access token");
    let response = client
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ImportError::Authentication(format!(
            "token endpoint rejected service account {} (HTTP {status}): {body}",
            key.client_email
        )));
    }

    let token: TokenResponse = response.json().await?;
    debug!(expires_in = ?token.expires_in, "access token granted");
    Ok(token.access_token)
}
