//! Authentication for the Google APIs.
//!
//! A [`CredentialProvider`] hands out an authorized [`SheetsClient`]. How
//! the access token is obtained (an environment variable for CI and service
//! accounts, or a cached authorized-user file from an interactive consent)
//! stays behind this seam.

use crate::error::{SheetError, SheetResult};
use bjj_core::CredentialsConfig;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const USER_AGENT: &str = concat!("bjj-journey/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Capability to produce an authorized HTTP client.
pub trait CredentialProvider {
    fn client(&self) -> SheetResult<SheetsClient>;
}

/// Decoded body of a successful call, or the status and body of a failed one.
#[derive(Debug)]
pub enum ApiResponse<T> {
    Success(T),
    Failure { status: u16, body: String },
}

/// Blocking HTTP client carrying a bearer token.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: reqwest::blocking::Client,
    access_token: String,
}

impl SheetsClient {
    pub fn new(access_token: impl Into<String>) -> SheetResult<Self> {
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(SheetError::Credentials {
                message: "access token is empty".to_string(),
            });
        }
        Ok(Self {
            http: http_client()?,
            access_token,
        })
    }

    /// GET `url` with `query` and decode a JSON body.
    ///
    /// Transport and decode errors are `Err`; a non-success status comes
    /// back as [`ApiResponse::Failure`] for the caller to interpret.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        url: reqwest::Url,
        query: &[(&str, &str)],
    ) -> SheetResult<ApiResponse<T>> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Ok(ApiResponse::Failure {
                status: status.as_u16(),
                body,
            });
        }
        Ok(ApiResponse::Success(response.json::<T>()?))
    }
}

fn http_client() -> SheetResult<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?)
}

/// Bearer token read from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvironmentCredentials {
    token_env: String,
}

impl EnvironmentCredentials {
    pub fn new(token_env: impl Into<String>) -> Self {
        Self {
            token_env: token_env.into(),
        }
    }

    pub fn token_env(&self) -> &str {
        &self.token_env
    }
}

impl CredentialProvider for EnvironmentCredentials {
    fn client(&self) -> SheetResult<SheetsClient> {
        let token = std::env::var(&self.token_env).map_err(|_| SheetError::Credentials {
            message: format!("environment variable {} is not set", self.token_env),
        })?;
        log::debug!("Using access token from {}", self.token_env);
        SheetsClient::new(token)
    }
}

/// Cached OAuth authorized-user file (`client_id`, `client_secret`,
/// `refresh_token`), as written by an interactive consent flow.
#[derive(Debug, Clone)]
pub struct AuthorizedUserCredentials {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthorizedUserFile {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_uri: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl AuthorizedUserCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The configured path with a leading `~/` expanded to the home directory.
    pub fn resolved_path(&self) -> PathBuf {
        expand_home(&self.path, dirs::home_dir().as_deref())
    }

    pub(crate) fn read_file(&self) -> SheetResult<AuthorizedUserFile> {
        let path = self.resolved_path();
        let content = std::fs::read_to_string(&path).map_err(|e| SheetError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| SheetError::Credentials {
            message: format!("invalid authorized user file {}: {e}", path.display()),
        })
    }
}

/// Replace a leading `~` component with `home`.
///
/// Paths without one, or when no home directory is known, come back as given.
pub(crate) fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

impl CredentialProvider for AuthorizedUserCredentials {
    fn client(&self) -> SheetResult<SheetsClient> {
        let file = self.read_file()?;
        let token_uri = file.token_uri.as_deref().unwrap_or(GOOGLE_TOKEN_URI);

        let response = http_client()?
            .post(token_uri)
            .form(&[
                ("grant_type", "refresh_token"),
                ("client_id", file.client_id.as_str()),
                ("client_secret", file.client_secret.as_str()),
                ("refresh_token", file.refresh_token.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SheetError::Credentials {
                message: format!("token refresh rejected ({status}): {body}"),
            });
        }
        let token: TokenResponse = response.json()?;
        log::debug!("Refreshed access token from {}", self.path.display());
        SheetsClient::new(token.access_token)
    }
}

/// Build the provider selected by the configuration.
pub fn provider_from_config(config: &CredentialsConfig) -> Box<dyn CredentialProvider> {
    match config {
        CredentialsConfig::Environment { token_env } => {
            Box::new(EnvironmentCredentials::new(token_env.clone()))
        }
        CredentialsConfig::AuthorizedUser { path } => {
            Box::new(AuthorizedUserCredentials::new(path.clone()))
        }
    }
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;
