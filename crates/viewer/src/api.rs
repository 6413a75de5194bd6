//! HTTP access to the game-library service

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use shelfware_core::{
    games_from_value, summary_from_value, Game, LibrarySummary, Result, ShelfwareError, SortBy,
};

/// Timeout for the liveness probe
const TEST_TIMEOUT: Duration = Duration::from_secs(5);
/// Timeout for the metadata endpoint
const INFO_TIMEOUT: Duration = Duration::from_secs(10);

/// Service metadata from the info endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub usage: String,
}

/// The game-library service as the viewer sees it
#[async_trait]
pub trait LibraryService {
    /// Liveness probe against the test endpoint
    async fn test_connection(&self) -> Result<bool>;

    /// Service metadata
    async fn api_info(&self) -> Result<ApiInfo>;

    /// Owned games for a user, normalized at the boundary
    async fn user_games(&self, steam_id: &str, sort: SortBy) -> Result<Vec<Game>>;

    /// Aggregate dashboard for a user
    async fn user_dashboard(&self, steam_id: &str) -> Result<LibrarySummary>;
}

/// reqwest-backed implementation against the REST endpoints
pub struct HttpLibraryService {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpLibraryService {
    pub fn new(server_url: &str, timeout: Duration) -> HttpLibraryService {
        HttpLibraryService {
            client: reqwest::Client::new(),
            base_url: format!("{}/api/games", server_url.trim_end_matches('/')),
            timeout,
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(service_error(status.as_u16(), &body));
        }

        response.json().await.map_err(request_error)
    }
}

#[async_trait]
impl LibraryService for HttpLibraryService {
    async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/test", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(TEST_TIMEOUT)
            .send()
            .await
            .map_err(request_error)?;
        Ok(response.status().is_success())
    }

    async fn api_info(&self) -> Result<ApiInfo> {
        let url = format!("{}/info", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(INFO_TIMEOUT)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(service_error(status.as_u16(), &body));
        }
        response.json().await.map_err(request_error)
    }

    async fn user_games(&self, steam_id: &str, sort: SortBy) -> Result<Vec<Game>> {
        let url = format!(
            "{}/{}?sortBy={}",
            self.base_url,
            urlencoding::encode(steam_id),
            sort
        );
        tracing::debug!(steam_id = %steam_id, sort = %sort, "fetching games");

        let body = self.get_json(&url).await?;
        games_from_value(body)
    }

    async fn user_dashboard(&self, steam_id: &str) -> Result<LibrarySummary> {
        let url = format!(
            "{}/{}/dashboard",
            self.base_url,
            urlencoding::encode(steam_id)
        );
        tracing::debug!(steam_id = %steam_id, "fetching dashboard");

        let body = self.get_json(&url).await?;
        summary_from_value(body)
    }
}

fn request_error(e: reqwest::Error) -> ShelfwareError {
    if e.is_timeout() {
        ShelfwareError::Timeout("the service took too long to answer".to_string())
    } else if e.is_decode() {
        ShelfwareError::InvalidInput(format!("unreadable response: {e}"))
    } else {
        ShelfwareError::Network(e.to_string())
    }
}

/// Map an error response to the user-facing message for its status
fn service_error(status: u16, body: &str) -> ShelfwareError {
    let message = match status {
        400 => "Invalid request. Check the Steam ID.".to_string(),
        404 => "Steam ID not found or profile does not exist.".to_string(),
        500 => "Internal server error. Try again later.".to_string(),
        503 => "Service temporarily unavailable.".to_string(),
        _ => {
            let detail = if body.trim().is_empty() {
                "unknown error"
            } else {
                body.trim()
            };
            format!("HTTP error {status}: {detail}")
        }
    };
    ShelfwareError::Service { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message_for(status: u16, body: &str) -> String {
        match service_error(status, body) {
            ShelfwareError::Service { message, .. } => message,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn known_statuses_have_fixed_messages() {
        assert_eq!(message_for(400, ""), "Invalid request. Check the Steam ID.");
        assert_eq!(
            message_for(404, "whatever"),
            "Steam ID not found or profile does not exist."
        );
        assert_eq!(message_for(500, ""), "Internal server error. Try again later.");
        assert_eq!(message_for(503, ""), "Service temporarily unavailable.");
    }

    #[test]
    fn other_statuses_carry_the_body() {
        assert_eq!(message_for(418, "teapot"), "HTTP error 418: teapot");
        assert_eq!(message_for(418, "  "), "HTTP error 418: unknown error");
    }

    #[test]
    fn api_info_tolerates_partial_payloads() {
        let info: ApiInfo = serde_json::from_value(json!({"name": "library-api"})).unwrap();
        assert_eq!(info.name, "library-api");
        assert_eq!(info.version, "");
    }
}
