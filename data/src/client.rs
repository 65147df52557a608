use crate::GameRecord;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

/// Hosted season snapshot: one JSON array covering 2000 through 2025.
const DEFAULT_DATA_URL: &str =
    "https://linealchamps.github.io/ncaaf/2000-2025_winners.json";

/// Season snapshot client. The dataset is fetched exactly once at startup;
/// there is no refresh and no retry.
#[derive(Debug, Clone)]
pub struct SeasonDataClient {
    client: Client,
    url: String,
    timeout: Duration,
}

impl Default for SeasonDataClient {
    fn default() -> Self {
        let url = std::env::var("LINEAL_DATA_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_URL.to_owned());
        Self {
            client: Client::builder()
                .user_agent("linealtui/0.1 (terminal timeline viewer)")
                .build()
                .unwrap_or_default(),
            url,
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    Snapshot(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::Snapshot(msg) => write!(f, "Snapshot error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl SeasonDataClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Self::default() }
    }

    /// Load the season snapshot.
    ///
    /// `LINEAL_SEASON_JSON` points the loader at a local file instead of the
    /// network — handy offline and in CI. Otherwise a single GET against the
    /// configured URL; any failure surfaces as a load error, never a retry.
    pub async fn fetch_games(&self) -> ApiResult<Vec<GameRecord>> {
        if let Ok(path) = std::env::var("LINEAL_SEASON_JSON")
            && !path.trim().is_empty()
        {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| ApiError::Snapshot(format!("could not read {path}: {e}")))?;
            return serde_json::from_str(&content)
                .map_err(|e| ApiError::Snapshot(format!("invalid season json at {path}: {e}")));
        }

        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, self.url.clone()))?
            .error_for_status()
            .map_err(|e| ApiError::Api(e, self.url.clone()))?;

        response
            .json::<Vec<GameRecord>>()
            .await
            .map_err(|e| ApiError::Parsing(e, self.url.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {
            "season": 2000,
            "seasonType": "regular",
            "week": 1,
            "total_week": 0,
            "homeId": 201,
            "homeTeam": "Oklahoma",
            "awayId": 251,
            "awayTeam": "Texas",
            "homePoints": 63,
            "awayPoints": 14,
            "winner_id": 201,
            "state": "TX"
        }
    ]"#;

    #[tokio::test]
    async fn fetch_games_parses_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/2000-2025_winners.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PAYLOAD)
            .create_async()
            .await;

        let client =
            SeasonDataClient::with_url(format!("{}/2000-2025_winners.json", server.url()));
        let games = client.fetch_games().await.expect("payload should parse");

        mock.assert_async().await;
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].winner_name(), "Oklahoma");
        assert_eq!(games[0].total_week, 0);
    }

    #[tokio::test]
    async fn fetch_games_surfaces_server_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/2000-2025_winners.json")
            .with_status(503)
            .create_async()
            .await;

        let client =
            SeasonDataClient::with_url(format!("{}/2000-2025_winners.json", server.url()));
        let err = client.fetch_games().await.expect_err("503 must be an error");
        assert!(matches!(err, ApiError::Api(..)));
    }

    #[tokio::test]
    async fn fetch_games_surfaces_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/2000-2025_winners.json")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client =
            SeasonDataClient::with_url(format!("{}/2000-2025_winners.json", server.url()));
        let err = client.fetch_games().await.expect_err("bad body must be an error");
        assert!(matches!(err, ApiError::Parsing(..)));
    }
}
