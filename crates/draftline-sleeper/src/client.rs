// HTTP client for the Sleeper REST API (read-only, no authentication).

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::SleeperError;
use crate::models::{Draft, DraftPickRecord, DraftState, League, LeagueUser, Roster, User};
use crate::source::DraftSource;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const DEFAULT_BASE_URL: &str = "https://api.sleeper.app/v1";

// ---------------------------------------------------------------------------
// SleeperClient
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: reqwest::Client,
    base_url: String,
}

impl SleeperClient {
    /// Create a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SleeperError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("draftline/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SleeperError::Client)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SleeperError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| SleeperError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SleeperError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| SleeperError::Decode { url, source })
    }

    /// Look up a user by username. Sleeper answers `null` for unknown names.
    pub async fn user(&self, username: &str) -> Result<User, SleeperError> {
        let user: Option<User> = self.get_json(&format!("user/{username}")).await?;
        user.ok_or_else(|| SleeperError::NotFound {
            what: format!("Sleeper user '{username}'"),
        })
    }

    /// NFL leagues the user belongs to in `season`.
    pub async fn user_leagues(
        &self,
        user_id: &str,
        season: &str,
    ) -> Result<Vec<League>, SleeperError> {
        let leagues: Option<Vec<League>> = self
            .get_json(&format!("user/{user_id}/leagues/nfl/{season}"))
            .await?;
        Ok(leagues.unwrap_or_default())
    }
}

#[async_trait]
impl DraftSource for SleeperClient {
    async fn league(&self, league_id: &str) -> Result<League, SleeperError> {
        let league: Option<League> = self.get_json(&format!("league/{league_id}")).await?;
        league.ok_or_else(|| SleeperError::NotFound {
            what: format!("league {league_id}"),
        })
    }

    async fn draft(&self, draft_id: &str) -> Result<Draft, SleeperError> {
        let draft: Option<Draft> = self.get_json(&format!("draft/{draft_id}")).await?;
        draft.ok_or_else(|| SleeperError::NotFound {
            what: format!("draft {draft_id}"),
        })
    }

    async fn draft_picks(&self, draft_id: &str) -> Result<Vec<DraftPickRecord>, SleeperError> {
        let picks: Option<Vec<DraftPickRecord>> =
            self.get_json(&format!("draft/{draft_id}/picks")).await?;
        Ok(picks.unwrap_or_default())
    }

    async fn draft_state(&self, draft_id: &str) -> Result<DraftState, SleeperError> {
        let state: Option<DraftState> = self.get_json(&format!("draft/{draft_id}/state")).await?;
        Ok(state.unwrap_or_default())
    }

    async fn rosters(&self, league_id: &str) -> Result<Vec<Roster>, SleeperError> {
        let rosters: Option<Vec<Roster>> =
            self.get_json(&format!("league/{league_id}/rosters")).await?;
        Ok(rosters.unwrap_or_default())
    }

    async fn league_users(&self, league_id: &str) -> Result<Vec<LeagueUser>, SleeperError> {
        let users: Option<Vec<LeagueUser>> =
            self.get_json(&format!("league/{league_id}/users")).await?;
        Ok(users.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slashes() {
        let client =
            SleeperClient::new("https://api.sleeper.app/v1/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.url("/league/123"),
            "https://api.sleeper.app/v1/league/123"
        );
        assert_eq!(
            client.url("draft/9/picks"),
            "https://api.sleeper.app/v1/draft/9/picks"
        );
    }

    #[tokio::test]
    async fn unreachable_host_is_http_error() {
        // Port 9 on localhost is the discard service and normally closed.
        let client = SleeperClient::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        let err = client.league("1").await.unwrap_err();
        assert!(matches!(err, SleeperError::Http { .. }), "got {err}");
    }
}
