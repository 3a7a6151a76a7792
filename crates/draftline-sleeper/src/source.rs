// The data the draft tracker needs from the platform, as a capability trait
// so the tracker can run against the live API or an in-memory source.

use async_trait::async_trait;

use crate::error::SleeperError;
use crate::models::{Draft, DraftPickRecord, DraftState, League, LeagueUser, Roster};

#[async_trait]
pub trait DraftSource: Send + Sync {
    async fn league(&self, league_id: &str) -> Result<League, SleeperError>;

    async fn draft(&self, draft_id: &str) -> Result<Draft, SleeperError>;

    async fn draft_picks(&self, draft_id: &str) -> Result<Vec<DraftPickRecord>, SleeperError>;

    /// Live status; used only when the draft has no slot information.
    async fn draft_state(&self, draft_id: &str) -> Result<DraftState, SleeperError>;

    async fn rosters(&self, league_id: &str) -> Result<Vec<Roster>, SleeperError>;

    async fn league_users(&self, league_id: &str) -> Result<Vec<LeagueUser>, SleeperError>;
}
