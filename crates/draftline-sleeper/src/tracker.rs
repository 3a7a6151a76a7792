// Per-cycle polling of one Sleeper draft.
//
// `DraftTracker::refresh` never fails: every fetch error degrades to cached
// data or defaults and is logged. League metadata, display names and the
// pick list are cached with their own TTLs.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use draftline_core::cache::{Cached, Freshness, LEAGUE_TTL_SECS, PICKS_TTL_SECS, USERS_TTL_SECS};
use draftline_core::draft::order::{turn_for_owner, DraftConfig, TurnStatus};
use draftline_core::draft::pick::{sort_in_draft_order, Pick};

use crate::models::{display_names, Draft, League};
use crate::resolve::{draft_config, has_slot_information, in_draft_order};
use crate::source::DraftSource;

/// Everything one poll learned about the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftSnapshot {
    pub league_name: Option<String>,
    pub draft_id: Option<String>,
    /// Sleeper's draft status string ("pre_draft", "drafting", ...).
    pub draft_status: Option<String>,
    pub config: DraftConfig,
    /// Picks in draft order. Their count is the draft cursor.
    pub picks: Vec<Pick>,
    pub freshness: Freshness,
    pub turn: TurnStatus,
    /// user id -> display name.
    pub owner_names: HashMap<String, String>,
    pub taken_at: DateTime<Utc>,
}

impl DraftSnapshot {
    pub fn picks_made(&self) -> u32 {
        u32::try_from(self.picks.len()).unwrap_or(u32::MAX)
    }
}

pub struct DraftTracker<S: DraftSource> {
    source: S,
    league_id: String,
    user_id: String,
    league: Option<Cached<League>>,
    names: Option<Cached<HashMap<String, String>>>,
    picks: Option<Cached<Vec<Pick>>>,
}

impl<S: DraftSource> DraftTracker<S> {
    pub fn new(source: S, league_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            source,
            league_id: league_id.into(),
            user_id: user_id.into(),
            league: None,
            names: None,
            picks: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn league_id(&self) -> &str {
        &self.league_id
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Poll the platform once and assemble a snapshot.
    pub async fn refresh(&mut self, now: DateTime<Utc>) -> DraftSnapshot {
        let league = self.league(now).await;
        let draft_id = league.as_ref().and_then(|l| l.draft_id()).map(str::to_string);

        let draft = match draft_id.as_deref() {
            Some(id) => match self.source.draft(id).await {
                Ok(draft) => Some(draft),
                Err(e) => {
                    warn!("failed to fetch draft {}: {}", id, e);
                    None
                }
            },
            None => {
                if league.is_some() {
                    warn!("league {} has no draft id", self.league_id);
                }
                None
            }
        };

        let (picks, freshness) = self.picks(draft_id.as_deref(), now).await;
        let owner_names = self.owner_names(now).await;
        let (config, turn) = self
            .turn(league.as_ref(), draft.as_ref(), picks.len())
            .await;

        debug!(
            "refreshed draft {:?}: {} picks ({:?}), turn {:?}",
            draft_id,
            picks.len(),
            freshness,
            turn
        );

        DraftSnapshot {
            league_name: league.as_ref().map(|l| l.display_name().to_string()),
            draft_id,
            draft_status: draft.and_then(|d| d.status),
            config,
            picks,
            freshness,
            turn,
            owner_names,
            taken_at: now,
        }
    }

    /// League metadata, refetched once the cached copy expires. A failed
    /// refetch keeps the expired copy.
    async fn league(&mut self, now: DateTime<Utc>) -> Option<League> {
        if let Some(league) = self.league.as_ref().and_then(|c| c.fresh(now)) {
            return Some(league.clone());
        }
        match self.source.league(&self.league_id).await {
            Ok(league) => {
                if self.league.is_none() {
                    info!(
                        "following league '{}' ({} rosters)",
                        league.display_name(),
                        league.total_rosters.unwrap_or(0)
                    );
                }
                self.league = Some(Cached::new(
                    league.clone(),
                    now,
                    Duration::seconds(LEAGUE_TTL_SECS),
                ));
                Some(league)
            }
            Err(e) => {
                warn!("failed to fetch league {}: {}", self.league_id, e);
                self.league.as_ref().map(|c| c.value.clone())
            }
        }
    }

    /// The pick list. A fresh cache entry is reused without a request; after
    /// a failed fetch the last list is served as stale.
    async fn picks(
        &mut self,
        draft_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> (Vec<Pick>, Freshness) {
        if let Some(picks) = self.picks.as_ref().and_then(|c| c.fresh(now)) {
            return (picks.clone(), Freshness::Fresh);
        }

        let fetched = match draft_id {
            Some(id) => self.source.draft_picks(id).await.map_err(|e| e.to_string()),
            None => Err("no draft id".to_string()),
        };

        match fetched {
            Ok(records) => {
                let mut picks: Vec<Pick> = records.iter().map(|r| r.to_pick()).collect();
                sort_in_draft_order(&mut picks);
                self.picks = Some(Cached::new(
                    picks.clone(),
                    now,
                    Duration::seconds(PICKS_TTL_SECS),
                ));
                (picks, Freshness::Fresh)
            }
            Err(reason) => match self.picks.as_ref() {
                Some(cached) => {
                    warn!(
                        "failed to fetch picks ({}); reusing {} picks from {}",
                        reason,
                        cached.value.len(),
                        cached.fetched_at
                    );
                    (
                        cached.value.clone(),
                        Freshness::Stale {
                            fetched_at: cached.fetched_at,
                        },
                    )
                }
                None => {
                    warn!("failed to fetch picks ({}); no earlier list to reuse", reason);
                    (Vec::new(), Freshness::Unavailable)
                }
            },
        }
    }

    /// League member display names, cached for a few minutes.
    async fn owner_names(&mut self, now: DateTime<Utc>) -> HashMap<String, String> {
        if let Some(names) = self.names.as_ref().and_then(|c| c.fresh(now)) {
            return names.clone();
        }
        match self.source.league_users(&self.league_id).await {
            Ok(users) => {
                let names = display_names(&users);
                self.names = Some(Cached::new(
                    names.clone(),
                    now,
                    Duration::seconds(USERS_TTL_SECS),
                ));
                names
            }
            Err(e) => {
                warn!("failed to fetch league users: {}", e);
                self.names
                    .as_ref()
                    .map(|c| c.value.clone())
                    .unwrap_or_default()
            }
        }
    }

    /// Resolve the draft config and the user's turn status.
    async fn turn(
        &self,
        league: Option<&League>,
        draft: Option<&Draft>,
        picks_made: usize,
    ) -> (DraftConfig, TurnStatus) {
        let Some(draft) = draft else {
            return (draft_config(None, league, &[]), TurnStatus::Undetermined);
        };
        let cursor = u32::try_from(picks_made).unwrap_or(u32::MAX);

        if !has_slot_information(draft) {
            let config = draft_config(Some(draft), league, &[]);
            if cursor >= config.total_picks() {
                return (config, TurnStatus::Complete);
            }
            let turn = match self.source.draft_state(&draft.draft_id).await {
                Ok(state) if state.current_player.as_deref() == Some(self.user_id.as_str()) => {
                    TurnStatus::OnTheClock
                }
                Ok(_) => TurnStatus::Waiting,
                Err(e) => {
                    warn!("no slot data and draft state unavailable: {}", e);
                    TurnStatus::Undetermined
                }
            };
            return (config, turn);
        }

        let rosters = if in_draft_order(draft, &self.user_id) {
            Vec::new()
        } else {
            match self.source.rosters(&self.league_id).await {
                Ok(rosters) => rosters,
                Err(e) => {
                    warn!("failed to fetch rosters: {}", e);
                    Vec::new()
                }
            }
        };

        let config = draft_config(Some(draft), league, &rosters);
        if let Err(e) = config.check_slots() {
            warn!("inconsistent draft slots: {}", e);
        }
        let turn = turn_for_owner(&config, cursor, &self.user_id);
        (config, turn)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
