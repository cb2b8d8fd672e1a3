//! Search orchestration: season resolution per platform, then a two-call
//! chain (player lookup, dependent ranked stats fetch) per submitted search.

use crate::api::traits::PubgApiFull;
use crate::api::{CurrentSeason, Platform, Player, RankedSquadStats};
use crate::error::AppError;

/// Display state consumed by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub player_name: String,
    pub season: Option<CurrentSeason>,
    pub player: Option<Player>,
    pub stats: Option<RankedSquadStats>,
    pub loading: bool,
    pub error: Option<String>,
    /// Non-fatal notice, currently only the fallback-season case.
    pub warning: Option<String>,
}

/// One in-flight search. Carries the generation it was started under so a
/// superseded chain can be recognized and discarded on completion.
#[derive(Debug)]
pub struct SearchTicket {
    generation: u64,
    platform: Platform,
    season_id: String,
    name: String,
}

/// Result of the player-lookup chain, before it is applied to the state.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Player resolved and ranked squad stats fetched.
    Success {
        player: Player,
        stats: RankedSquadStats,
    },
    /// Player resolved but the dependent ranked fetch failed.
    StatsUnavailable { player: Player, error: AppError },
    /// Player lookup itself failed.
    Failed(AppError),
}

/// Drives the search flow against a [`PubgApiFull`] implementation and owns
/// the resulting [`SearchState`].
#[derive(Debug)]
pub struct SearchSession<A> {
    api: A,
    platform: Platform,
    generation: u64,
    pub state: SearchState,
}

impl<A: PubgApiFull> SearchSession<A> {
    pub fn new(api: A, platform: Platform) -> Self {
        Self {
            api,
            platform,
            generation: 0,
            state: SearchState::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Re-resolve the current season for the given platform. Invoked on
    /// startup and whenever the platform selection changes.
    pub async fn change_platform(&mut self, platform: Platform) {
        self.platform = platform;
        self.state.season = None;
        self.state.warning = None;

        match self.api.get_current_season(platform).await {
            Ok(current) => {
                if current.is_fallback {
                    tracing::warn!(
                        "no current season flagged on {}, using fallback {}",
                        platform,
                        current.id
                    );
                    self.state.warning = Some(format!(
                        "no current season flagged for {platform}, using fallback season"
                    ));
                }
                self.state.season = Some(current);
            }
            Err(err) => {
                tracing::error!("season resolution failed on {}: {}", platform, err);
                self.state.error = Some("failed to fetch current season".into());
            }
        }
    }

    /// Validate the input and open a new search. Validation failures set the
    /// error without issuing any network call. On success, prior
    /// player/stats/error are cleared, the loading flag is raised and any
    /// still-running chain is superseded.
    pub fn begin_search(&mut self, name: &str) -> Option<SearchTicket> {
        let name = name.trim();
        if name.is_empty() {
            self.state.error = Some(AppError::EmptyPlayerName.user_message());
            return None;
        }
        let Some(season) = &self.state.season else {
            self.state.error = Some(AppError::MissingSeason.user_message());
            return None;
        };
        let season_id = season.id.clone();

        self.generation += 1;
        self.state.player_name = name.to_string();
        self.state.player = None;
        self.state.stats = None;
        self.state.error = None;
        self.state.loading = true;

        Some(SearchTicket {
            generation: self.generation,
            platform: self.platform,
            season_id,
            name: name.to_string(),
        })
    }

    /// Run the chain: player lookup, then the dependent ranked fetch. At
    /// most two sequential requests; no retries.
    pub async fn execute(api: &A, ticket: &SearchTicket) -> SearchOutcome {
        let player = match api.get_player_by_name(ticket.platform, &ticket.name).await {
            Ok(player) => player,
            Err(err) => return SearchOutcome::Failed(err),
        };

        match api
            .get_ranked_stats(ticket.platform, &player.id, &ticket.season_id)
            .await
        {
            Ok(stats) => SearchOutcome::Success { player, stats },
            Err(err) => SearchOutcome::StatsUnavailable { player, error: err },
        }
    }

    /// Apply a settled chain to the state. A ticket superseded by a newer
    /// search is discarded so a stale response never overwrites newer state.
    /// For a current ticket the loading flag clears unconditionally.
    pub fn complete(&mut self, ticket: SearchTicket, outcome: SearchOutcome) {
        if ticket.generation != self.generation {
            tracing::debug!(
                "discarding stale search outcome for '{}' (generation {} < {})",
                ticket.name,
                ticket.generation,
                self.generation
            );
            return;
        }

        self.state.loading = false;
        match outcome {
            SearchOutcome::Success { player, stats } => {
                self.state.player = Some(player);
                self.state.stats = Some(stats);
            }
            SearchOutcome::StatsUnavailable { player, error } => {
                tracing::debug!("ranked stats fetch failed for {}: {}", player.id, error);
                self.state.player = Some(player);
                self.state.error = Some(error.user_message());
            }
            SearchOutcome::Failed(error) => {
                tracing::debug!("player lookup failed for '{}': {}", ticket.name, error);
                self.state.error = Some(error.user_message());
            }
        }
    }

    /// One full search invocation: begin, run the chain, apply the outcome.
    pub async fn submit(&mut self, name: &str) {
        let Some(ticket) = self.begin_search(name) else {
            return;
        };
        let outcome = Self::execute(&self.api, &ticket).await;
        self.complete(ticket, outcome);
    }
}
