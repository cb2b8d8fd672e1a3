use async_trait::async_trait;

use crate::error::AppError;

use super::{CurrentSeason, Platform, Player, RankedSquadStats, Season};

/// Seasons listing for a shard.
#[async_trait]
pub trait SeasonApi: Send + Sync {
    async fn get_seasons(&self, platform: Platform) -> Result<Vec<Season>, AppError>;

    /// Scan the shard's seasons for the one flagged current, falling back to
    /// the pinned season id when none is flagged.
    async fn get_current_season(&self, platform: Platform) -> Result<CurrentSeason, AppError> {
        let seasons = self.get_seasons(platform).await?;
        Ok(CurrentSeason::resolve(&seasons))
    }
}

/// Player lookup by in-game name.
#[async_trait]
pub trait PlayerApi: Send + Sync {
    async fn get_player_by_name(
        &self,
        platform: Platform,
        name: &str,
    ) -> Result<Player, AppError>;
}

/// Per-player, per-season ranked statistics.
#[async_trait]
pub trait RankedStatsApi: Send + Sync {
    async fn get_ranked_stats(
        &self,
        platform: Platform,
        player_id: &str,
        season_id: &str,
    ) -> Result<RankedSquadStats, AppError>;
}

/// All APIs required for the entire search flow.
pub trait PubgApiFull: SeasonApi + PlayerApi + RankedStatsApi {}
