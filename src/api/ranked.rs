use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::AppError;

use super::{client::PubgClient, traits::RankedStatsApi, Platform};

/// Ranked performance metrics scoped to the four-player squad game mode.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedSquadStats {
    #[serde(default)]
    pub avg_damage: f64,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub rounds_played: u32,
    pub current_tier: Option<Tier>,
    #[serde(default)]
    pub current_rank_point: u32,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub tier: String,
    pub sub_tier: String,
}

impl RankedSquadStats {
    /// Fraction of rounds won, as a percentage. Undefined when no round was
    /// played.
    pub fn win_rate(&self) -> Option<f64> {
        if self.rounds_played == 0 {
            return None;
        }
        Some(f64::from(self.wins) / f64::from(self.rounds_played) * 100.0)
    }
}

/// Representation of the ranked stats response.
#[derive(Deserialize, Debug)]
struct RankedResponse {
    data: RankedDataDto,
}

#[derive(Deserialize, Debug)]
struct RankedDataDto {
    attributes: RankedAttributesDto,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RankedAttributesDto {
    #[serde(default)]
    ranked_game_mode_stats: RankedGameModeStatsDto,
}

#[derive(Deserialize, Debug, Default)]
struct RankedGameModeStatsDto {
    squad: Option<RankedSquadStats>,
}

#[async_trait]
impl RankedStatsApi for PubgClient {
    /// An HTTP 404 means the player has no ranked data for the season. A 200
    /// response without the squad sub-object maps to
    /// [`AppError::MissingSquadStats`].
    async fn get_ranked_stats(
        &self,
        platform: Platform,
        player_id: &str,
        season_id: &str,
    ) -> Result<RankedSquadStats, AppError> {
        tracing::trace!(
            "[PUBG::CLIENT] get_ranked_stats {} season {} on {}",
            player_id,
            season_id,
            platform
        );

        let path = format!(
            "{}/players/{}/seasons/{}/ranked",
            self.shard_url(platform),
            player_id,
            season_id,
        );

        let res: RankedResponse = match self.request(path).await {
            Ok(res) => res,
            Err(AppError::Api(StatusCode::NOT_FOUND)) => {
                return Err(AppError::NoRankedData {
                    season_id: season_id.to_string(),
                })
            }
            Err(err) => return Err(err),
        };

        res.data
            .attributes
            .ranked_game_mode_stats
            .squad
            .ok_or(AppError::MissingSquadStats)
    }
}
