use async_trait::async_trait;
use serde::Deserialize;

use crate::error::AppError;

use super::{client::PubgClient, traits::SeasonApi, Platform};

/// Season id substituted when a shard lists no current season. The kakao
/// shard has been observed to return season entries with no
/// `isCurrentSeason` flag set at all; this is a workaround for that upstream
/// data inconsistency, not a general rule.
pub const FALLBACK_SEASON_ID: &str = "division.bro.official.pc-2023-01";

/// A time-boxed ranked competitive period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub id: String,
    pub is_current: bool,
}

/// Outcome of current-season resolution for a shard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentSeason {
    pub id: String,
    /// True when no listed season was flagged current and the pinned
    /// fallback id was substituted.
    pub is_fallback: bool,
}

impl CurrentSeason {
    pub fn resolve(seasons: &[Season]) -> Self {
        match seasons.iter().find(|s| s.is_current) {
            Some(current) => Self {
                id: current.id.clone(),
                is_fallback: false,
            },
            None => Self {
                id: FALLBACK_SEASON_ID.to_string(),
                is_fallback: true,
            },
        }
    }
}

/// Representation of the seasons listing response.
#[derive(Deserialize, Debug)]
struct SeasonsResponse {
    data: Vec<SeasonDto>,
}

#[derive(Deserialize, Debug)]
struct SeasonDto {
    id: String,
    attributes: SeasonAttributesDto,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SeasonAttributesDto {
    #[serde(default)]
    is_current_season: bool,
}

impl From<SeasonDto> for Season {
    fn from(value: SeasonDto) -> Self {
        Self {
            id: value.id,
            is_current: value.attributes.is_current_season,
        }
    }
}

#[async_trait]
impl SeasonApi for PubgClient {
    async fn get_seasons(&self, platform: Platform) -> Result<Vec<Season>, AppError> {
        tracing::trace!("[PUBG::CLIENT] get_seasons on {}", platform);

        let path = format!("{}/seasons", self.shard_url(platform));

        let res: SeasonsResponse = self.request(path).await?;
        Ok(res.data.into_iter().map(Into::into).collect())
    }
}
