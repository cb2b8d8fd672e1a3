use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::AppError;

use super::{client::PubgClient, traits::PlayerApi, Platform};

/// A player uniquely resolved from (platform, name) at lookup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub shard_id: String,
}

/// Representation of the players-by-name response.
#[derive(Deserialize, Debug)]
struct PlayersResponse {
    data: Vec<PlayerDto>,
}

#[derive(Deserialize, Debug)]
struct PlayerDto {
    id: String,
    attributes: PlayerAttributesDto,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PlayerAttributesDto {
    name: String,
    shard_id: String,
}

impl From<PlayerDto> for Player {
    fn from(value: PlayerDto) -> Self {
        Self {
            id: value.id,
            name: value.attributes.name,
            shard_id: value.attributes.shard_id,
        }
    }
}

#[async_trait]
impl PlayerApi for PubgClient {
    /// The first match returned by the API is used. Both an empty result
    /// array and an HTTP 404 map to [`AppError::PlayerNotFound`].
    async fn get_player_by_name(
        &self,
        platform: Platform,
        name: &str,
    ) -> Result<Player, AppError> {
        tracing::trace!("[PUBG::CLIENT] get_player_by_name {} on {}", name, platform);

        let path = format!(
            "{}/players?filter[playerNames]={}",
            self.shard_url(platform),
            urlencoding::encode(name),
        );

        let not_found = || AppError::PlayerNotFound {
            name: name.to_string(),
            platform: platform.to_string(),
        };

        let res: PlayersResponse = match self.request(path).await {
            Ok(res) => res,
            Err(AppError::Api(StatusCode::NOT_FOUND)) => return Err(not_found()),
            Err(err) => return Err(err),
        };

        res.data
            .into_iter()
            .next()
            .map(Into::into)
            .ok_or_else(not_found)
    }
}
