use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("PUBG API status error: {0}")]
    Api(reqwest::StatusCode),

    #[error("Player not found: {name} on {platform}")]
    PlayerNotFound { name: String, platform: String },

    #[error("No ranked data for season {season_id}")]
    NoRankedData { season_id: String },

    #[error("Ranked response carries no squad game mode stats")]
    MissingSquadStats,

    #[error("Invalid platform: {0}")]
    InvalidPlatform(String),

    #[error("Player name is empty")]
    EmptyPlayerName,

    #[error("Current season is not resolved")]
    MissingSeason,
}

impl AppError {
    /// Single replaceable status string shown to the user. Transport and
    /// decoding details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::PlayerNotFound { .. } => "player not found".into(),
            Self::NoRankedData { .. } => "no ranked data this season".into(),
            Self::MissingSquadStats => "no ranked squad data this season".into(),
            Self::EmptyPlayerName => "enter a player name".into(),
            Self::MissingSeason => "current season is unavailable, try another platform".into(),
            Self::InvalidPlatform(p) => format!("unknown platform: {p}"),
            Self::Config(msg) => msg.clone(),
            Self::Http(_) | Self::Api(_) => "failed to fetch data, try again".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_errors_map_to_specific_messages() {
        let err = AppError::PlayerNotFound {
            name: "shroud".into(),
            platform: "steam".into(),
        };
        assert_eq!(err.user_message(), "player not found");

        let err = AppError::NoRankedData {
            season_id: "division.bro.official.pc-2023-01".into(),
        };
        assert_eq!(err.user_message(), "no ranked data this season");
    }

    #[test]
    fn transport_errors_map_to_generic_message() {
        let err = AppError::Api(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "failed to fetch data, try again");
    }
}
