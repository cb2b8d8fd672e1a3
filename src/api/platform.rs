use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Shard routing values for the PUBG API. Every endpoint used here lives
/// under a `/shards/{platform}` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Kakao,
    Steam,
    Xbox,
    Psn,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kakao => "kakao",
            Self::Steam => "steam",
            Self::Xbox => "xbox",
            Self::Psn => "psn",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Kakao => "Kakao",
            Self::Steam => "Steam",
            Self::Xbox => "Xbox",
            Self::Psn => "PlayStation",
        }
    }

    pub const ALL: [Platform; 4] = [Self::Kakao, Self::Steam, Self::Xbox, Self::Psn];
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kakao" => Ok(Self::Kakao),
            "steam" => Ok(Self::Steam),
            "xbox" => Ok(Self::Xbox),
            "psn" | "playstation" => Ok(Self::Psn),
            _ => Err(AppError::InvalidPlatform(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
