//! Typed wrappers around the three PUBG API endpoints used by the search
//! flow: seasons listing, players by name and per-season ranked stats.

pub mod client;
pub mod metrics;
pub mod platform;
pub mod players;
pub mod ranked;
pub mod seasons;
pub mod traits;

pub use client::PubgClient;
pub use platform::Platform;
pub use players::Player;
pub use ranked::{RankedSquadStats, Tier};
pub use seasons::{CurrentSeason, Season, FALLBACK_SEASON_ID};

impl traits::PubgApiFull for PubgClient {}
