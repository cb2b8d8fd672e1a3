//! PUBG ranked stat search.
//!
//! Typed wrappers around the three PUBG API endpoints used by the flow
//! (seasons listing, players by name, per-season ranked stats) and the
//! session orchestrating them: resolve the shard's current season, look the
//! player up by name, fetch that player's ranked squad statistics.

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod search;
