//! Plain-text rendering of the two result blocks: the player summary and
//! the ranked squad stats for the current season.

use std::fmt::Write;

use crate::api::{Player, RankedSquadStats};

/// Shown in place of absent or zero-valued fields.
pub const PLACEHOLDER: &str = "n/a";

pub fn player_summary(player: &Player) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Player");
    let _ = writeln!(out, "  name:     {}", player.name);
    let _ = writeln!(out, "  platform: {}", player.shard_id);
    let _ = writeln!(out, "  id:       {}", player.id);
    out
}

pub fn ranked_summary(stats: &RankedSquadStats) -> String {
    let avg_damage = if stats.avg_damage > 0.0 {
        format!("{:.2}", stats.avg_damage)
    } else {
        PLACEHOLDER.into()
    };
    let win_rate = match stats.win_rate() {
        Some(rate) => format!("{rate:.2}%"),
        None => PLACEHOLDER.into(),
    };
    let tier = match &stats.current_tier {
        Some(t) => format!("{} {}", t.tier, t.sub_tier),
        None => PLACEHOLDER.into(),
    };
    let rank_points = if stats.current_rank_point > 0 {
        stats.current_rank_point.to_string()
    } else {
        PLACEHOLDER.into()
    };

    let mut out = String::new();
    let _ = writeln!(out, "Ranked squad (current season)");
    let _ = writeln!(out, "  avg damage:    {avg_damage}");
    let _ = writeln!(out, "  win rate:      {win_rate}");
    let _ = writeln!(out, "  tier:          {tier}");
    let _ = writeln!(out, "  rank points:   {rank_points}");
    let _ = writeln!(out, "  rounds played: {}", stats.rounds_played);
    out
}

#[cfg(test)]
mod tests {
    use crate::api::Tier;

    use super::*;

    fn stats() -> RankedSquadStats {
        RankedSquadStats {
            avg_damage: 321.456,
            wins: 10,
            rounds_played: 20,
            current_tier: Some(Tier {
                tier: "Gold".into(),
                sub_tier: "3".into(),
            }),
            current_rank_point: 2345,
        }
    }

    #[test]
    fn ranked_block_formats_win_rate_as_percentage() {
        let block = ranked_summary(&stats());

        assert!(block.contains("win rate:      50.00%"));
        assert!(block.contains("avg damage:    321.46"));
        assert!(block.contains("tier:          Gold 3"));
        assert!(block.contains("rank points:   2345"));
        assert!(block.contains("rounds played: 20"));
    }

    #[test]
    fn ranked_block_uses_placeholders_without_rounds() {
        let empty = RankedSquadStats {
            avg_damage: 0.0,
            wins: 0,
            rounds_played: 0,
            current_tier: None,
            current_rank_point: 0,
        };

        let block = ranked_summary(&empty);

        assert!(block.contains(&format!("win rate:      {PLACEHOLDER}")));
        assert!(block.contains(&format!("avg damage:    {PLACEHOLDER}")));
        assert!(block.contains(&format!("tier:          {PLACEHOLDER}")));
        assert!(block.contains("rounds played: 0"));
    }

    #[test]
    fn player_block_lists_identity_fields() {
        let player = Player {
            id: "account.c0e530e9b7244b358def282782f893af".into(),
            name: "WackyJacky101".into(),
            shard_id: "steam".into(),
        };

        let block = player_summary(&player);

        assert!(block.contains("name:     WackyJacky101"));
        assert!(block.contains("platform: steam"));
        assert!(block.contains("id:       account.c0e530e9b7244b358def282782f893af"));
    }
}
