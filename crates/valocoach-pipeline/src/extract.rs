// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure extraction of one player's view from a full match payload.
//!
//! [`extract_player_view`] narrows a v4 match down to the fields relevant
//! for coaching one player: match metadata, the player's aggregate summary,
//! a per-round breakdown, and the kill events the player was part of.
//!
//! Rounds where the player has no recorded stats are omitted from the round
//! list, not null-padded. Round numbers are the 1-based array position and
//! are independent of any `id` gaps in the source data.

use serde::{Deserialize, Serialize};
use valocoach_riot::types::{
    AbilityCasts, EconomySummary, Location, Match, PlayerBehavior, PlayerStats, RoundEconomy,
    RoundStats,
};

/// Everything the coach needs to know about one player in one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub match_summary: MatchSummary,
    pub player_summary: PlayerSummary,
    pub rounds: Vec<PlayerRoundView>,
    pub relevant_kills: Vec<RelevantKill>,
}

/// Match-level metadata carried alongside every view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_id: Option<String>,
    pub map_name: Option<String>,
    pub queue_name: Option<String>,
    pub started_at: Option<String>,
    pub game_length_ms: Option<i64>,
    pub is_completed: Option<bool>,
    /// Team id of the team with the `won` flag set.
    pub winning_team: Option<String>,
    /// Total rounds in the match, regardless of player participation.
    pub rounds_played: usize,
}

/// The player's identity and aggregate statistics for the match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub puuid: Option<String>,
    pub name: Option<String>,
    pub tag: Option<String>,
    pub team_id: Option<String>,
    pub agent_name: Option<String>,
    pub tier_name: Option<String>,
    pub overall_stats: Option<PlayerStats>,
    pub overall_economy: Option<EconomySummary>,
    pub overall_ability_casts: Option<AbilityCasts>,
    pub behavior: Option<PlayerBehavior>,
}

/// One round the player has recorded stats in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRoundView {
    /// Source round id; may have gaps and is not used for numbering.
    pub round_id: Option<i64>,
    /// 1-based sequence position in the source rounds array.
    pub round_number: i64,
    pub result: Option<String>,
    pub winning_team: Option<String>,
    pub bomb_planted: bool,
    pub bomb_defused: bool,
    pub plant_site: Option<String>,
    pub plant_player: Option<String>,
    pub defuse_player: Option<String>,
    pub round_economy: Option<RoundEconomy>,
    pub round_stats: Option<RoundStats>,
    pub round_ability_casts: Option<AbilityCasts>,
}

/// A kill event where the player was killer or victim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevantKill {
    pub round: Option<i64>,
    pub time_in_round_ms: Option<i64>,
    pub killer_name: Option<String>,
    pub killer_tag: Option<String>,
    pub victim_name: Option<String>,
    pub victim_tag: Option<String>,
    pub weapon: Option<String>,
    pub location: Option<Location>,
}

/// Extract the target player's view from a full match payload.
///
/// Returns `None` when the target puuid is absent from the match roster.
pub fn extract_player_view(m: &Match, target_puuid: &str) -> Option<PlayerView> {
    let player = m
        .players
        .iter()
        .find(|p| p.puuid.as_deref() == Some(target_puuid))?;

    let rounds = m
        .rounds
        .iter()
        .enumerate()
        .filter_map(|(index, round)| {
            let player_round_stats = round
                .stats
                .iter()
                .find(|ps| {
                    ps.player
                        .as_ref()
                        .and_then(|p| p.puuid.as_deref())
                        == Some(target_puuid)
                })?;

            Some(PlayerRoundView {
                round_id: round.id,
                round_number: index as i64 + 1,
                result: round.result.clone(),
                winning_team: round.winning_team.clone(),
                bomb_planted: round.plant.is_some(),
                bomb_defused: round.defuse.is_some(),
                plant_site: round.plant.as_ref().and_then(|p| p.site.clone()),
                plant_player: round
                    .plant
                    .as_ref()
                    .and_then(|p| p.player.as_ref())
                    .and_then(|p| p.name.clone()),
                defuse_player: round
                    .defuse
                    .as_ref()
                    .and_then(|d| d.player.as_ref())
                    .and_then(|p| p.name.clone()),
                round_economy: player_round_stats.economy.clone(),
                round_stats: player_round_stats.stats.clone(),
                round_ability_casts: player_round_stats.ability_casts.clone(),
            })
        })
        .collect();

    let relevant_kills = m
        .kills
        .iter()
        .filter(|kill| {
            let killer = kill.killer.as_ref().and_then(|k| k.puuid.as_deref());
            let victim = kill.victim.as_ref().and_then(|v| v.puuid.as_deref());
            killer == Some(target_puuid) || victim == Some(target_puuid)
        })
        .map(|kill| RelevantKill {
            round: kill.round,
            time_in_round_ms: kill.time_in_round_in_ms,
            killer_name: kill.killer.as_ref().and_then(|k| k.name.clone()),
            killer_tag: kill.killer.as_ref().and_then(|k| k.tag.clone()),
            victim_name: kill.victim.as_ref().and_then(|v| v.name.clone()),
            victim_tag: kill.victim.as_ref().and_then(|v| v.tag.clone()),
            weapon: kill.weapon.as_ref().and_then(|w| w.name.clone()),
            location: kill.location.clone(),
        })
        .collect();

    let metadata = m.metadata.as_ref();
    Some(PlayerView {
        match_summary: MatchSummary {
            match_id: metadata.and_then(|md| md.match_id.clone()),
            map_name: metadata
                .and_then(|md| md.map.as_ref())
                .and_then(|map| map.name.clone()),
            queue_name: metadata
                .and_then(|md| md.queue.as_ref())
                .and_then(|q| q.name.clone()),
            started_at: metadata.and_then(|md| md.started_at.clone()),
            game_length_ms: metadata.and_then(|md| md.game_length_in_ms),
            is_completed: metadata.and_then(|md| md.is_completed),
            winning_team: m
                .teams
                .iter()
                .find(|t| t.won == Some(true))
                .and_then(|t| t.team_id.clone()),
            rounds_played: m.rounds.len(),
        },
        player_summary: PlayerSummary {
            puuid: player.puuid.clone(),
            name: player.name.clone(),
            tag: player.tag.clone(),
            team_id: player.team_id.clone(),
            agent_name: player.agent.as_ref().and_then(|a| a.name.clone()),
            tier_name: player.tier.as_ref().and_then(|t| t.name.clone()),
            overall_stats: player.stats.clone(),
            overall_economy: player.economy.clone(),
            overall_ability_casts: player.ability_casts.clone(),
            behavior: player.behavior.clone(),
        },
        rounds,
        relevant_kills,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use valocoach_riot::types::{
        MatchKill, MatchMetadata, MatchPlayer, MatchRoundData, MatchTeam, PlayerRef,
        RoundPlayerStats, WeaponInfo,
    };

    fn player_ref(puuid: &str, name: &str) -> PlayerRef {
        PlayerRef {
            puuid: Some(puuid.to_string()),
            name: Some(name.to_string()),
            tag: Some("TAG".to_string()),
            team: Some("Red".to_string()),
        }
    }

    fn round_with_stats(id: Option<i64>, puuids: &[&str]) -> MatchRoundData {
        MatchRoundData {
            id,
            result: Some("Elimination".to_string()),
            winning_team: Some("Red".to_string()),
            stats: puuids
                .iter()
                .map(|p| RoundPlayerStats {
                    player: Some(player_ref(p, "someone")),
                    stats: Some(RoundStats {
                        kills: Some(1),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn test_match() -> Match {
        Match {
            metadata: Some(MatchMetadata {
                match_id: Some("m-1".to_string()),
                started_at: Some("2026-08-01T12:00:00Z".to_string()),
                game_length_in_ms: Some(2_400_000),
                is_completed: Some(true),
                ..Default::default()
            }),
            players: vec![
                MatchPlayer {
                    puuid: Some("target".to_string()),
                    name: Some("mk2481".to_string()),
                    tag: Some("1591".to_string()),
                    team_id: Some("Red".to_string()),
                    ..Default::default()
                },
                MatchPlayer {
                    puuid: Some("other".to_string()),
                    ..Default::default()
                },
            ],
            teams: vec![
                MatchTeam {
                    team_id: Some("Red".to_string()),
                    won: Some(true),
                    ..Default::default()
                },
                MatchTeam {
                    team_id: Some("Blue".to_string()),
                    won: Some(false),
                    ..Default::default()
                },
            ],
            // Round ids with gaps; the target sat out round 2 (index 1).
            rounds: vec![
                round_with_stats(Some(10), &["target", "other"]),
                round_with_stats(Some(12), &["other"]),
                round_with_stats(Some(15), &["target"]),
            ],
            kills: vec![
                MatchKill {
                    round: Some(1),
                    time_in_round_in_ms: Some(12_000),
                    killer: Some(player_ref("target", "mk2481")),
                    victim: Some(player_ref("other", "enemy")),
                    weapon: Some(WeaponInfo {
                        name: Some("Vandal".to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                MatchKill {
                    round: Some(3),
                    killer: Some(player_ref("other", "enemy")),
                    victim: Some(player_ref("target", "mk2481")),
                    ..Default::default()
                },
                MatchKill {
                    round: Some(3),
                    killer: Some(player_ref("other", "enemy")),
                    victim: Some(player_ref("third", "bystander")),
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn absent_player_yields_none() {
        let m = test_match();
        assert!(extract_player_view(&m, "nobody").is_none());
    }

    #[test]
    fn round_count_equals_rounds_with_target_stats() {
        let m = test_match();
        let view = extract_player_view(&m, "target").unwrap();
        // 3 rounds total, target has stats in 2; the statless round is
        // omitted, not null-padded.
        assert_eq!(view.rounds.len(), 2);
        assert_eq!(view.match_summary.rounds_played, 3);
    }

    #[test]
    fn round_numbers_are_array_positions_not_source_ids() {
        let m = test_match();
        let view = extract_player_view(&m, "target").unwrap();
        let numbers: Vec<i64> = view.rounds.iter().map(|r| r.round_number).collect();
        assert_eq!(numbers, vec![1, 3]);
        // Source ids (10, 15) are carried but do not drive numbering.
        assert_eq!(view.rounds[0].round_id, Some(10));
        assert_eq!(view.rounds[1].round_id, Some(15));
    }

    #[test]
    fn relevant_kills_include_only_killer_or_victim_events() {
        let m = test_match();
        let view = extract_player_view(&m, "target").unwrap();
        assert_eq!(view.relevant_kills.len(), 2);
        assert_eq!(view.relevant_kills[0].weapon.as_deref(), Some("Vandal"));
        assert_eq!(
            view.relevant_kills[1].victim_name.as_deref(),
            Some("mk2481")
        );
    }

    #[test]
    fn winning_team_comes_from_won_flag() {
        let m = test_match();
        let view = extract_player_view(&m, "target").unwrap();
        assert_eq!(view.match_summary.winning_team.as_deref(), Some("Red"));
    }

    #[test]
    fn summary_carries_player_identity() {
        let m = test_match();
        let view = extract_player_view(&m, "target").unwrap();
        assert_eq!(view.player_summary.name.as_deref(), Some("mk2481"));
        assert_eq!(view.player_summary.team_id.as_deref(), Some("Red"));
    }

    #[test]
    fn match_without_rounds_or_kills_still_extracts() {
        let m = Match {
            players: vec![MatchPlayer {
                puuid: Some("target".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let view = extract_player_view(&m, "target").unwrap();
        assert!(view.rounds.is_empty());
        assert!(view.relevant_kills.is_empty());
        assert_eq!(view.match_summary.rounds_played, 0);
        assert!(view.match_summary.winning_team.is_none());
    }

    #[test]
    fn view_serializes_to_json_for_the_llm() {
        let m = test_match();
        let view = extract_player_view(&m, "target").unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["player_summary"]["name"], "mk2481");
        assert_eq!(json["rounds"][0]["round_number"], 1);
    }
}
