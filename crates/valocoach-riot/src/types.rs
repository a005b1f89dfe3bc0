// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response types for the HenrikDev Valorant API.
//!
//! The v4 match payload marks nearly every field optional upstream, so the
//! [`Match`] family mirrors that with `Option` and defaulted collections.
//! Required-field enforcement happens in the ingestion pipeline, not here.

use serde::{Deserialize, Serialize};

// --- Account (v2) ---

/// A Valorant account resolved by name/tag or puuid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub puuid: String,
    pub region: String,
    pub account_level: i64,
    pub name: Option<String>,
    pub tag: Option<String>,
    pub card: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub updated_at: Option<String>,
}

// --- Match (v4) ---

/// A full v4 match payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Match {
    pub metadata: Option<MatchMetadata>,
    #[serde(default)]
    pub players: Vec<MatchPlayer>,
    #[serde(default)]
    pub teams: Vec<MatchTeam>,
    #[serde(default)]
    pub rounds: Vec<MatchRoundData>,
    #[serde(default)]
    pub kills: Vec<MatchKill>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchMetadata {
    pub match_id: Option<String>,
    pub map: Option<MapInfo>,
    pub game_version: Option<String>,
    pub game_length_in_ms: Option<i64>,
    pub started_at: Option<String>,
    pub is_completed: Option<bool>,
    pub queue: Option<QueueInfo>,
    pub season: Option<SeasonInfo>,
    pub platform: Option<String>,
    pub region: Option<String>,
    pub cluster: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapInfo {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub mode_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonInfo {
    pub id: Option<String>,
    pub short: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub puuid: Option<String>,
    pub name: Option<String>,
    pub tag: Option<String>,
    pub team_id: Option<String>,
    pub platform: Option<String>,
    pub party_id: Option<String>,
    pub agent: Option<AgentInfo>,
    pub stats: Option<PlayerStats>,
    pub ability_casts: Option<AbilityCasts>,
    pub tier: Option<TierInfo>,
    pub account_level: Option<i64>,
    pub session_playtime_in_ms: Option<i64>,
    pub behavior: Option<PlayerBehavior>,
    pub economy: Option<EconomySummary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentInfo {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    pub score: Option<i64>,
    pub kills: Option<i64>,
    pub deaths: Option<i64>,
    pub assists: Option<i64>,
    pub headshots: Option<i64>,
    pub bodyshots: Option<i64>,
    pub legshots: Option<i64>,
    pub damage: Option<DamageSummary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageSummary {
    pub dealt: Option<i64>,
    pub received: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbilityCasts {
    pub grenade: Option<i64>,
    pub ability_1: Option<i64>,
    pub ability_2: Option<i64>,
    pub ultimate: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TierInfo {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerBehavior {
    pub afk_rounds: Option<i64>,
    pub friendly_fire: Option<FriendlyFire>,
    pub rounds_in_spawn: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FriendlyFire {
    pub incoming: Option<i64>,
    pub outgoing: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EconomySummary {
    pub spent: Option<MoneySummary>,
    pub loadout_value: Option<MoneySummary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoneySummary {
    pub overall: Option<i64>,
    pub average: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchTeam {
    pub team_id: Option<String>,
    pub won: Option<bool>,
    pub rounds: Option<TeamRounds>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamRounds {
    pub won: Option<i64>,
    pub lost: Option<i64>,
}

/// One round of a match as reported upstream. The `id` field may have gaps;
/// persisted round numbering uses array position instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchRoundData {
    pub id: Option<i64>,
    pub result: Option<String>,
    pub ceremony: Option<String>,
    pub winning_team: Option<String>,
    pub plant: Option<PlantEvent>,
    pub defuse: Option<DefuseEvent>,
    #[serde(default)]
    pub stats: Vec<RoundPlayerStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantEvent {
    pub round_time_in_ms: Option<i64>,
    pub site: Option<String>,
    pub location: Option<Location>,
    pub player: Option<PlayerRef>,
    #[serde(default)]
    pub player_locations: Vec<PlayerLocation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefuseEvent {
    pub round_time_in_ms: Option<i64>,
    pub location: Option<Location>,
    pub player: Option<PlayerRef>,
    #[serde(default)]
    pub player_locations: Vec<PlayerLocation>,
}

/// Lightweight player reference used inside rounds and kill events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRef {
    pub puuid: Option<String>,
    pub name: Option<String>,
    pub tag: Option<String>,
    pub team: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerLocation {
    pub puuid: Option<String>,
    pub name: Option<String>,
    pub tag: Option<String>,
    pub team: Option<String>,
    pub view_radians: Option<f64>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundPlayerStats {
    pub player: Option<PlayerRef>,
    pub ability_casts: Option<AbilityCasts>,
    #[serde(default)]
    pub damage_events: Vec<DamageEvent>,
    pub stats: Option<RoundStats>,
    pub economy: Option<RoundEconomy>,
    pub was_afk: Option<bool>,
    pub received_penalty: Option<bool>,
    pub stayed_in_spawn: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageEvent {
    pub puuid: Option<String>,
    pub name: Option<String>,
    pub tag: Option<String>,
    pub team: Option<String>,
    pub bodyshots: Option<i64>,
    pub headshots: Option<i64>,
    pub legshots: Option<i64>,
    pub damage: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundStats {
    pub bodyshots: Option<i64>,
    pub headshots: Option<i64>,
    pub legshots: Option<i64>,
    pub damage: Option<i64>,
    pub kills: Option<i64>,
    pub assists: Option<i64>,
    pub score: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundEconomy {
    pub loadout_value: Option<i64>,
    pub remaining: Option<i64>,
    pub weapon: Option<WeaponInfo>,
    pub armor: Option<ArmorInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArmorInfo {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// A kill event from the match-wide kill feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchKill {
    pub round: Option<i64>,
    pub time_in_round_in_ms: Option<i64>,
    pub time_in_match_in_ms: Option<i64>,
    pub killer: Option<PlayerRef>,
    pub victim: Option<PlayerRef>,
    #[serde(default)]
    pub assistants: Vec<PlayerRef>,
    pub location: Option<Location>,
    pub weapon: Option<WeaponInfo>,
    pub secondary_fire_mode: Option<bool>,
    #[serde(default)]
    pub player_locations: Vec<PlayerLocation>,
}

// --- MMR (v3) ---

/// Account reference returned by the MMR endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MmrAccount {
    pub puuid: String,
    pub name: String,
    pub tag: String,
}

/// Current, peak, and seasonal competitive rating for an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MmrSnapshot {
    pub account: MmrAccount,
    pub peak: Option<MmrPeak>,
    pub current: MmrCurrent,
    #[serde(default)]
    pub seasonal: Vec<MmrSeason>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MmrPeak {
    pub season: SeasonInfo,
    pub ranking_schema: Option<String>,
    pub rr: i64,
    pub tier: TierInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MmrCurrent {
    pub tier: TierInfo,
    pub rr: i64,
    pub last_change: i64,
    pub elo: i64,
    pub games_needed_for_rating: Option<i64>,
    pub rank_protection_shields: Option<i64>,
    pub leaderboard_placement: Option<LeaderboardPlacement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardPlacement {
    pub rank: i64,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MmrSeason {
    pub season: SeasonInfo,
    pub wins: i64,
    pub games: i64,
    pub end_tier: TierInfo,
    pub end_rr: Option<i64>,
    pub ranking_schema: Option<String>,
    pub leaderboard_placement: Option<LeaderboardPlacement>,
    #[serde(default)]
    pub act_wins: Vec<TierInfo>,
}

// --- MMR history (v2) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MmrHistory {
    pub account: MmrAccount,
    #[serde(default)]
    pub history: Vec<MmrHistoryItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MmrHistoryItem {
    pub match_id: String,
    pub tier: TierInfo,
    pub map: MapInfo,
    pub season: SeasonInfo,
    pub rr: i64,
    pub last_change: i64,
    pub elo: i64,
    pub refunded_rr: Option<i64>,
    pub was_derank_protected: Option<bool>,
    pub date: String,
}

// --- Leaderboard (v3) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    pub updated_at: String,
    #[serde(default)]
    pub thresholds: Vec<LeaderboardThreshold>,
    #[serde(default)]
    pub players: Vec<LeaderboardPlayer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardThreshold {
    pub tier: i64,
    pub start_index: i64,
    pub threshold: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardPlayer {
    pub card: Option<String>,
    pub title: Option<String>,
    pub is_banned: bool,
    pub is_anonymized: bool,
    pub puuid: Option<String>,
    pub name: Option<String>,
    pub tag: Option<String>,
    pub leaderboard_rank: i64,
    pub tier: i64,
    pub rr: i64,
    pub wins: i64,
    pub updated_at: Option<String>,
}

// --- Content (v1, coaching-relevant subset) ---

/// Static game content: agents, maps, and game modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub version: String,
    #[serde(default)]
    pub characters: Vec<ContentCharacter>,
    #[serde(default)]
    pub maps: Vec<ContentMap>,
    #[serde(default)]
    pub game_modes: Vec<ContentGameMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCharacter {
    pub uuid: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub character_tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMap {
    pub uuid: String,
    pub display_name: String,
    #[serde(default)]
    pub tactical_description: Option<String>,
    #[serde(default)]
    pub coordinates: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentGameMode {
    pub uuid: String,
    pub display_name: String,
    #[serde(default)]
    pub duration: Option<String>,
}

// --- Platform status (v1) ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformStatus {
    #[serde(default)]
    pub maintenances: Vec<StatusIncident>,
    #[serde(default)]
    pub incidents: Vec<StatusIncident>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusIncident {
    pub id: i64,
    pub created_at: Option<String>,
    pub archive_at: Option<String>,
    pub updated_at: Option<String>,
    pub maintenance_status: Option<String>,
    pub incident_severity: Option<String>,
    #[serde(default)]
    pub titles: Vec<LocalizedText>,
    #[serde(default)]
    pub updates: Vec<IncidentUpdate>,
    #[serde(default)]
    pub platforms: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    pub content: String,
    pub locale: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncidentUpdate {
    pub id: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub publish: Option<bool>,
    pub author: Option<String>,
    #[serde(default)]
    pub translations: Vec<LocalizedText>,
    #[serde(default)]
    pub publish_locations: Vec<String>,
}

// --- Store (v2) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedBundle {
    pub bundle_uuid: String,
    pub seconds_remaining: i64,
    pub bundle_price: i64,
    pub whole_sale_only: bool,
    pub expires_at: String,
    #[serde(default)]
    pub items: Vec<BundleItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleItem {
    pub uuid: String,
    pub name: String,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub type_: String,
    pub amount: i64,
    pub discount_percent: f64,
    pub base_price: i64,
    pub discounted_price: i64,
    pub promo_item: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreOffers {
    #[serde(default)]
    pub offers: Vec<StoreOffer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreOffer {
    pub offer_id: String,
    pub cost: i64,
    pub name: String,
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub type_: String,
    pub skin_id: Option<String>,
    pub content_tier: Option<ContentTier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTier {
    pub name: String,
    pub dev_name: Option<String>,
    pub icon: Option<String>,
}

// --- Esports schedule (v1) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsportsScheduleItem {
    pub date: String,
    pub state: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub vod: Option<String>,
    pub league: EsportsLeague,
    pub tournament: EsportsTournament,
    #[serde(rename = "match")]
    pub match_info: EsportsMatch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsportsLeague {
    pub name: String,
    pub identifier: String,
    pub icon: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsportsTournament {
    pub name: String,
    pub season: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsportsMatch {
    pub id: Option<String>,
    pub game_type: EsportsGameType,
    #[serde(default)]
    pub teams: Vec<EsportsTeam>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsportsGameType {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsportsTeam {
    pub name: String,
    pub code: Option<String>,
    pub icon: Option<String>,
    pub has_won: bool,
    pub game_wins: i64,
    pub record: Option<EsportsRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsportsRecord {
    pub wins: i64,
    pub losses: i64,
}

// --- Queue status (v1) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueStatusItem {
    pub mode: String,
    pub mode_id: String,
    pub enabled: bool,
    pub team_size: i64,
    pub number_of_teams: i64,
    pub party_size: PartySize,
    pub high_skill: Option<HighSkill>,
    pub ranked: bool,
    pub tournament: bool,
    pub required_account_level: i64,
    pub game_rules: Option<GameRules>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub maps: Vec<QueueMap>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartySize {
    pub max: i64,
    pub min: i64,
    #[serde(default)]
    pub invalid: Vec<i64>,
    pub full_party_bypass: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighSkill {
    pub max_party_size: i64,
    pub min_tier: i64,
    pub max_tier: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRules {
    pub overtime_win_by_two: Option<bool>,
    pub allow_lenient_surrender: Option<bool>,
    pub allow_drop_out: Option<bool>,
    pub assign_random_agents: Option<bool>,
    pub skip_pregame: Option<bool>,
    pub allow_overtime_draw_vote: Option<bool>,
    pub overtime_win_by_two_capped: Option<bool>,
    pub premier_mode: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueMap {
    pub map: MapInfo,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_match_payload_deserializes() {
        // The v4 endpoint can return sparsely populated matches; everything
        // outside metadata.match_id may be absent.
        let json = r#"{"metadata": {"match_id": "abc-123"}}"#;
        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.metadata.unwrap().match_id.as_deref(), Some("abc-123"));
        assert!(m.players.is_empty());
        assert!(m.rounds.is_empty());
        assert!(m.kills.is_empty());
    }

    #[test]
    fn weapon_type_field_maps_from_type_key() {
        let json = r#"{"id": "w1", "name": "Vandal", "type": "Rifle"}"#;
        let w: WeaponInfo = serde_json::from_str(json).unwrap();
        assert_eq!(w.type_.as_deref(), Some("Rifle"));
    }

    #[test]
    fn account_requires_puuid() {
        let json = r#"{"region": "ap", "account_level": 100}"#;
        assert!(serde_json::from_str::<Account>(json).is_err());
    }

    #[test]
    fn full_match_player_deserializes() {
        let json = r#"{
            "puuid": "p-1",
            "name": "TenZ",
            "tag": "NA1",
            "team_id": "Red",
            "agent": {"id": "a-1", "name": "Jett"},
            "stats": {
                "score": 4200,
                "kills": 21,
                "deaths": 14,
                "assists": 3,
                "damage": {"dealt": 3100, "received": 2500}
            },
            "ability_casts": {"grenade": 4, "ability_1": 10, "ability_2": 7, "ultimate": 2},
            "tier": {"id": 24, "name": "Immortal 1"},
            "behavior": {"afk_rounds": 0, "rounds_in_spawn": 0},
            "economy": {
                "spent": {"overall": 48000, "average": 2100.5},
                "loadout_value": {"overall": 71000, "average": 3400.0}
            }
        }"#;
        let p: MatchPlayer = serde_json::from_str(json).unwrap();
        assert_eq!(p.agent.unwrap().name.as_deref(), Some("Jett"));
        assert_eq!(p.stats.as_ref().unwrap().kills, Some(21));
        assert_eq!(
            p.stats.unwrap().damage.unwrap().dealt,
            Some(3100)
        );
        assert_eq!(p.economy.unwrap().spent.unwrap().average, Some(2100.5));
    }

    #[test]
    fn content_character_uses_camel_case_keys() {
        let json = r#"{"uuid": "c-1", "displayName": "Sova", "characterTags": ["Scan"]}"#;
        let c: ContentCharacter = serde_json::from_str(json).unwrap();
        assert_eq!(c.display_name, "Sova");
        assert_eq!(c.character_tags.unwrap(), vec!["Scan"]);
    }
}
