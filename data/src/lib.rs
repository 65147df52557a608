pub mod client;
pub mod kickoff;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Domain types — clean model, field names track the season snapshot JSON
// ---------------------------------------------------------------------------

/// Base URL for ESPN team logo images, keyed by numeric team ID.
pub const LOGO_BASE: &str = "https://a.espncdn.com/i/teamlogos/ncaa/500";

/// Competition phase of a game within its season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonType {
    #[default]
    Regular,
    Postseason,
    /// Anything the snapshot carries that we don't recognize (spring, etc.).
    #[serde(other)]
    Other,
}

impl SeasonType {
    pub fn label(&self) -> &'static str {
        match self {
            SeasonType::Regular => "Regular",
            SeasonType::Postseason => "Postseason",
            SeasonType::Other => "Other",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One played championship game as it appears in the season snapshot.
///
/// `total_week` is globally unique and strictly increasing in chronological
/// order across all seasons; it is the sole navigation key. Every other
/// optional field degrades per-field when absent — a sparse record never
/// rejects the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub season: u16,
    pub season_type: SeasonType,
    #[serde(default)]
    pub week: u16,
    #[serde(rename = "total_week")]
    pub total_week: u32,

    pub home_id: u32,
    pub home_team: String,
    #[serde(default)]
    pub home_conference: Option<String>,
    pub away_id: u32,
    pub away_team: String,
    #[serde(default)]
    pub away_conference: Option<String>,

    #[serde(default)]
    pub home_points: u16,
    #[serde(default)]
    pub away_points: u16,
    #[serde(rename = "winner_id")]
    pub winner_id: u32,
    #[serde(default)]
    pub home_line_scores: Vec<u16>,
    #[serde(default)]
    pub away_line_scores: Vec<u16>,

    #[serde(default)]
    pub start_date: Option<String>,
    /// Two-letter region code of the venue; resolves the display time zone.
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub neutral_site: bool,
    #[serde(default)]
    pub conference_game: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub highlights: Option<String>,

    #[serde(default)]
    pub home_ap_rank: Option<u16>,
    #[serde(default)]
    pub home_coaches_rank: Option<u16>,
    #[serde(default)]
    pub away_ap_rank: Option<u16>,
    #[serde(default)]
    pub away_coaches_rank: Option<u16>,
}

impl GameRecord {
    pub fn winner_is_home(&self) -> bool {
        self.winner_id == self.home_id
    }

    /// Display name of the winning side, resolved by matching `winner_id`
    /// against the home team ID.
    pub fn winner_name(&self) -> &str {
        if self.winner_is_home() {
            &self.home_team
        } else {
            &self.away_team
        }
    }

    pub fn winner_logo_url(&self) -> String {
        team_logo_url(self.winner_id)
    }

    /// Watch URL for the game's highlight video, when one is referenced.
    /// The last 11 characters of the `highlights` value are treated as the
    /// video ID; the value itself is never validated.
    pub fn highlight_url(&self) -> Option<String> {
        let raw = self.highlights.as_deref()?;
        if raw.is_empty() {
            return None;
        }
        let len = raw.chars().count();
        let id: String = raw.chars().skip(len.saturating_sub(11)).collect();
        Some(format!("https://www.youtube.com/watch?v={id}"))
    }
}

/// Deterministic logo reference for a team ID. Built, never fetched.
pub fn team_logo_url(team_id: u32) -> String {
    format!("{LOGO_BASE}/{team_id}.png")
}

/// Derived per-game row for the compact per-season timeline display.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonSummaryRow {
    pub winner_id: u32,
    pub winner_name: String,
    pub logo_url: String,
    pub total_week: u32,
    pub season_type: SeasonType,
}

// ---------------------------------------------------------------------------
// Season dataset — loaded once, immutable for the session
// ---------------------------------------------------------------------------

/// The full loaded snapshot plus the derived read-only projections over it.
#[derive(Debug, Clone, Default)]
pub struct SeasonDataset {
    games: Vec<GameRecord>,
}

impl SeasonDataset {
    pub fn new(games: Vec<GameRecord>) -> Self {
        Self { games }
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Maximum `total_week` across all records, 0 when the dataset is empty.
    /// Bounds navigation.
    pub fn max_week(&self) -> u32 {
        self.games.iter().map(|g| g.total_week).max().unwrap_or(0)
    }

    /// First record whose `total_week` equals `week`. `None` is a normal
    /// empty state (navigation may point at a week with no data), not an
    /// error.
    pub fn game_at_week(&self, week: u32) -> Option<&GameRecord> {
        self.games.iter().find(|g| g.total_week == week)
    }

    /// Group all records by season into ordered winner-summary rows.
    ///
    /// Each season's list is explicitly sorted ascending by `total_week`;
    /// the map itself is ordered by season. Output is identical on every
    /// call for the same input — nothing depends on incidental iteration
    /// order.
    pub fn season_summaries(&self) -> BTreeMap<u16, Vec<SeasonSummaryRow>> {
        let mut seasons: BTreeMap<u16, Vec<SeasonSummaryRow>> = BTreeMap::new();

        for game in &self.games {
            seasons.entry(game.season).or_default().push(SeasonSummaryRow {
                winner_id: game.winner_id,
                winner_name: game.winner_name().to_owned(),
                logo_url: game.winner_logo_url(),
                total_week: game.total_week,
                season_type: game.season_type,
            });
        }

        for rows in seasons.values_mut() {
            rows.sort_by_key(|r| r.total_week);
        }

        seasons
    }
}

impl From<Vec<GameRecord>> for SeasonDataset {
    fn from(games: Vec<GameRecord>) -> Self {
        Self::new(games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(season: u16, total_week: u32, home_wins: bool) -> GameRecord {
        GameRecord {
            season,
            total_week,
            home_id: 10,
            home_team: "Oklahoma".into(),
            away_id: 20,
            away_team: "Texas".into(),
            winner_id: if home_wins { 10 } else { 20 },
            ..Default::default()
        }
    }

    #[test]
    fn max_week_of_empty_dataset_is_zero() {
        assert_eq!(SeasonDataset::default().max_week(), 0);
    }

    #[test]
    fn max_week_matches_true_maximum() {
        let data = SeasonDataset::new(vec![
            record(2000, 3, true),
            record(2000, 7, false),
            record(2001, 5, true),
        ]);
        assert_eq!(data.max_week(), 7);
    }

    #[test]
    fn game_at_week_finds_record_or_none() {
        let data = SeasonDataset::new(vec![record(2000, 0, true), record(2000, 1, false)]);
        assert_eq!(data.game_at_week(1).map(|g| g.total_week), Some(1));
        assert!(data.game_at_week(5).is_none());
    }

    #[test]
    fn season_summaries_sorts_within_season_and_conserves_rows() {
        let data = SeasonDataset::new(vec![
            record(2001, 9, true),
            record(2000, 4, false),
            record(2001, 6, true),
            record(2000, 2, true),
        ]);
        let seasons = data.season_summaries();

        let total: usize = seasons.values().map(Vec::len).sum();
        assert_eq!(total, data.len());

        for rows in seasons.values() {
            assert!(rows.windows(2).all(|w| w[0].total_week <= w[1].total_week));
        }
        assert_eq!(
            seasons[&2001].iter().map(|r| r.total_week).collect::<Vec<_>>(),
            vec![6, 9]
        );
    }

    #[test]
    fn season_summaries_resolves_winner_side() {
        let data = SeasonDataset::new(vec![record(2000, 0, true), record(2000, 1, false)]);
        let rows = &data.season_summaries()[&2000];
        assert_eq!(rows[0].winner_name, "Oklahoma");
        assert_eq!(rows[1].winner_name, "Texas");
    }

    #[test]
    fn season_summaries_is_deterministic() {
        let data = SeasonDataset::new(vec![
            record(2003, 11, true),
            record(2002, 8, false),
            record(2003, 10, false),
        ]);
        assert_eq!(data.season_summaries(), data.season_summaries());
    }

    #[test]
    fn three_record_scenario_end_to_end() {
        let data = SeasonDataset::new(vec![
            record(2000, 0, true),
            record(2000, 1, false),
            record(2001, 2, true),
        ]);

        let seasons = data.season_summaries();
        assert_eq!(seasons.len(), 2);
        let s2000 = &seasons[&2000];
        assert_eq!(s2000.len(), 2);
        assert_eq!((s2000[0].total_week, s2000[0].winner_name.as_str()), (0, "Oklahoma"));
        assert_eq!((s2000[1].total_week, s2000[1].winner_name.as_str()), (1, "Texas"));
        let s2001 = &seasons[&2001];
        assert_eq!(s2001.len(), 1);
        assert_eq!(s2001[0].total_week, 2);

        assert_eq!(data.game_at_week(1).map(|g| g.total_week), Some(1));
        assert!(data.game_at_week(5).is_none());
        assert_eq!(data.max_week(), 2);
    }

    #[test]
    fn highlight_url_takes_last_eleven_chars() {
        let mut g = record(2014, 0, true);
        g.highlights = Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".into());
        assert_eq!(
            g.highlight_url().as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );

        g.highlights = Some("dQw4w9WgXcQ".into());
        assert_eq!(
            g.highlight_url().as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );

        g.highlights = None;
        assert!(g.highlight_url().is_none());
    }

    #[test]
    fn logo_url_is_deterministic_per_team() {
        assert_eq!(
            team_logo_url(201),
            "https://a.espncdn.com/i/teamlogos/ncaa/500/201.png"
        );
    }

    #[test]
    fn record_deserializes_snapshot_field_names() {
        let raw = r#"{
            "season": 2005,
            "seasonType": "regular",
            "week": 9,
            "total_week": 42,
            "homeId": 194,
            "homeTeam": "Ohio State",
            "homeConference": "Big Ten",
            "awayId": 130,
            "awayTeam": "Michigan",
            "awayConference": "Big Ten",
            "homePoints": 25,
            "awayPoints": 21,
            "winner_id": 194,
            "homeLineScores": [7, 3, 6, 9],
            "awayLineScores": [7, 7, 0, 7],
            "startDate": "2005-11-19T17:00:00.000Z",
            "state": "OH",
            "city": "Columbus",
            "venue": "Ohio Stadium",
            "neutralSite": false,
            "conferenceGame": true,
            "homeApRank": 9,
            "awayApRank": 4
        }"#;
        let g: GameRecord = serde_json::from_str(raw).expect("record should parse");
        assert_eq!(g.total_week, 42);
        assert_eq!(g.season_type, SeasonType::Regular);
        assert_eq!(g.winner_id, 194);
        assert_eq!(g.winner_name(), "Ohio State");
        assert_eq!(g.home_line_scores, vec![7, 3, 6, 9]);
        assert_eq!(g.home_ap_rank, Some(9));
        assert_eq!(g.home_coaches_rank, None);
        assert!(g.highlights.is_none());
    }

    #[test]
    fn sparse_record_degrades_per_field() {
        let raw = r#"{
            "season": 2000,
            "seasonType": "preseason",
            "total_week": 0,
            "homeId": 1,
            "homeTeam": "A",
            "awayId": 2,
            "awayTeam": "B",
            "winner_id": 2
        }"#;
        let g: GameRecord = serde_json::from_str(raw).expect("sparse record should parse");
        assert_eq!(g.season_type, SeasonType::Other);
        assert_eq!(g.home_points, 0);
        assert!(g.start_date.is_none());
        assert!(!g.neutral_site);
        assert_eq!(g.winner_name(), "B");
    }

    #[test]
    fn record_serializes_back_to_wire_names() {
        let g = record(2000, 3, true);
        let value = serde_json::to_value(&g).expect("serialize");
        assert!(value.get("total_week").is_some());
        assert!(value.get("winner_id").is_some());
        assert!(value.get("homeTeam").is_some());
        assert!(value.get("seasonType").is_some());
    }
}
