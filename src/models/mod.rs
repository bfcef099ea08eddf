use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A team's roster in a league, as returned by the league API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Roster {
    pub roster_id: u32,
    pub owner_id: Option<String>, // null for orphaned rosters
}

/// A league member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub metadata: Option<UserMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// One team's entry for a week. Two entries sharing a matchup id are opponents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchupEntry {
    pub matchup_id: Option<u32>,
    pub roster_id: u32,
    pub points: Number, // kept as sent: integer 0 before kickoff, floats once scored
    pub starters: Vec<String>,
}

/// A matchup entry joined with its team name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamSide {
    pub team_name: String,
    pub points: Number,
    pub players: Vec<String>,
}

impl TeamSide {
    pub fn score(&self) -> f64 {
        self.points.as_f64().unwrap_or_default()
    }

    /// The first two starters, in lineup order
    pub fn key_players(&self) -> &[String] {
        &self.players[..self.players.len().min(2)]
    }
}

/// Two opposing teams for a week, in the order the league API listed them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Matchup {
    pub matchup_id: Option<u32>,
    pub team1: TeamSide,
    pub team2: TeamSide,
}

impl Matchup {
    /// Returns (winner, loser).
    ///
    /// team1 only wins with strictly more points, so an exact tie goes to team2.
    pub fn winner_and_loser(&self) -> (&TeamSide, &TeamSide) {
        if self.team1.score() > self.team2.score() {
            (&self.team1, &self.team2)
        } else {
            (&self.team2, &self.team1)
        }
    }

    pub fn winner(&self) -> &TeamSide {
        self.winner_and_loser().0
    }

    /// Key players of both teams, team1 first. At most four ids.
    pub fn key_players(&self) -> Vec<String> {
        self.team1
            .key_players()
            .iter()
            .chain(self.team2.key_players())
            .cloned()
            .collect()
    }

    /// Every starter of both teams, team1 first
    pub fn all_players(&self) -> Vec<String> {
        self.team1
            .players
            .iter()
            .chain(&self.team2.players)
            .cloned()
            .collect()
    }
}
