use crate::api::player_mapping_api::{PlayerNameResolver, UNKNOWN_PLAYER};
use crate::models::Matchup;

/// Renders matchups as summary lines, resolving player names as needed
pub struct ResultFormatter<'a> {
    resolver: &'a PlayerNameResolver,
}

impl<'a> ResultFormatter<'a> {
    pub fn new(resolver: &'a PlayerNameResolver) -> Self {
        Self { resolver }
    }

    /// Scored summary with the winner and two star performers
    pub async fn scored_summary(&self, matchup: &Matchup) -> String {
        let names = self.resolver.resolve(&matchup.key_players()).await;
        format_scored_summary(matchup, &names)
    }

    /// Team names and every starter, no scores
    pub async fn player_summary(&self, matchup: &Matchup) -> String {
        let names = self.resolver.resolve(&matchup.all_players()).await;
        format_player_summary(matchup, &names)
    }
}

/// `names` are the resolved key players in request order. The first two are the stars.
pub fn format_scored_summary(matchup: &Matchup, names: &[(String, String)]) -> String {
    let star = |i: usize| names.get(i).map_or(UNKNOWN_PLAYER, |(_, name)| name.as_str());
    let (team1, team2) = (&matchup.team1, &matchup.team2);

    format!(
        "{} ({} points) vs {} ({} points) - Winner: {}. Star performances by {} and {}.",
        team1.team_name,
        team1.points,
        team2.team_name,
        team2.points,
        matchup.winner().team_name,
        star(0),
        star(1)
    )
}

/// `names` are the resolved starters of team1 followed by team2, in lineup order
pub fn format_player_summary(matchup: &Matchup, names: &[(String, String)]) -> String {
    let split = matchup.team1.players.len().min(names.len());
    let (team1_names, team2_names) = names.split_at(split);

    format!(
        "{} vs {} - Players: {} vs {}",
        matchup.team1.team_name,
        matchup.team2.team_name,
        join_names(team1_names),
        join_names(team2_names)
    )
}

fn join_names(names: &[(String, String)]) -> String {
    names
        .iter()
        .map(|(_, name)| name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamSide;
    use serde_json::Number;

    fn side(name: &str, points: f64, players: &[&str]) -> TeamSide {
        TeamSide {
            team_name: name.to_string(),
            points: Number::from_f64(points).unwrap(),
            players: players.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn named(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect()
    }

    fn echo(ids: &[String]) -> Vec<(String, String)> {
        ids.iter().map(|id| (id.clone(), id.clone())).collect()
    }

    fn sample() -> Matchup {
        Matchup {
            matchup_id: Some(1),
            team1: side("Alpha", 99.5, &["100", "101", "102"]),
            team2: side("Beta", 85.0, &["200", "201"]),
        }
    }

    #[test]
    fn test_scored_summary_points_render_as_sent() {
        let mut matchup: Matchup = serde_json::from_str(
            r#"{"matchup_id": 1,
                "team1": {"team_name": "Alpha", "points": 0, "players": ["1", "2"]},
                "team2": {"team_name": "Beta", "points": 112.36, "players": ["3"]}}"#,
        )
        .unwrap();
        let summary = format_scored_summary(&matchup, &echo(&matchup.key_players()));
        assert!(summary.starts_with("Alpha (0 points) vs Beta (112.36 points) - Winner: Beta."));

        matchup.team1.points = Number::from_f64(85.0).unwrap();
        let summary = format_scored_summary(&matchup, &echo(&matchup.key_players()));
        assert!(summary.starts_with("Alpha (85.0 points) vs Beta"));
    }

    #[test]
    fn test_scored_summary() {
        let names = named(&[("100", "Mahomes"), ("101", "Kelce")]);
        assert_eq!(
            format_scored_summary(&sample(), &names),
            "Alpha (99.5 points) vs Beta (85.0 points) - Winner: Alpha. Star performances by Mahomes and Kelce."
        );
    }

    #[test]
    fn test_scored_summary_with_echoed_ids() {
        let matchup = sample();
        let names = echo(&matchup.key_players());
        assert_eq!(
            format_scored_summary(&matchup, &names),
            "Alpha (99.5 points) vs Beta (85.0 points) - Winner: Alpha. Star performances by 100 and 101."
        );
    }

    #[test]
    fn test_scored_summary_tie() {
        let matchup = Matchup {
            matchup_id: Some(1),
            team1: side("Alpha", 100.0, &["1", "2"]),
            team2: side("Beta", 100.0, &["3", "4"]),
        };
        let summary = format_scored_summary(&matchup, &echo(&matchup.key_players()));
        assert!(summary.contains("- Winner: Beta."));
    }

    #[test]
    fn test_scored_summary_short_lineups() {
        let matchup = Matchup {
            matchup_id: Some(1),
            team1: side("Alpha", 10.0, &[]),
            team2: side("Beta", 20.0, &["3"]),
        };
        let summary = format_scored_summary(&matchup, &echo(&matchup.key_players()));
        assert!(summary.ends_with("Star performances by 3 and Unknown Player."));
    }

    #[test]
    fn test_player_summary() {
        let matchup = sample();
        let names = named(&[
            ("100", "Mahomes"),
            ("101", "Kelce"),
            ("102", "Pacheco"),
            ("200", "Allen"),
            ("201", "Diggs"),
        ]);
        assert_eq!(
            format_player_summary(&matchup, &names),
            "Alpha vs Beta - Players: Mahomes, Kelce, Pacheco vs Allen, Diggs"
        );
    }

    #[test]
    fn test_player_summary_empty_side() {
        let matchup = Matchup {
            matchup_id: Some(1),
            team1: side("Alpha", 0.0, &[]),
            team2: side("Beta", 0.0, &["7"]),
        };
        let names = echo(&matchup.all_players());
        assert_eq!(
            format_player_summary(&matchup, &names),
            "Alpha vs Beta - Players:  vs 7"
        );
    }

    #[tokio::test]
    async fn test_formatter_degrades_when_lookup_is_down() {
        let resolver = PlayerNameResolver::new("http://127.0.0.1:1").unwrap();
        let formatter = ResultFormatter::new(&resolver);

        let summary = formatter.scored_summary(&sample()).await;
        assert!(summary.ends_with("Star performances by Unknown Player and Unknown Player."));

        let summary = formatter.player_summary(&sample()).await;
        assert_eq!(
            summary,
            "Alpha vs Beta - Players: Unknown Player, Unknown Player, Unknown Player vs Unknown Player, Unknown Player"
        );
    }
}
