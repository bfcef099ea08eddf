use crate::models::{Matchup, MatchupEntry, TeamSide};
use crate::utils::team_directory::TeamDirectory;
use std::collections::HashMap;

/// Pair up a week's entries into matchups.
///
/// Entries are grouped by matchup id in first-seen order. Only groups of exactly
/// two teams become matchups; byes and malformed groups are dropped.
pub fn aggregate_matchups(entries: &[MatchupEntry], directory: &TeamDirectory) -> Vec<Matchup> {
    let mut group_index: HashMap<Option<u32>, usize> = HashMap::new();
    let mut groups: Vec<(Option<u32>, Vec<TeamSide>)> = Vec::new();

    for entry in entries {
        let index = *group_index.entry(entry.matchup_id).or_insert_with(|| {
            groups.push((entry.matchup_id, Vec::new()));
            groups.len() - 1
        });

        groups[index].1.push(TeamSide {
            team_name: directory.team_name(entry.roster_id).to_string(),
            points: entry.points.clone(),
            players: entry.starters.clone(),
        });
    }

    groups
        .into_iter()
        .filter_map(|(matchup_id, teams)| {
            let [team1, team2]: [TeamSide; 2] = teams.try_into().ok()?;
            Some(Matchup {
                matchup_id,
                team1,
                team2,
            })
        })
        .collect()
}
