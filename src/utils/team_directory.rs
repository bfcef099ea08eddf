use crate::models::{Roster, User};
use std::collections::HashMap;

pub const UNKNOWN_TEAM: &str = "Unknown Team";

/// Maps roster ids to team display names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamDirectory {
    teams: HashMap<u32, String>,
}

impl TeamDirectory {
    /// Build the directory for a league.
    ///
    /// A user's team name is `metadata.team_name`, falling back to `display_name`.
    /// Rosters whose owner is missing from `users` get "Unknown Team".
    pub fn build(rosters: &[Roster], users: &[User]) -> Self {
        let owner_to_team: HashMap<&str, &str> = users
            .iter()
            .filter_map(|user| user_team_name(user).map(|name| (user.user_id.as_str(), name)))
            .collect();

        let teams = rosters
            .iter()
            .map(|roster| {
                let name = roster
                    .owner_id
                    .as_deref()
                    .and_then(|owner| owner_to_team.get(owner).copied())
                    .unwrap_or(UNKNOWN_TEAM);
                (roster.roster_id, name.to_string())
            })
            .collect();

        Self { teams }
    }

    /// Team name for a roster, "Unknown Team" if the roster isn't in the league
    pub fn team_name(&self, roster_id: u32) -> &str {
        self.teams
            .get(&roster_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_TEAM)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

fn user_team_name(user: &User) -> Option<&str> {
    user.metadata
        .as_ref()
        .and_then(|metadata| metadata.team_name.as_deref())
        .or(user.display_name.as_deref())
}
