use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::models::draft_config::DraftMode;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display, EnumString,
)]
pub enum Team {
    #[strum(serialize = "team1")]
    #[serde(rename = "team1")]
    Team1,
    #[strum(serialize = "team2")]
    #[serde(rename = "team2")]
    Team2,
}

impl Team {
    pub fn opponent(&self) -> Team {
        match self {
            Team::Team1 => Team::Team2,
            Team::Team2 => Team::Team1,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display, EnumString,
)]
pub enum ActionKind {
    #[strum(serialize = "ban")]
    #[serde(rename = "ban")]
    Ban,
    #[strum(serialize = "protect")]
    #[serde(rename = "protect")]
    Protect,
}

/// Accumulated ban/protect history of one draft. Append-only: records are
/// inserted as turns commit and never rewritten or removed.
///
/// Ban records are bare hero names in MRC (global bans) and `"<name>:<team>"`
/// pairs in MRI (each team spends its own bans).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftState {
    banned_heroes: HashSet<String>,
    team1_protected: HashSet<String>,
    team2_protected: HashSet<String>,
}

impl DraftState {
    pub fn new() -> Self {
        DraftState::default()
    }

    pub fn record_ban(&mut self, hero_name: &str, team: Team, mode: DraftMode) {
        let record = match mode {
            DraftMode::Mrc => hero_name.to_string(),
            DraftMode::Mri => ban_record(hero_name, team),
        };
        self.banned_heroes.insert(record);
    }

    pub fn record_protect(&mut self, hero_name: &str, team: Team) {
        self.protected_set_mut(team).insert(hero_name.to_string());
    }

    pub fn is_banned_global(&self, hero_name: &str) -> bool {
        self.banned_heroes.contains(hero_name)
    }

    pub fn is_banned_by(&self, hero_name: &str, team: Team) -> bool {
        self.banned_heroes.contains(&ban_record(hero_name, team))
    }

    pub fn is_protected_by(&self, hero_name: &str, team: Team) -> bool {
        self.protected_set(team).contains(hero_name)
    }

    pub fn protected_heroes(&self, team: Team) -> impl Iterator<Item = &str> {
        self.protected_set(team).iter().map(|s| s.as_str())
    }

    /// Hero names banned so far, with MRI team tags stripped.
    pub fn banned_hero_names(&self) -> impl Iterator<Item = &str> {
        self.banned_heroes
            .iter()
            .map(|record| record.split(':').next().unwrap_or(record))
    }

    fn protected_set(&self, team: Team) -> &HashSet<String> {
        match team {
            Team::Team1 => &self.team1_protected,
            Team::Team2 => &self.team2_protected,
        }
    }

    fn protected_set_mut(&mut self, team: Team) -> &mut HashSet<String> {
        match team {
            Team::Team1 => &mut self.team1_protected,
            Team::Team2 => &mut self.team2_protected,
        }
    }
}

fn ban_record(hero_name: &str, team: Team) -> String {
    format!("{}:{}", hero_name, team)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mrc_ban_is_global() {
        let mut state = DraftState::new();
        state.record_ban("Ironhide", Team::Team1, DraftMode::Mrc);

        assert!(state.is_banned_global("Ironhide"));
        assert!(!state.is_banned_by("Ironhide", Team::Team1));
    }

    #[test]
    fn test_mri_ban_is_team_tagged() {
        let mut state = DraftState::new();
        state.record_ban("Ironhide", Team::Team1, DraftMode::Mri);

        assert!(state.is_banned_by("Ironhide", Team::Team1));
        assert!(!state.is_banned_by("Ironhide", Team::Team2));
        assert!(!state.is_banned_global("Ironhide"));
        assert!(state.is_banned_global("Ironhide:team1"));
    }

    #[test]
    fn test_protect_sets_are_independent() {
        let mut state = DraftState::new();
        state.record_protect("Whisper", Team::Team1);

        assert!(state.is_protected_by("Whisper", Team::Team1));
        assert!(!state.is_protected_by("Whisper", Team::Team2));

        state.record_protect("Whisper", Team::Team2);
        assert!(state.is_protected_by("Whisper", Team::Team2));
    }

    #[test]
    fn test_banned_hero_names_strip_team_tag() {
        let mut state = DraftState::new();
        state.record_ban("Ironhide", Team::Team1, DraftMode::Mri);
        state.record_ban("Whisper", Team::Team2, DraftMode::Mri);

        let mut names: Vec<&str> = state.banned_hero_names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Ironhide", "Whisper"]);
    }

    #[test]
    fn test_team_serializes_lowercase() {
        assert_eq!(Team::Team1.to_string(), "team1");
        assert_eq!(ban_record("Ironhide", Team::Team2), "Ironhide:team2");
    }
}
