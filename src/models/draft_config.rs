use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::models::draft_state::Team;

pub const MRI_BANS_PER_TEAM: u8 = 4;
pub const MRI_PROTECTS_PER_TEAM: u8 = 2;

const TEAM1_NAME_VAR: &str = "DRAFT_TEAM1_NAME";
const TEAM2_NAME_VAR: &str = "DRAFT_TEAM2_NAME";
const STARTING_TEAM_VAR: &str = "DRAFT_STARTING_TEAM";
const BANS_PER_TEAM_VAR: &str = "DRAFT_BANS_PER_TEAM";
const PROTECTS_PER_TEAM_VAR: &str = "DRAFT_PROTECTS_PER_TEAM";
const DRAFT_MODE_VAR: &str = "DRAFT_MODE";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display, EnumString,
)]
pub enum DraftMode {
    #[strum(serialize = "MRC")]
    #[serde(rename = "MRC")]
    Mrc,
    #[strum(serialize = "MRI")]
    #[serde(rename = "MRI")]
    Mri,
}

/// Room settings captured once at creation, immutable afterwards. The
/// per-team counts only mean something in MRC; MRI is a fixed format and
/// ignores them even when supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftConfig {
    pub mode: DraftMode,
    pub team1_name: String,
    pub team2_name: String,
    pub starting_team: Team,
    pub bans_per_team: u8,
    pub protects_per_team: u8,
}

impl Default for DraftConfig {
    fn default() -> Self {
        DraftConfig {
            mode: DraftMode::Mrc,
            team1_name: "Team 1".to_string(),
            team2_name: "Team 2".to_string(),
            starting_team: Team::Team1,
            bans_per_team: 3,
            protects_per_team: 2,
        }
    }
}

impl DraftConfig {
    /// Room settings come from the environment; unset or unparsable values
    /// fall back to the same defaults the creation form starts from.
    pub fn from_env() -> Self {
        let defaults = DraftConfig::default();

        DraftConfig {
            mode: parse_var(DRAFT_MODE_VAR).unwrap_or(defaults.mode),
            team1_name: env::var(TEAM1_NAME_VAR).unwrap_or(defaults.team1_name),
            team2_name: env::var(TEAM2_NAME_VAR).unwrap_or(defaults.team2_name),
            starting_team: parse_var(STARTING_TEAM_VAR).unwrap_or(defaults.starting_team),
            bans_per_team: parse_var(BANS_PER_TEAM_VAR).unwrap_or(defaults.bans_per_team),
            protects_per_team: parse_var(PROTECTS_PER_TEAM_VAR)
                .unwrap_or(defaults.protects_per_team),
        }
    }

    pub fn effective_bans(&self) -> u8 {
        match self.mode {
            DraftMode::Mrc => self.bans_per_team,
            DraftMode::Mri => MRI_BANS_PER_TEAM,
        }
    }

    pub fn effective_protects(&self) -> u8 {
        match self.mode {
            DraftMode::Mrc => self.protects_per_team,
            DraftMode::Mri => MRI_PROTECTS_PER_TEAM,
        }
    }

    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::Team1 => &self.team1_name,
            Team::Team2 => &self.team2_name,
        }
    }
}

fn parse_var<T: FromStr>(var: &str) -> Option<T> {
    env::var(var).ok().and_then(|s| s.parse::<T>().ok())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mrc_uses_configured_counts() {
        let config = DraftConfig {
            bans_per_team: 5,
            protects_per_team: 1,
            ..DraftConfig::default()
        };

        assert_eq!(config.effective_bans(), 5);
        assert_eq!(config.effective_protects(), 1);
    }

    #[test]
    fn test_mri_ignores_configured_counts() {
        let config = DraftConfig {
            mode: DraftMode::Mri,
            bans_per_team: 1,
            protects_per_team: 5,
            ..DraftConfig::default()
        };

        assert_eq!(config.effective_bans(), MRI_BANS_PER_TEAM);
        assert_eq!(config.effective_protects(), MRI_PROTECTS_PER_TEAM);
    }

    #[test]
    fn test_mode_round_trips_as_text() {
        assert_eq!(DraftMode::Mri.to_string(), "MRI");
        assert_eq!("MRC".parse::<DraftMode>().unwrap(), DraftMode::Mrc);
    }
}
