use serde::{Deserialize, Serialize};

use crate::models::draft_config::DraftConfig;
use crate::models::draft_state::{ActionKind, DraftState, Team};
use crate::opt::*;

/// One slot of the draft's turn plan: which team acts and what the action is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStep {
    pub team: Team,
    pub action: ActionKind,
}

/// One draft session: immutable settings, the accumulated ban/protect
/// history, and a cursor into the turn plan. The engine never touches this
/// struct; only the room loop folds committed selections into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftRoom {
    pub room_id: String,
    pub config: DraftConfig,
    pub created: Option<String>,
    pub state: DraftState,
    sequence: Vec<TurnStep>,
    cursor: usize,
}

impl DraftRoom {
    pub fn new(room_id: &str, config: DraftConfig, sequence: Vec<TurnStep>) -> Self {
        DraftRoom {
            room_id: room_id.to_string(),
            config,
            created: Some(
                chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            ),
            state: DraftState::new(),
            sequence,
            cursor: 0,
        }
    }

    pub fn current_step(&self) -> Option<TurnStep> {
        self.sequence.get(self.cursor).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.sequence.len()
    }

    pub fn turn_number(&self) -> usize {
        self.cursor + 1
    }

    pub fn total_turns(&self) -> usize {
        self.sequence.len()
    }

    /// Folds a committed selection into the history under the current turn's
    /// team and action, then advances to the next turn.
    pub fn apply_selection(&mut self, hero_name: &str) -> Res<TurnStep> {
        let step = self
            .current_step()
            .ok_or("Draft is already complete".to_string())?;

        match step.action {
            ActionKind::Ban => {
                self.state.record_ban(hero_name, step.team, self.config.mode);
            }
            ActionKind::Protect => {
                self.state.record_protect(hero_name, step.team);
            }
        }
        self.cursor += 1;

        Ok(step)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::models::draft_config::DraftMode;

    fn two_step_room(mode: DraftMode) -> DraftRoom {
        let config = DraftConfig {
            mode,
            ..DraftConfig::default()
        };
        let sequence = vec![
            TurnStep {
                team: Team::Team1,
                action: ActionKind::Ban,
            },
            TurnStep {
                team: Team::Team2,
                action: ActionKind::Protect,
            },
        ];
        DraftRoom::new("Ab3dEf9h", config, sequence)
    }

    #[test]
    fn test_apply_folds_under_current_step() {
        let mut room = two_step_room(DraftMode::Mrc);

        let step = room.apply_selection("Ironhide").unwrap();
        assert_eq!(step.team, Team::Team1);
        assert_eq!(step.action, ActionKind::Ban);
        assert!(room.state.is_banned_global("Ironhide"));

        let step = room.apply_selection("Whisper").unwrap();
        assert_eq!(step.team, Team::Team2);
        assert!(room.state.is_protected_by("Whisper", Team::Team2));

        assert!(room.is_complete());
    }

    #[test]
    fn test_apply_tags_bans_in_mri() {
        let mut room = two_step_room(DraftMode::Mri);

        room.apply_selection("Ironhide").unwrap();
        assert!(room.state.is_banned_by("Ironhide", Team::Team1));
        assert!(!room.state.is_banned_global("Ironhide"));
    }

    #[test]
    fn test_apply_after_completion_is_rejected() {
        let mut room = two_step_room(DraftMode::Mrc);
        room.apply_selection("Ironhide").unwrap();
        room.apply_selection("Whisper").unwrap();

        assert!(room.apply_selection("Thornveil").is_err());
    }
}
