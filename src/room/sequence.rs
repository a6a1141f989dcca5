use crate::models::draft_config::DraftConfig;
use crate::models::draft_room::TurnStep;
use crate::models::draft_state::ActionKind;

/// Builds the turn plan for one draft: a ban phase followed by a protect
/// phase, both alternating between the teams with the starting team acting
/// first. MRC takes its counts from the room settings; MRI always produces
/// the fixed 4-ban / 2-protect shape.
pub fn build_sequence(config: &DraftConfig) -> Vec<TurnStep> {
    let first = config.starting_team;
    let second = first.opponent();

    let mut sequence = Vec::new();
    for _ in 0..config.effective_bans() {
        sequence.push(TurnStep {
            team: first,
            action: ActionKind::Ban,
        });
        sequence.push(TurnStep {
            team: second,
            action: ActionKind::Ban,
        });
    }
    for _ in 0..config.effective_protects() {
        sequence.push(TurnStep {
            team: first,
            action: ActionKind::Protect,
        });
        sequence.push(TurnStep {
            team: second,
            action: ActionKind::Protect,
        });
    }

    sequence
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::models::draft_config::DraftMode;
    use crate::models::draft_state::Team;

    fn count(sequence: &[TurnStep], team: Team, action: ActionKind) -> usize {
        sequence
            .iter()
            .filter(|step| step.team == team && step.action == action)
            .count()
    }

    #[test]
    fn test_mrc_counts_follow_config() {
        let config = DraftConfig {
            bans_per_team: 3,
            protects_per_team: 2,
            ..DraftConfig::default()
        };
        let sequence = build_sequence(&config);

        assert_eq!(sequence.len(), 10);
        for team in [Team::Team1, Team::Team2] {
            assert_eq!(count(&sequence, team, ActionKind::Ban), 3);
            assert_eq!(count(&sequence, team, ActionKind::Protect), 2);
        }
    }

    #[test]
    fn test_mri_shape_is_fixed() {
        let config = DraftConfig {
            mode: DraftMode::Mri,
            bans_per_team: 1,
            protects_per_team: 5,
            ..DraftConfig::default()
        };
        let sequence = build_sequence(&config);

        assert_eq!(sequence.len(), 12);
        for team in [Team::Team1, Team::Team2] {
            assert_eq!(count(&sequence, team, ActionKind::Ban), 4);
            assert_eq!(count(&sequence, team, ActionKind::Protect), 2);
        }
    }

    #[test]
    fn test_starting_team_acts_first_in_both_phases() {
        let config = DraftConfig {
            starting_team: Team::Team2,
            ..DraftConfig::default()
        };
        let sequence = build_sequence(&config);

        assert_eq!(sequence[0].team, Team::Team2);
        assert_eq!(sequence[0].action, ActionKind::Ban);

        let first_protect = sequence
            .iter()
            .find(|step| step.action == ActionKind::Protect)
            .unwrap();
        assert_eq!(first_protect.team, Team::Team2);
    }

    #[test]
    fn test_phases_alternate() {
        let sequence = build_sequence(&DraftConfig::default());

        for pair in sequence.chunks(2) {
            assert_eq!(pair[0].team, pair[1].team.opponent());
            assert_eq!(pair[0].action, pair[1].action);
        }
    }
}
