use crate::models::draft_config::DraftMode;
use crate::models::draft_state::{ActionKind, DraftState, Team};

/// Per-evaluation inputs that are not part of the persisted history: whose
/// turn it is, what kind of action the turn performs, and whether input is
/// currently accepted at all. `current_action` is `None` when the draft is
/// only being displayed, outside any turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftContext {
    pub current_team: Team,
    pub current_action: Option<ActionKind>,
    pub disabled: bool,
}

/// Classification of one hero under the current turn's perspective.
/// Derived on every evaluation, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroStatus {
    Available,
    Banned,
    BannedByCurrentTeam,
    Protected(Team),
}

/// Classifies a hero given the draft history so far. Pure and total: every
/// input combination maps to exactly one status, and branch order is the
/// conflict-resolution policy for heroes that ended up in more than one set.
pub fn resolve_status(
    hero_name: &str,
    state: &DraftState,
    ctx: &DraftContext,
    mode: DraftMode,
) -> HeroStatus {
    match mode {
        DraftMode::Mrc => resolve_mrc(hero_name, state),
        DraftMode::Mri => resolve_mri(hero_name, state, ctx),
    }
}

/// MRC: bans are global and visible to both teams, protections are
/// team-scoped. A ban outranks any protect-set membership.
fn resolve_mrc(hero_name: &str, state: &DraftState) -> HeroStatus {
    if state.is_banned_global(hero_name) {
        return HeroStatus::Banned;
    }
    if state.is_protected_by(hero_name, Team::Team1) {
        return HeroStatus::Protected(Team::Team1);
    }
    if state.is_protected_by(hero_name, Team::Team2) {
        return HeroStatus::Protected(Team::Team2);
    }

    HeroStatus::Available
}

/// MRI: bans are restrictions a team places against its opponent, and
/// protections are a team's private shield. Both are read relative to the
/// acting team, so the same history classifies differently per viewer and
/// per action kind.
fn resolve_mri(hero_name: &str, state: &DraftState, ctx: &DraftContext) -> HeroStatus {
    let current = ctx.current_team;
    let opponent = current.opponent();

    match ctx.current_action {
        Some(ActionKind::Protect) => {
            // A hero the opponent already banned is out of play and cannot
            // be protected.
            if state.is_banned_by(hero_name, opponent) {
                return HeroStatus::Banned;
            }

            // The opponent's protection does not block this team from
            // protecting the same hero; protect sets are independent.
            if state.is_protected_by(hero_name, opponent) {
                return HeroStatus::Available;
            }

            if state.is_protected_by(hero_name, current) {
                return HeroStatus::Protected(current);
            }

            HeroStatus::Available
        }
        Some(ActionKind::Ban) => {
            // A hero shielded by the team being targeted cannot be banned
            // against them.
            if state.is_protected_by(hero_name, opponent) {
                return HeroStatus::Protected(opponent);
            }

            // Shown distinctly so the acting team knows this is its own
            // spent ban, not the opponent's.
            if state.is_banned_by(hero_name, current) {
                return HeroStatus::BannedByCurrentTeam;
            }

            // Bans do not deplete a shared pool; the opponent's ban leaves
            // the hero bannable by this team too.
            HeroStatus::Available
        }
        None => {
            // Display-only view: a ban from either team grays the hero out.
            if state.is_banned_by(hero_name, Team::Team1)
                || state.is_banned_by(hero_name, Team::Team2)
            {
                return HeroStatus::Banned;
            }

            HeroStatus::Available
        }
    }
}
