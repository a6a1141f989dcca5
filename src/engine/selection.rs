use crate::engine::eligibility::{resolve_status, DraftContext, HeroStatus};
use crate::models::draft_config::DraftMode;
use crate::models::draft_state::DraftState;
use crate::opt::*;

/// The gate's whole state: either nothing is on offer, or exactly one hero
/// name is awaiting confirmation. Modeled as an enum so a second candidate
/// cannot exist by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingSelection {
    Idle,
    Pending(String),
}

/// Two-phase commit gate between a click on the grid and a committed
/// selection. A hero is first proposed, which opens a confirmation prompt;
/// only confirming hands the name to the caller, exactly once. Invalid
/// operations are silent no-ops and leave the prior state intact.
#[derive(Debug)]
pub struct SelectionGate {
    pending: PendingSelection,
}

impl Default for SelectionGate {
    fn default() -> Self {
        SelectionGate::new()
    }
}

impl SelectionGate {
    pub fn new() -> Self {
        SelectionGate {
            pending: PendingSelection::Idle,
        }
    }

    /// Offers a hero for the current turn. Rejected while another candidate
    /// is awaiting confirmation, while input is disabled, and for any hero
    /// the resolver does not classify as available. Returns whether the
    /// proposal was accepted.
    pub fn propose(
        &mut self,
        hero_name: &str,
        state: &DraftState,
        ctx: &DraftContext,
        mode: DraftMode,
    ) -> bool {
        if let PendingSelection::Pending(candidate) = &self.pending {
            log_if(
                &format!(
                    "propose({}) rejected, {} still awaiting confirmation",
                    hero_name, candidate
                ),
                DbgFlg::Engine,
            );
            return false;
        }

        if ctx.disabled {
            return false;
        }

        if resolve_status(hero_name, state, ctx, mode) != HeroStatus::Available {
            return false;
        }

        self.pending = PendingSelection::Pending(hero_name.to_string());
        true
    }

    /// Commits the pending candidate. The returned name is the committed
    /// selection the caller folds into the next draft state; `None` when
    /// nothing was pending.
    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.pending, PendingSelection::Idle) {
            PendingSelection::Pending(candidate) => {
                log_if(&format!("committed {}", candidate), DbgFlg::Engine);
                Some(candidate)
            }
            PendingSelection::Idle => None,
        }
    }

    /// Dismisses the prompt. Always succeeds, commits nothing.
    pub fn cancel(&mut self) {
        self.pending = PendingSelection::Idle;
    }

    pub fn pending(&self) -> Option<&str> {
        match &self.pending {
            PendingSelection::Pending(candidate) => Some(candidate),
            PendingSelection::Idle => None,
        }
    }
}
