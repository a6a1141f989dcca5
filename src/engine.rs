pub mod eligibility;
pub mod selection;

pub use eligibility::{resolve_status, DraftContext, HeroStatus};
pub use selection::SelectionGate;
