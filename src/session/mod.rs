//! The persisted form of a draw session and its translation into
//! [`DrawRequirements`](crate::domain::DrawRequirements).

mod state;
mod translator;

pub use state::{ParticipantState, SessionState};
pub use translator::{SessionStateTranslator, TrimmingTranslator};
