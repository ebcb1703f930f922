use crate::domain::{DrawRequirements, Participant};
use crate::session::SessionState;
use crate::utils::error::DrawError;
use std::collections::BTreeSet;

pub trait SessionStateTranslator {
    fn to_requirements(&self, state: &SessionState) -> Result<DrawRequirements, DrawError>;
}

/// Tidies what a user typed before building requirements.
///
/// Names and exclusions are trimmed, rows without a name are skipped and
/// blank or repeated exclusions are dropped. Anything still inconsistent
/// (duplicates, unknown exclusions) is left for
/// [`DrawRequirements::new`] to reject.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimmingTranslator;

impl SessionStateTranslator for TrimmingTranslator {
    fn to_requirements(&self, state: &SessionState) -> Result<DrawRequirements, DrawError> {
        let participants: Vec<Participant> = state
            .participants
            .iter()
            .filter(|row| !row.name.trim().is_empty())
            .map(|row| {
                let exclusions: BTreeSet<&str> = row
                    .exclusions
                    .iter()
                    .map(|name| name.trim())
                    .filter(|name| !name.is_empty())
                    .collect();
                Participant::new(row.name.trim(), row.role, exclusions)
            })
            .collect();

        tracing::debug!(
            rows = state.participants.len(),
            participants = participants.len(),
            "Translated session state"
        );

        DrawRequirements::new(participants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ParticipantRole, Person};
    use crate::session::ParticipantState;

    #[test]
    fn test_trims_and_skips_blank_rows() {
        let state = SessionState::new(
            "Family",
            vec![
                ParticipantState::new(" Ann ", ParticipantRole::Both, [" Bob", "", "Bob "]),
                ParticipantState::new("Bob", ParticipantRole::Both, Vec::<String>::new()),
                ParticipantState::new("   ", ParticipantRole::Giver, Vec::<String>::new()),
            ],
        );

        let requirements = TrimmingTranslator.to_requirements(&state).unwrap();

        assert_eq!(requirements.participants().len(), 2);
        assert_eq!(requirements.forbidden_pairs().len(), 1);
        assert!(requirements.is_forbidden(&Person::new("Ann"), &Person::new("Bob")));
    }

    #[test]
    fn test_unknown_exclusion_surfaces() {
        let state = SessionState::new(
            "Family",
            vec![
                ParticipantState::new("Ann", ParticipantRole::Both, ["Carl"]),
                ParticipantState::new("Bob", ParticipantRole::Both, Vec::<String>::new()),
            ],
        );

        let err = TrimmingTranslator.to_requirements(&state).unwrap_err();
        assert!(matches!(err, DrawError::UnresolvedExclusion { excluded, .. } if excluded == "Carl"));
    }
}
