//! Up-front proof that a perfect assignment exists.
//!
//! Givers and receivers form a bipartite graph whose edges are the allowed
//! pairs; a draw is possible exactly when that graph has a matching covering
//! both sides. Augmenting paths find a maximum matching in polynomial time,
//! so infeasible rosters are rejected without an exhaustive search.

use crate::domain::DrawRequirements;
use crate::utils::error::DrawError;

pub fn check_feasible(requirements: &DrawRequirements) -> Result<(), DrawError> {
    let givers: Vec<_> = requirements.givers().collect();
    let receivers: Vec<_> = requirements.receivers().collect();

    if givers.len() != receivers.len() {
        return Err(DrawError::Infeasible {
            reason: format!(
                "{} participants can give but {} can receive",
                givers.len(),
                receivers.len()
            ),
        });
    }

    let edges: Vec<Vec<usize>> = givers
        .iter()
        .map(|giver| {
            receivers
                .iter()
                .enumerate()
                .filter(|(_, receiver)| {
                    receiver.person() != giver.person()
                        && !requirements.is_forbidden(giver.person(), receiver.person())
                })
                .map(|(index, _)| index)
                .collect()
        })
        .collect();

    if let Some(stuck) = edges.iter().position(Vec::is_empty) {
        return Err(DrawError::Infeasible {
            reason: format!("'{}' has nobody they are allowed to give to", givers[stuck].name()),
        });
    }

    if let Some(giver) = first_unmatched(&edges, receivers.len()) {
        return Err(DrawError::Infeasible {
            reason: format!(
                "the exclusions leave no way to find a recipient for '{}' alongside everyone else",
                givers[giver].name()
            ),
        });
    }

    Ok(())
}

/// Tries to give every giver a distinct receiver. `edges[g]` lists the
/// receivers (indices below `receivers`) giver `g` may take. Returns the
/// first giver that cannot be placed, or `None` when all of them are.
pub(crate) fn first_unmatched(edges: &[Vec<usize>], receivers: usize) -> Option<usize> {
    if edges.len() > receivers {
        return Some(receivers);
    }

    let mut receiver_match: Vec<Option<usize>> = vec![None; receivers];
    (0..edges.len()).find(|&giver| {
        let mut visited = vec![false; receivers];
        !augment(giver, edges, &mut visited, &mut receiver_match)
    })
}

fn augment(
    giver: usize,
    edges: &[Vec<usize>],
    visited: &mut [bool],
    receiver_match: &mut [Option<usize>],
) -> bool {
    for &receiver in &edges[giver] {
        if visited[receiver] {
            continue;
        }
        visited[receiver] = true;

        let free = match receiver_match[receiver] {
            None => true,
            Some(holder) => augment(holder, edges, visited, receiver_match),
        };
        if free {
            receiver_match[receiver] = Some(giver);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ParticipantRole, RequirementsBuilder};

    #[test]
    fn test_unbalanced_roles_are_infeasible() {
        let requirements = RequirementsBuilder::new()
            .person("G1", ParticipantRole::Giver)
            .person("G2", ParticipantRole::Giver)
            .person("R", ParticipantRole::Receiver)
            .build()
            .unwrap();

        let err = check_feasible(&requirements).unwrap_err();
        assert!(matches!(err, DrawError::Infeasible { reason } if reason.contains("2 participants can give")));
    }

    #[test]
    fn test_hall_violation_is_detected() {
        // A and B may only give to C, so one of them is left over.
        let requirements = RequirementsBuilder::new()
            .person("A", ParticipantRole::Both)
            .person("B", ParticipantRole::Both)
            .person("C", ParticipantRole::Both)
            .person("D", ParticipantRole::Both)
            .restrictions("A", ["B", "D"])
            .restrictions("B", ["A", "D"])
            .build()
            .unwrap();

        assert!(check_feasible(&requirements).is_err());
    }

    #[test]
    fn test_feasible_roster_passes() {
        let requirements = RequirementsBuilder::new()
            .person("A", ParticipantRole::Both)
            .person("B", ParticipantRole::Both)
            .person("C", ParticipantRole::Both)
            .restrictions("A", ["B"])
            .build()
            .unwrap();

        assert!(check_feasible(&requirements).is_ok());
    }
}
