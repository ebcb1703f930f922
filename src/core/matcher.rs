//! Backtracking search for a complete giver -> receiver assignment.
//!
//! The search is a pure, deterministic function of its inputs: the roster
//! (whose order fixes the order candidates are tried in), the order givers
//! are satisfied in, and the forbidden pairs. Varying those orders is the
//! caller's business.
//!
//! Partial matches are [`MatchExtender`]s: persistent chains whose links are
//! shared between every continuation built on them, so trying a candidate is
//! one allocation and abandoning it is dropping that allocation.
//!
//! A candidate is only followed when the givers still to come can each be
//! matched to a distinct open receiver. Every branch the search enters can
//! therefore be completed, and a feasible ordering is satisfied without
//! backtracking past the candidate being tried.

use crate::core::feasibility::first_unmatched;
use crate::domain::{GiverAssignment, Participant, Person};
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Debug)]
struct Link {
    assignment: GiverAssignment,
    parent: Option<Rc<Link>>,
    depth: usize,
}

/// An immutable partial assignment.
///
/// Cloning is cheap and [`extend`](Self::extend) never disturbs the chain it
/// starts from.
#[derive(Debug, Clone, Default)]
pub struct MatchExtender {
    head: Option<Rc<Link>>,
}

impl MatchExtender {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn extend(&self, assignment: GiverAssignment) -> Self {
        Self {
            head: Some(Rc::new(Link {
                assignment,
                parent: self.head.clone(),
                depth: self.len() + 1,
            })),
        }
    }

    /// Newest link first.
    fn links(&self) -> impl Iterator<Item = &Link> {
        std::iter::successors(self.head.as_deref(), |link| link.parent.as_deref())
    }

    pub fn is_consumed(&self, receiver: &Person) -> bool {
        self.links().any(|link| &link.assignment.to == receiver)
    }

    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, |link| link.depth)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Assignments in the order they were added. Each call starts afresh.
    pub fn assignments(&self) -> impl Iterator<Item = &GiverAssignment> {
        let mut links: Vec<&GiverAssignment> = self.links().map(|link| &link.assignment).collect();
        links.reverse();
        links.into_iter()
    }

    pub fn to_assignments(&self) -> Vec<GiverAssignment> {
        self.assignments().cloned().collect()
    }
}

/// How one search attempt ended.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Found(MatchExtender),
    /// Every branch for this giver ordering was explored without success.
    Exhausted,
    /// The step limit ran out before the search could finish.
    Abandoned,
}

impl SearchOutcome {
    pub fn into_match(self) -> Option<MatchExtender> {
        match self {
            SearchOutcome::Found(extender) => Some(extender),
            SearchOutcome::Exhausted | SearchOutcome::Abandoned => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate assignments tried.
    pub extensions: u64,
    /// Givers left with no workable candidate.
    pub backtracks: u64,
    /// Candidates dropped because the remaining givers could not all be matched.
    pub pruned: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingEngine {
    step_limit: Option<u64>,
}

struct Search<'a> {
    all_participants: &'a [Participant],
    ordered_givers: &'a [Participant],
    forbidden: &'a HashSet<GiverAssignment>,
    step_limit: Option<u64>,
    stats: SearchStats,
}

enum Step {
    Complete(MatchExtender),
    Failed,
    OutOfSteps,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine that gives up after `limit` candidate assignments.
    pub fn with_step_limit(limit: u64) -> Self {
        Self {
            step_limit: Some(limit),
        }
    }

    pub fn step_limit(&self) -> Option<u64> {
        self.step_limit
    }

    /// Finds one complete assignment for `ordered_givers`, or `None`.
    ///
    /// With no givers the result is an empty match, not `None`.
    pub fn find_match(
        &self,
        all_participants: &[Participant],
        ordered_givers: &[Participant],
        forbidden: &HashSet<GiverAssignment>,
    ) -> Option<MatchExtender> {
        self.search(all_participants, ordered_givers, forbidden)
            .0
            .into_match()
    }

    pub fn search(
        &self,
        all_participants: &[Participant],
        ordered_givers: &[Participant],
        forbidden: &HashSet<GiverAssignment>,
    ) -> (SearchOutcome, SearchStats) {
        let mut search = Search {
            all_participants,
            ordered_givers,
            forbidden,
            step_limit: self.step_limit,
            stats: SearchStats::default(),
        };

        let outcome = match search.satisfy(0, &MatchExtender::empty()) {
            Step::Complete(extender) => SearchOutcome::Found(extender),
            Step::Failed => SearchOutcome::Exhausted,
            Step::OutOfSteps => SearchOutcome::Abandoned,
        };

        tracing::trace!(
            extensions = search.stats.extensions,
            backtracks = search.stats.backtracks,
            pruned = search.stats.pruned,
            "search finished"
        );

        (outcome, search.stats)
    }
}

impl Search<'_> {
    fn satisfy(&mut self, position: usize, current: &MatchExtender) -> Step {
        let Some(giver) = self.ordered_givers.get(position) else {
            return Step::Complete(current.clone());
        };

        for receiver in self.all_participants {
            if !self.is_candidate(giver, receiver, current) {
                continue;
            }

            if self
                .step_limit
                .is_some_and(|limit| self.stats.extensions >= limit)
            {
                return Step::OutOfSteps;
            }
            self.stats.extensions += 1;

            let extended = current.extend(GiverAssignment::new(
                giver.person().clone(),
                receiver.person().clone(),
            ));
            if !self.can_complete(position + 1, &extended) {
                self.stats.pruned += 1;
                continue;
            }
            match self.satisfy(position + 1, &extended) {
                Step::Failed => continue,
                done => return done,
            }
        }

        self.stats.backtracks += 1;
        Step::Failed
    }

    fn allows(&self, giver: &Participant, receiver: &Participant) -> bool {
        receiver.is_receiver()
            && receiver.person() != giver.person()
            && !self.forbidden.contains(&GiverAssignment::new(
                giver.person().clone(),
                receiver.person().clone(),
            ))
    }

    fn is_candidate(
        &self,
        giver: &Participant,
        receiver: &Participant,
        current: &MatchExtender,
    ) -> bool {
        self.allows(giver, receiver) && !current.is_consumed(receiver.person())
    }

    /// Whether the givers from `position` on can each take a distinct open receiver.
    fn can_complete(&self, position: usize, current: &MatchExtender) -> bool {
        let remaining = &self.ordered_givers[position..];
        if remaining.is_empty() {
            return true;
        }

        let open: Vec<&Participant> = self
            .all_participants
            .iter()
            .filter(|receiver| receiver.is_receiver() && !current.is_consumed(receiver.person()))
            .collect();
        let edges: Vec<Vec<usize>> = remaining
            .iter()
            .map(|giver| {
                open.iter()
                    .enumerate()
                    .filter(|(_, receiver)| self.allows(giver, receiver))
                    .map(|(index, _)| index)
                    .collect()
            })
            .collect();

        first_unmatched(&edges, open.len()).is_none()
    }
}
