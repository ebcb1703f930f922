use crate::domain::model::{GiverAssignment, Participant, ParticipantRole, Person};
use crate::utils::error::DrawError;
use std::collections::{HashMap, HashSet};

/// The validated input to one draw: the roster plus the directed pairs it forbids.
#[derive(Debug, Clone)]
pub struct DrawRequirements {
    participants: Vec<Participant>,
    forbidden: HashSet<GiverAssignment>,
}

impl DrawRequirements {
    /// Builds requirements from a roster, resolving every exclusion name.
    ///
    /// Names must be non-blank and unique; an exclusion that names someone
    /// outside the roster is rejected. Exclusions are directional: they only
    /// constrain the excluding participant as a giver.
    pub fn new(participants: Vec<Participant>) -> Result<Self, DrawError> {
        let mut index: HashMap<&str, &Person> = HashMap::with_capacity(participants.len());

        for participant in &participants {
            if participant.name().trim().is_empty() {
                return Err(DrawError::BlankName);
            }
            if index.insert(participant.name(), participant.person()).is_some() {
                return Err(DrawError::DuplicateParticipant {
                    name: participant.name().to_string(),
                });
            }
        }

        let mut forbidden = HashSet::new();
        for participant in &participants {
            for excluded in participant.exclusions() {
                let to = index
                    .get(excluded)
                    .ok_or_else(|| DrawError::UnresolvedExclusion {
                        participant: participant.name().to_string(),
                        excluded: excluded.to_string(),
                    })?;
                forbidden.insert(GiverAssignment::new(
                    participant.person().clone(),
                    (*to).clone(),
                ));
            }
        }

        Ok(Self {
            participants,
            forbidden,
        })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn forbidden_pairs(&self) -> &HashSet<GiverAssignment> {
        &self.forbidden
    }

    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name() == name)
    }

    pub fn givers(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.is_giver())
    }

    pub fn receivers(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.is_receiver())
    }

    pub fn is_forbidden(&self, from: &Person, to: &Person) -> bool {
        self.forbidden
            .contains(&GiverAssignment::new(from.clone(), to.clone()))
    }
}

/// Fluent construction of [`DrawRequirements`], mostly for tests and translators.
#[derive(Debug, Default)]
pub struct RequirementsBuilder {
    people: Vec<(String, ParticipantRole)>,
    restrictions: HashMap<String, Vec<String>>,
}

impl RequirementsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn person(mut self, name: impl Into<String>, role: ParticipantRole) -> Self {
        self.people.push((name.into(), role));
        self
    }

    pub fn restrictions<I, S>(mut self, name: impl Into<String>, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restrictions
            .entry(name.into())
            .or_default()
            .extend(excluded.into_iter().map(Into::into));
        self
    }

    pub fn build(mut self) -> Result<DrawRequirements, DrawError> {
        if let Some(name) = self
            .restrictions
            .keys()
            .find(|name| !self.people.iter().any(|(person, _)| person == *name))
        {
            return Err(DrawError::InvalidRoster {
                reason: format!("restrictions given for unknown participant '{}'", name),
            });
        }

        let participants = self
            .people
            .into_iter()
            .map(|(name, role)| {
                let exclusions = self.restrictions.remove(&name).unwrap_or_default();
                Participant::new(name, role, exclusions)
            })
            .collect();

        DrawRequirements::new(participants)
    }
}
