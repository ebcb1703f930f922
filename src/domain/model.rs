use crate::utils::error::DrawError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

/// A person taking part in a draw. Identity is the name alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Written as `GIVER`, `RECEIVER` or `BOTH`; read in any letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum ParticipantRole {
    Giver,
    Receiver,
    Both,
}

impl ParticipantRole {
    pub const ALL: [ParticipantRole; 3] = [Self::Giver, Self::Receiver, Self::Both];

    pub fn is_giver(self) -> bool {
        matches!(self, Self::Giver | Self::Both)
    }

    pub fn is_receiver(self) -> bool {
        matches!(self, Self::Receiver | Self::Both)
    }
}

impl FromStr for ParticipantRole {
    type Err = DrawError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "GIVER" => Ok(Self::Giver),
            "RECEIVER" => Ok(Self::Receiver),
            "BOTH" => Ok(Self::Both),
            _ => Err(DrawError::UnknownRole {
                value: value.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ParticipantRole {
    type Error = DrawError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Giver => "giver",
            Self::Receiver => "receiver",
            Self::Both => "giver and receiver",
        };
        f.write_str(label)
    }
}

/// A person, their role in the exchange and the people they must never give to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    person: Person,
    role: ParticipantRole,
    exclusions: BTreeSet<String>,
}

impl Participant {
    pub fn new<I, S>(name: impl Into<String>, role: ParticipantRole, exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            person: Person::new(name),
            role,
            exclusions: exclusions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn role(&self) -> ParticipantRole {
        self.role
    }

    pub fn exclusions(&self) -> impl Iterator<Item = &str> {
        self.exclusions.iter().map(String::as_str)
    }

    pub fn is_giver(&self) -> bool {
        self.role.is_giver()
    }

    pub fn is_receiver(&self) -> bool {
        self.role.is_receiver()
    }
}

/// A directed `from -> to` pair. Used both for assignments and for forbidden pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GiverAssignment {
    pub from: Person,
    pub to: Person,
}

impl GiverAssignment {
    pub fn new(from: Person, to: Person) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for GiverAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// The result of a draw.
///
/// Assignments keep the order in which the search produced them, but two
/// selections are equal when they hold the same set of assignments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawSelection {
    givers: Vec<GiverAssignment>,
}

impl DrawSelection {
    pub fn new(givers: Vec<GiverAssignment>) -> Self {
        Self { givers }
    }

    pub fn givers(&self) -> &[GiverAssignment] {
        &self.givers
    }

    pub fn len(&self) -> usize {
        self.givers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.givers.is_empty()
    }

    /// Who `giver` was drawn to give to, if they give at all.
    pub fn recipient_of(&self, giver: &Person) -> Option<&Person> {
        self.givers
            .iter()
            .find(|assignment| &assignment.from == giver)
            .map(|assignment| &assignment.to)
    }

    pub fn assignment_set(&self) -> HashSet<&GiverAssignment> {
        self.givers.iter().collect()
    }
}

impl PartialEq for DrawSelection {
    fn eq(&self, other: &Self) -> bool {
        self.givers.len() == other.givers.len() && self.assignment_set() == other.assignment_set()
    }
}

impl Eq for DrawSelection {}

impl IntoIterator for DrawSelection {
    type Item = GiverAssignment;
    type IntoIter = std::vec::IntoIter<GiverAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.givers.into_iter()
    }
}
