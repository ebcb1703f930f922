// Domain layer: the draw model, requirement construction and the ports
// (interfaces) the core and adapters meet at.

pub mod model;
pub mod ports;
pub mod requirements;

pub use model::{DrawSelection, GiverAssignment, Participant, ParticipantRole, Person};
pub use ports::{DrawService, SessionStore, SettingsProvider};
pub use requirements::{DrawRequirements, RequirementsBuilder};
