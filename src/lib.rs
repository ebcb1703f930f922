//! Secret Santa draws: a complete giver -> receiver assignment that honours
//! every participant's role and exclusions, or a proof that none exists.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod session;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{DrawSettings, LocalSessionStore};

pub use app::{DrawRunner, OutputFormat, RunReport};
pub use crate::core::{MatchExtender, MatchingEngine, RandomDrawService};
pub use domain::{
    DrawRequirements, DrawSelection, DrawService, GiverAssignment, Participant, ParticipantRole,
    Person, RequirementsBuilder,
};
pub use utils::error::{DrawError, Result, SantaError};
