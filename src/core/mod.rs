pub mod draw;
pub mod feasibility;
pub mod matcher;

pub use crate::domain::{DrawRequirements, DrawSelection, DrawService};
pub use crate::utils::error::{DrawError, Result};
pub use draw::RandomDrawService;
pub use matcher::{MatchExtender, MatchingEngine, SearchOutcome, SearchStats};
