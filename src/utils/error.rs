use thiserror::Error;

/// Failures surfaced by requirement construction and by a draw.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("Invalid roster: {reason}")]
    InvalidRoster { reason: String },

    #[error("No valid assignment exists: {reason}")]
    Infeasible { reason: String },

    #[error("Participant '{participant}' excludes unknown participant '{excluded}'")]
    UnresolvedExclusion { participant: String, excluded: String },

    #[error("Participant '{name}' appears more than once")]
    DuplicateParticipant { name: String },

    #[error("Participant names cannot be blank")]
    BlankName,

    #[error("Unknown participant role '{value}', expected GIVER, RECEIVER or BOTH")]
    UnknownRole { value: String },
}

#[derive(Error, Debug)]
pub enum SantaError {
    #[error(transparent)]
    Draw(#[from] DrawError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML writing error: {0}")]
    TomlWriteError(#[from] toml::ser::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported session file format: {path}")]
    UnsupportedFormat { path: String },
}

impl SantaError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SantaError::Draw(DrawError::Infeasible { .. }) => {
                "The exclusions make it impossible to draw names for everyone.".to_string()
            }
            SantaError::Draw(DrawError::InvalidRoster { reason }) => {
                format!("The participant list cannot be drawn: {}", reason)
            }
            SantaError::Draw(err) => format!("The participant list is inconsistent: {}", err),
            SantaError::IoError(err) => format!("Could not access a file: {}", err),
            SantaError::JsonError(_) | SantaError::TomlError(_) => {
                "The session file could not be read.".to_string()
            }
            SantaError::TomlWriteError(_) | SantaError::CsvError(_) => {
                "The draw result could not be written.".to_string()
            }
            SantaError::InvalidConfigValueError { .. } | SantaError::UnsupportedFormat { .. } => {
                self.to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SantaError::Draw(DrawError::Infeasible { .. }) => {
                "Remove some exclusions or balance the number of givers and receivers"
            }
            SantaError::Draw(DrawError::InvalidRoster { .. }) => {
                "Add at least two participants, with someone able to give and someone able to receive"
            }
            SantaError::Draw(DrawError::UnresolvedExclusion { .. }) => {
                "Check the spelling of excluded names against the participant list"
            }
            SantaError::Draw(DrawError::DuplicateParticipant { .. }) => {
                "Give every participant a distinct name"
            }
            SantaError::Draw(DrawError::BlankName) => "Fill in every participant name",
            SantaError::Draw(DrawError::UnknownRole { .. }) => {
                "Use GIVER, RECEIVER or BOTH as the participant role"
            }
            SantaError::IoError(_) => "Check that the path exists and is accessible",
            SantaError::JsonError(_) | SantaError::TomlError(_) => {
                "Make sure the session file is valid JSON or TOML"
            }
            SantaError::UnsupportedFormat { .. } => "Use a .json or .toml session file",
            SantaError::TomlWriteError(_)
            | SantaError::CsvError(_)
            | SantaError::InvalidConfigValueError { .. } => "Check the command line options",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SantaError::Draw(DrawError::Infeasible { .. }) => 3,
            SantaError::Draw(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
