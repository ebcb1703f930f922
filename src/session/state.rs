use crate::config::DrawSettings;
use crate::domain::ParticipantRole;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantState {
    pub name: String,
    pub role: ParticipantRole,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<String>,
}

impl ParticipantState {
    pub fn new<I, S>(name: impl Into<String>, role: ParticipantRole, exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            role,
            exclusions: exclusions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything a user edits for one gift exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub draw_name: String,
    /// Protects the per-giver result files handed out after the draw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<DrawSettings>,
    #[serde(default)]
    pub participants: Vec<ParticipantState>,
}

impl SessionState {
    pub fn new(draw_name: impl Into<String>, participants: Vec<ParticipantState>) -> Self {
        Self {
            draw_name: draw_name.into(),
            password: None,
            settings: None,
            participants,
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_settings(mut self, settings: DrawSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// The name to show for this draw, falling back to a generic title.
    pub fn display_name(&self) -> &str {
        let name = self.draw_name.trim();
        if name.is_empty() {
            "Secret Santa"
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_session() {
        let content = r#"
draw_name = "Office 2026"

[settings]
seed = 42

[[participants]]
name = "Ann"
role = "both"
exclusions = ["Bob"]

[[participants]]
name = "Bob"
role = "BOTH"
"#;

        let state: SessionState = toml::from_str(content).unwrap();

        assert_eq!(state.display_name(), "Office 2026");
        assert_eq!(state.participants.len(), 2);
        assert_eq!(state.participants[0].exclusions, vec!["Bob".to_string()]);
        assert!(state.participants[1].exclusions.is_empty());
        assert_eq!(state.settings.unwrap().seed, Some(42));
    }

    #[test]
    fn test_blank_draw_name_falls_back() {
        let state = SessionState::new("  ", Vec::new());
        assert_eq!(state.display_name(), "Secret Santa");
    }
}
