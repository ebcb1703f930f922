use crate::config::DrawSettings;
use crate::core::feasibility::check_feasible;
use crate::core::matcher::{MatchingEngine, SearchOutcome};
use crate::domain::{DrawRequirements, DrawSelection, DrawService, Participant};
use crate::utils::error::DrawError;

/// Draws by running the matching engine over randomly shuffled orderings.
///
/// The roster is checked first and an infeasible roster is rejected before
/// any search runs. Every attempt but the last is bounded by the configured
/// step limit; the last runs to completion, so a feasible roster always
/// produces a selection.
#[derive(Debug, Clone, Default)]
pub struct RandomDrawService {
    settings: DrawSettings,
}

impl RandomDrawService {
    pub fn new(settings: DrawSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DrawSettings {
        &self.settings
    }

    fn rng(&self) -> fastrand::Rng {
        match self.settings.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

/// Rejects rosters that can never be drawn, whatever the exclusions.
pub fn validate_roster(requirements: &DrawRequirements) -> Result<(), DrawError> {
    let participants = requirements.participants();

    if participants.len() < 2 {
        return Err(DrawError::InvalidRoster {
            reason: format!(
                "at least two participants are needed, found {}",
                participants.len()
            ),
        });
    }
    if !participants.iter().any(Participant::is_giver) {
        return Err(DrawError::InvalidRoster {
            reason: "nobody is able to give".to_string(),
        });
    }
    if !participants.iter().any(Participant::is_receiver) {
        return Err(DrawError::InvalidRoster {
            reason: "nobody is able to receive".to_string(),
        });
    }

    Ok(())
}

impl DrawService for RandomDrawService {
    fn draw(&self, requirements: &DrawRequirements) -> Result<DrawSelection, DrawError> {
        validate_roster(requirements)?;
        check_feasible(requirements)?;

        let mut rng = self.rng();
        let mut roster: Vec<Participant> = requirements.participants().to_vec();
        let mut givers: Vec<Participant> = requirements.givers().cloned().collect();
        let attempts = self.settings.max_attempts.max(1);

        tracing::info!(
            participants = roster.len(),
            givers = givers.len(),
            exclusions = requirements.forbidden_pairs().len(),
            "Starting draw"
        );

        for attempt in 1..=attempts {
            rng.shuffle(&mut roster);
            rng.shuffle(&mut givers);

            let engine = match self.settings.step_limit {
                Some(limit) if attempt < attempts => MatchingEngine::with_step_limit(limit),
                _ => MatchingEngine::new(),
            };
            let (outcome, stats) =
                engine.search(&roster, &givers, requirements.forbidden_pairs());

            tracing::debug!(
                attempt,
                extensions = stats.extensions,
                backtracks = stats.backtracks,
                "Search attempt finished"
            );

            match outcome {
                SearchOutcome::Found(extender) => {
                    tracing::info!(attempt, assignments = extender.len(), "Draw completed");
                    return Ok(DrawSelection::new(extender.to_assignments()));
                }
                SearchOutcome::Abandoned => {
                    tracing::warn!(attempt, "Search hit its step limit, retrying with a new ordering");
                }
                SearchOutcome::Exhausted => break,
            }
        }

        Err(DrawError::Infeasible {
            reason: "no assignment satisfies every exclusion".to_string(),
        })
    }
}
