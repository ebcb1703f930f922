use crate::app::output::{render, OutputFormat};
use crate::core::draw::validate_roster;
use crate::core::feasibility::check_feasible;
use crate::core::RandomDrawService;
use crate::domain::{DrawSelection, DrawService, SessionStore, SettingsProvider};
use crate::session::{SessionStateTranslator, TrimmingTranslator};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::PathBuf;

#[derive(Debug)]
pub enum RunReport {
    Drawn {
        draw_name: String,
        selection: DrawSelection,
        rendered: Vec<u8>,
        /// Where the rendered result was written; `None` leaves printing to the caller.
        written_to: Option<PathBuf>,
    },
    Checked {
        draw_name: String,
        givers: usize,
        receivers: usize,
    },
}

/// Loads a session, draws it and renders the result.
pub struct DrawRunner<S: SessionStore, C: SettingsProvider> {
    store: S,
    config: C,
    format: OutputFormat,
    dry_run: bool,
}

impl<S: SessionStore, C: SettingsProvider> DrawRunner<S, C> {
    pub fn new(store: S, config: C) -> Self {
        Self {
            store,
            config,
            format: OutputFormat::default(),
            dry_run: false,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self) -> Result<RunReport> {
        let session_path = self.config.session_path();
        tracing::info!("Loading session from {}", session_path.display());
        let state = self.store.load(session_path)?;

        let settings = self.config.draw_settings(state.settings.as_ref());
        settings.validate()?;

        let requirements = TrimmingTranslator.to_requirements(&state)?;
        let draw_name = state.display_name().to_string();

        if self.dry_run {
            validate_roster(&requirements)?;
            check_feasible(&requirements)?;
            let report = RunReport::Checked {
                draw_name,
                givers: requirements.givers().count(),
                receivers: requirements.receivers().count(),
            };
            tracing::info!("Dry run passed: {:?}", report);
            return Ok(report);
        }

        let selection = RandomDrawService::new(settings).draw(&requirements)?;
        let rendered = render(&selection, &draw_name, self.format, chrono::Utc::now())?;

        let written_to = match self.config.output_path() {
            Some(path) => {
                self.store.write_result(path, &rendered)?;
                tracing::info!("Draw saved to {}", path.display());
                Some(path.to_path_buf())
            }
            None => None,
        };

        Ok(RunReport::Drawn {
            draw_name,
            selection,
            rendered,
            written_to,
        })
    }
}
