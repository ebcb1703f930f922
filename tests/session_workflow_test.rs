use anyhow::Result;
use santa_draw::domain::{SessionStore, SettingsProvider};
use santa_draw::session::{ParticipantState, SessionState};
use santa_draw::{
    DrawError, DrawRunner, DrawSettings, LocalSessionStore, OutputFormat, ParticipantRole,
    Person, RunReport, SantaError,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct TestSettings {
    session: PathBuf,
    output: Option<PathBuf>,
    seed: Option<u64>,
}

impl SettingsProvider for TestSettings {
    fn session_path(&self) -> &Path {
        &self.session
    }

    fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    fn draw_settings(&self, base: Option<&DrawSettings>) -> DrawSettings {
        let mut settings = base.cloned().unwrap_or_default();
        settings.seed = self.seed.or(settings.seed);
        settings
    }
}

fn family() -> SessionState {
    SessionState::new(
        "Family 2026",
        vec![
            ParticipantState::new("Ann", ParticipantRole::Both, ["Bob"]),
            ParticipantState::new("Bob", ParticipantRole::Both, ["Ann"]),
            ParticipantState::new("Cat", ParticipantRole::Both, Vec::<String>::new()),
            ParticipantState::new("Dan", ParticipantRole::Both, Vec::<String>::new()),
        ],
    )
}

#[test]
fn test_draw_from_toml_session_to_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let session = temp_dir.path().join("family.toml");
    let output = temp_dir.path().join("results/family.csv");

    std::fs::write(
        &session,
        r#"
draw_name = "Family 2026"

[settings]
max_attempts = 2

[[participants]]
name = "Ann"
role = "BOTH"
exclusions = ["Bob"]

[[participants]]
name = "Bob"
role = "BOTH"
exclusions = ["Ann"]

[[participants]]
name = "Cat"
role = "BOTH"

[[participants]]
name = "Dan"
role = "BOTH"
"#,
    )?;

    let settings = TestSettings {
        session,
        output: Some(output.clone()),
        seed: None,
    };
    let report = DrawRunner::new(LocalSessionStore::new(), settings)
        .with_format(OutputFormat::Csv)
        .run()?;

    let RunReport::Drawn {
        selection,
        written_to,
        ..
    } = report
    else {
        panic!("expected a drawn report");
    };

    assert_eq!(written_to.as_deref(), Some(output.as_path()));
    assert_eq!(selection.len(), 4);
    assert_ne!(selection.recipient_of(&Person::new("Ann")), Some(&Person::new("Bob")));
    assert_ne!(selection.recipient_of(&Person::new("Bob")), Some(&Person::new("Ann")));

    let csv = std::fs::read_to_string(&output)?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "giver,receiver");
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("Ann,"));

    Ok(())
}

#[test]
fn test_seeded_json_session_is_reproducible() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let session = temp_dir.path().join("family.json");
    LocalSessionStore::new().save(&session, &family())?;

    let run = || -> Result<RunReport> {
        let settings = TestSettings {
            session: session.clone(),
            output: None,
            seed: Some(99),
        };
        Ok(DrawRunner::new(LocalSessionStore::new(), settings).run()?)
    };

    let (RunReport::Drawn { rendered: first, .. }, RunReport::Drawn { rendered: second, .. }) =
        (run()?, run()?)
    else {
        panic!("expected drawn reports");
    };

    assert_eq!(first, second);
    assert!(String::from_utf8(first)?.starts_with("Family 2026\n"));

    Ok(())
}

#[test]
fn test_dry_run_reports_counts() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let session = temp_dir.path().join("family.json");
    LocalSessionStore::new().save(&session, &family())?;

    let settings = TestSettings {
        session,
        output: None,
        seed: None,
    };
    let report = DrawRunner::new(LocalSessionStore::new(), settings)
        .with_dry_run(true)
        .run()?;

    match report {
        RunReport::Checked {
            draw_name,
            givers,
            receivers,
        } => {
            assert_eq!(draw_name, "Family 2026");
            assert_eq!(givers, 4);
            assert_eq!(receivers, 4);
        }
        other => panic!("expected a dry-run report, got {:?}", other),
    }

    Ok(())
}

#[test]
fn test_infeasible_session_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let session = temp_dir.path().join("pair.json");
    let state = SessionState::new(
        "Pair",
        vec![
            ParticipantState::new("Giver", ParticipantRole::Giver, ["Receiver"]),
            ParticipantState::new("Receiver", ParticipantRole::Receiver, Vec::<String>::new()),
        ],
    );
    LocalSessionStore::new().save(&session, &state)?;

    let settings = TestSettings {
        session,
        output: None,
        seed: None,
    };
    let err = DrawRunner::new(LocalSessionStore::new(), settings)
        .run()
        .unwrap_err();

    assert!(matches!(err, SantaError::Draw(DrawError::Infeasible { .. })));
    assert_eq!(err.exit_code(), 3);

    Ok(())
}

#[test]
fn test_invalid_session_settings_are_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let session = temp_dir.path().join("family.json");
    let state = family().with_settings(DrawSettings {
        max_attempts: 0,
        ..DrawSettings::default()
    });
    LocalSessionStore::new().save(&session, &state)?;

    let settings = TestSettings {
        session,
        output: None,
        seed: None,
    };
    let err = DrawRunner::new(LocalSessionStore::new(), settings)
        .run()
        .unwrap_err();

    assert!(matches!(err, SantaError::InvalidConfigValueError { .. }));

    Ok(())
}
