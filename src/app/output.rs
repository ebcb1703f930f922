use crate::domain::{DrawSelection, GiverAssignment};
use crate::utils::error::{Result, SantaError};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Serialize)]
struct DrawReport<'a> {
    draw_name: &'a str,
    drawn_at: String,
    assignments: Vec<&'a GiverAssignment>,
}

/// Renders a selection for people to read or for other tools to consume.
///
/// Assignments are listed by giver name whatever order the search found them in.
pub fn render(
    selection: &DrawSelection,
    draw_name: &str,
    format: OutputFormat,
    drawn_at: DateTime<Utc>,
) -> Result<Vec<u8>> {
    let mut assignments: Vec<&GiverAssignment> = selection.givers().iter().collect();
    assignments.sort_by(|a, b| a.from.cmp(&b.from));

    match format {
        OutputFormat::Text => Ok(render_text(draw_name, &assignments).into_bytes()),
        OutputFormat::Json => {
            let report = DrawReport {
                draw_name,
                drawn_at: drawn_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                assignments,
            };
            let mut bytes = serde_json::to_vec_pretty(&report)?;
            bytes.push(b'\n');
            Ok(bytes)
        }
        OutputFormat::Csv => render_csv(&assignments),
    }
}

fn render_text(draw_name: &str, assignments: &[&GiverAssignment]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", draw_name);
    let _ = writeln!(out, "{}", "=".repeat(draw_name.chars().count()));
    for assignment in assignments {
        let _ = writeln!(out, "{}", assignment);
    }
    out
}

fn render_csv(assignments: &[&GiverAssignment]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["giver", "receiver"])?;
    for assignment in assignments {
        writer.write_record([assignment.from.name(), assignment.to.name()])?;
    }
    writer
        .into_inner()
        .map_err(|err| SantaError::IoError(err.into_error()))
}
