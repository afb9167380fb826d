/// Panel rendering — prints the form's three panels to a terminal, or the
/// same results as JSON.
use crate::state::{AppPhase, AppState};
use foldersort_core::model::{Grouping, ReportCounts};
use foldersort_core::pipeline::ClassificationOutcome;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

const RULE: &str = "────────────────────────────────────────";

/// Write each non-empty panel under its title.
pub fn write_panels<W: Write>(out: &mut W, state: &AppState) -> std::io::Result<()> {
    write_panel(out, "Classification", &state.classification)?;
    write_panel(out, "Metadata", &state.metadata)?;
    write_panel(out, "Report", &state.report)?;
    Ok(())
}

fn write_panel<W: Write>(out: &mut W, title: &str, body: &str) -> std::io::Result<()> {
    if body.is_empty() {
        return Ok(());
    }
    writeln!(out, "{title}")?;
    writeln!(out, "{RULE}")?;
    write!(out, "{body}")?;
    if !body.ends_with('\n') {
        writeln!(out)?;
    }
    writeln!(out)
}

/// Machine-readable view of the form after a submission.
#[derive(Serialize)]
struct JsonView<'a> {
    phase: AppPhase,
    folder: Option<&'a Path>,
    error: Option<&'a str>,
    groups: Option<&'a Grouping>,
    counts: Option<ReportCounts>,
    panels: JsonPanels<'a>,
}

#[derive(Serialize)]
struct JsonPanels<'a> {
    classification: &'a str,
    metadata: &'a str,
    report: &'a str,
}

pub fn write_json<W: Write>(out: &mut W, state: &AppState) -> anyhow::Result<()> {
    let outcome = state.outcome.as_ref();
    let groups = outcome.and_then(|o| match &o.classification {
        ClassificationOutcome::Grouped { grouping, .. } => Some(grouping),
        ClassificationOutcome::Empty => None,
    });
    let counts = outcome.and_then(|o| o.report.as_ref().ok()).map(|r| r.counts);

    let view = JsonView {
        phase: state.phase,
        folder: outcome.map(|o| o.folder.as_path()),
        error: state.last_error.as_deref(),
        groups,
        counts,
        panels: JsonPanels {
            classification: &state.classification,
            metadata: &state.metadata,
            report: &state.report,
        },
    };
    serde_json::to_writer_pretty(&mut *out, &view)?;
    writeln!(out)?;
    Ok(())
}
