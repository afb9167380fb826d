/// Application state management.
///
/// Mirrors the sorting form: one input field and three output panels
/// (classification, metadata, report). [`AppState::submit`] runs the core
/// pipeline synchronously and updates the panels from its outcome.
use foldersort_core::pipeline::ClassificationOutcome;
use foldersort_core::{sort_folder, SortConfig, SortOutcome};
use serde::Serialize;
use tracing::{info, warn};

/// The current phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppPhase {
    /// Nothing submitted yet.
    Idle,
    /// The last submission produced results (the report may still have failed).
    Results,
    /// The last submission was rejected or the folder could not be read.
    Failed,
}

/// All form state.
pub struct AppState {
    pub config: SortConfig,
    /// Folder path as typed by the user.
    pub input: String,
    pub phase: AppPhase,

    // ── Panels ─────────────────────────────────────────
    pub classification: String,
    pub metadata: String,
    pub report: String,

    /// Technical detail of the last failure, for logs and JSON output.
    pub last_error: Option<String>,
    /// Outcome of the last successful submission.
    pub outcome: Option<SortOutcome>,
}

impl AppState {
    pub fn new(config: SortConfig) -> Self {
        Self {
            config,
            input: String::new(),
            phase: AppPhase::Idle,
            classification: String::new(),
            metadata: String::new(),
            report: String::new(),
            last_error: None,
            outcome: None,
        }
    }

    /// Run the pipeline on the current input and refresh the panels.
    ///
    /// Input and scan errors replace the classification panel with a fixed
    /// message and leave the other panels as they were.
    pub fn submit(&mut self) {
        match sort_folder(&self.input, &self.config) {
            Ok(outcome) => {
                self.classification = outcome.classification_panel().to_owned();
                self.metadata = outcome.metadata_panel().to_owned();
                self.report = outcome.report_panel().to_owned();
                self.last_error = report_error(&outcome);
                self.phase = AppPhase::Results;
                let folder = outcome.folder.display().to_string();
                self.outcome = Some(outcome);
                info!(
                    "Panels updated for {folder} ({} files classified)",
                    self.classified_count()
                );
            }
            Err(err) => {
                warn!("{err}");
                self.classification = err.user_message().to_owned();
                self.last_error = Some(err.to_string());
                self.phase = AppPhase::Failed;
                self.outcome = None;
            }
        }
    }

    /// Number of files listed in the classification panel.
    pub fn classified_count(&self) -> usize {
        match self.outcome.as_ref().map(|o| &o.classification) {
            Some(ClassificationOutcome::Grouped { grouping, .. }) => grouping.file_count(),
            _ => 0,
        }
    }
}

fn report_error(outcome: &SortOutcome) -> Option<String> {
    match &outcome.report {
        Ok(report) => report.write_error.as_ref().map(|e| e.to_string()),
        Err(err) => Some(err.to_string()),
    }
}
