/// foldersort CLI — terminal frontend.
///
/// This crate owns the form state and renders its panels. Business logic
/// lives in `foldersort-core`.
pub mod args;
pub mod panels;
pub mod state;

pub use args::Cli;
pub use state::{AppPhase, AppState};

use std::io::Write;

/// Submit the folder from `cli` and print the panels to `out`.
///
/// Returns the final phase; [`AppPhase::Failed`] means the classification
/// stage could not run. Report failures are shown in the report panel but
/// leave the phase at [`AppPhase::Results`].
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<AppPhase> {
    let mut state = AppState::new(cli.sort_config());
    state.input = cli.folder.clone().unwrap_or_default();
    state.submit();

    if cli.json {
        panels::write_json(out, &state)?;
    } else {
        panels::write_panels(out, &state)?;
    }
    out.flush()?;

    Ok(state.phase)
}
