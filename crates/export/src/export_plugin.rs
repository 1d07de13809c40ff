use std::path::PathBuf;

use bevy::prelude::*;
use chemistry::{ChemistrySessions, ChemistrySet, SessionId};

use crate::artifact::ChemistryArtifact;
use crate::export_error::ExportError;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Where native builds write `chemistry.cfg`.
#[derive(Resource, Debug, Clone)]
pub struct ExportSettings {
    pub directory: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportDestination {
    File(PathBuf),
    Browser,
}

/// Outcome of the most recent download request, shown by the UI.
#[derive(Debug)]
pub struct ExportOutcome {
    pub session: SessionId,
    pub result: Result<ExportDestination, ExportError>,
}

#[derive(Resource, Default, Debug)]
pub struct LastExport(pub Option<ExportOutcome>);

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// The user pressed "Download generated chemistry".
#[derive(Event, Debug, Clone, Copy)]
pub struct DownloadChemistryEvent {
    pub session: SessionId,
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct ExportPlugin;

impl Plugin for ExportPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DownloadChemistryEvent>()
            .init_resource::<ExportSettings>()
            .init_resource::<LastExport>()
            // Downloads see the output of submissions made earlier this frame.
            .add_systems(Update, process_downloads.after(ChemistrySet));
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

fn process_downloads(
    mut events: EventReader<DownloadChemistryEvent>,
    sessions: Res<ChemistrySessions>,
    settings: Res<ExportSettings>,
    mut last: ResMut<LastExport>,
) {
    for event in events.read() {
        let result = match sessions.get(event.session) {
            Some(session) => ChemistryArtifact::from_session(session)
                .and_then(|artifact| deliver(&artifact, &settings)),
            None => Err(ExportError::NoOutput),
        };

        match &result {
            Ok(ExportDestination::File(path)) => {
                info!("Exported chemistry for {} to {}", event.session, path.display());
            }
            Ok(ExportDestination::Browser) => {
                info!("Started browser download for {}", event.session);
            }
            Err(ExportError::NoOutput) => {
                warn!(
                    "Download requested for {} before any chemistry was generated",
                    event.session
                );
            }
            Err(e) => error!("Export for {} failed: {e}", event.session),
        }

        last.0 = Some(ExportOutcome {
            session: event.session,
            result,
        });
    }
}

/// Native: writes the artifact into the configured directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn deliver(
    artifact: &ChemistryArtifact,
    settings: &ExportSettings,
) -> Result<ExportDestination, ExportError> {
    let path = settings.directory.join(artifact.file_name);
    crate::atomic_write::atomic_write(&path, &artifact.bytes)?;
    Ok(ExportDestination::File(path))
}

/// WASM: hands the artifact to the browser.
#[cfg(target_arch = "wasm32")]
pub fn deliver(
    artifact: &ChemistryArtifact,
    _settings: &ExportSettings,
) -> Result<ExportDestination, ExportError> {
    crate::browser_download::trigger_download(artifact)?;
    Ok(ExportDestination::Browser)
}
