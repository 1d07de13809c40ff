mod artifact;
#[cfg(not(target_arch = "wasm32"))]
mod atomic_write;
#[cfg(target_arch = "wasm32")]
mod browser_download;
mod export_error;
mod export_plugin;

pub use artifact::{ChemistryArtifact, CHEMISTRY_FILE_NAME};
#[cfg(not(target_arch = "wasm32"))]
pub use atomic_write::atomic_write;
pub use export_error::ExportError;
pub use export_plugin::{
    deliver, DownloadChemistryEvent, ExportDestination, ExportOutcome, ExportPlugin,
    ExportSettings, LastExport,
};
