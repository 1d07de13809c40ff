use chemistry::{FormSession, SessionOutput};

use crate::export_error::ExportError;

/// Name of the downloaded file. The simulator reads it through `--chempath`.
pub const CHEMISTRY_FILE_NAME: &str = "chemistry.cfg";

/// The bytes handed to the user on download: exactly the generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChemistryArtifact {
    pub file_name: &'static str,
    pub bytes: Vec<u8>,
}

impl ChemistryArtifact {
    pub fn from_output(output: &SessionOutput) -> Self {
        Self {
            file_name: CHEMISTRY_FILE_NAME,
            bytes: output.generated_text.as_bytes().to_vec(),
        }
    }

    /// Fails with [`ExportError::NoOutput`] until the session has output.
    pub fn from_session(session: &FormSession) -> Result<Self, ExportError> {
        session
            .output()
            .map(Self::from_output)
            .ok_or(ExportError::NoOutput)
    }
}
