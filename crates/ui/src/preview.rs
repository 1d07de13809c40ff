//! What the preview region and download control show for a session.
//!
//! The preview is derived from the stored [`SessionOutput`] on every frame,
//! so a new submission replaces what was shown before instead of adding to
//! it.
//!
//! [`SessionOutput`]: chemistry::SessionOutput

use chemistry::FormSession;

pub const PREVIEW_LABEL: &str = "Generated chemistry";
pub const SUBMIT_LABEL: &str = "Generate chemistry";
pub const DOWNLOAD_LABEL: &str = "Download generated chemistry";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChemistryPreview<'a> {
    body: &'a str,
    download_visible: bool,
}

impl<'a> ChemistryPreview<'a> {
    /// Empty code block and no download control until there is output.
    pub fn from_session(session: Option<&'a FormSession>) -> Self {
        match session.and_then(FormSession::output) {
            Some(output) => Self {
                body: &output.generated_text,
                download_visible: true,
            },
            None => Self {
                body: "",
                download_visible: false,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        PREVIEW_LABEL
    }

    pub fn body(&self) -> &'a str {
        self.body
    }

    pub fn download_visible(&self) -> bool {
        self.download_visible
    }
}
