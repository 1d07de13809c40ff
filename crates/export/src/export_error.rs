// ---------------------------------------------------------------------------
// ExportError: failures while delivering chemistry.cfg
// ---------------------------------------------------------------------------

use std::fmt;

#[derive(Debug)]
pub enum ExportError {
    /// Writing the file failed (permission denied, disk full, etc.)
    Io(std::io::Error),
    /// A download was requested before anything was generated.
    NoOutput,
    /// The browser refused to start the download.
    Browser(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "I/O error: {e}"),
            ExportError::NoOutput => write!(f, "Nothing generated yet; submit the form first"),
            ExportError::Browser(msg) => write!(f, "Browser download failed: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_error_display_io() {
        let err = ExportError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only directory",
        ));
        let msg = format!("{err}");
        assert!(msg.contains("I/O error"), "got: {msg}");
        assert!(msg.contains("read-only directory"), "got: {msg}");
    }

    #[test]
    fn test_export_error_display_no_output() {
        let msg = format!("{}", ExportError::NoOutput);
        assert!(msg.contains("Nothing generated"), "got: {msg}");
    }

    #[test]
    fn test_export_error_display_browser() {
        let msg = format!("{}", ExportError::Browser("blocked".to_string()));
        assert!(msg.contains("blocked"), "got: {msg}");
    }

    #[test]
    fn test_export_error_from_io_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: ExportError = io_err.into();
        assert!(matches!(err, ExportError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&ExportError::NoOutput).is_none());
    }
}
