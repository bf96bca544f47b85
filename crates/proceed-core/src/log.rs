//! Log resolution for the "View log" button.

use std::fs;

use crate::error::{PopupError, Result};
use crate::question::LogSource;

/// Resolve a log to displayable text.
///
/// Inline logs are returned as-is. File logs are read fully and decoded as
/// UTF-8; invalid bytes are an error rather than being replaced.
pub fn resolve_log(source: &LogSource) -> Result<String> {
    match source {
        LogSource::Inline(text) => Ok(text.clone()),
        LogSource::File(path) => {
            let bytes = fs::read(path).map_err(|source| PopupError::LogRead {
                path: path.clone(),
                source,
            })?;
            String::from_utf8(bytes).map_err(|source| PopupError::LogEncoding {
                path: path.clone(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_inline_log() {
        let text = resolve_log(&LogSource::Inline("line 1\nline 2".into())).unwrap();
        assert_eq!(text, "line 1\nline 2");
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/nonexistent/proceed-core/missing.log");
        let err = resolve_log(&LogSource::File(path.clone())).unwrap_err();
        match err {
            PopupError::LogRead { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.log");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let err = resolve_log(&LogSource::File(path)).unwrap_err();
        assert!(matches!(err, PopupError::LogEncoding { .. }));
    }
}
