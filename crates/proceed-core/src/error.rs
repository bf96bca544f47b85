//! Popup error types.
//!
//! Only log viewing, question submission after shutdown and settings
//! persistence can fail. Decisions without a head and outcomes without a
//! callback are normal no-ops and never produce an error.

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Popup operation error.
#[derive(Debug, Error)]
pub enum PopupError {
    /// The log file could not be read.
    #[error("Failed to read log file: {path}")]
    LogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log file is not valid UTF-8.
    #[error("Log file is not valid UTF-8: {path}")]
    LogEncoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// The dispatcher (and the window owning it) has been dropped.
    #[error("The question dispatcher has shut down")]
    DispatcherClosed,

    /// Settings file I/O error.
    #[error("Failed to {operation} settings file: {path}")]
    SettingsIo {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file exists but is not valid TOML for the settings schema.
    #[error("Failed to parse settings file: {path}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Settings could not be serialized.
    #[error("Failed to serialize settings")]
    SettingsSerialize {
        #[source]
        source: toml::ser::Error,
    },
}

impl PopupError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::LogRead { path, source } => {
                format!("Could not read the log at {}: {}", path.display(), source)
            }
            Self::LogEncoding { path, .. } => {
                format!(
                    "The log at {} could not be displayed because it is not UTF-8 text.",
                    path.display()
                )
            }
            Self::DispatcherClosed => {
                "The window that shows questions has been closed.".to_string()
            }
            Self::SettingsIo {
                operation, path, ..
            } => {
                format!("Could not {} the settings at {}", operation, path.display())
            }
            Self::SettingsParse { path, .. } => {
                format!("The settings at {} are not valid.", path.display())
            }
            Self::SettingsSerialize { .. } => {
                "An error occurred while saving the settings.".to_string()
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::LogRead { .. } => {
                Some("The log may have been moved or deleted by the task that wrote it.")
            }
            Self::LogEncoding { .. } => Some("Open the log file with an external text editor."),
            Self::DispatcherClosed => None,
            Self::SettingsIo { operation, .. } => {
                if *operation == "read" {
                    Some("Check that you have permission to read the settings file.")
                } else {
                    Some("Check permissions for the application config directory.")
                }
            }
            Self::SettingsParse { .. } => {
                Some("Fix or delete the settings file to restore the defaults.")
            }
            Self::SettingsSerialize { .. } => None,
        }
    }

    /// Check if this error came from resolving a question's log.
    pub fn is_log_error(&self) -> bool {
        matches!(self, Self::LogRead { .. } | Self::LogEncoding { .. })
    }
}

/// Result type alias for popup operations.
pub type Result<T> = std::result::Result<T, PopupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_read_message_names_path() {
        let err = PopupError::LogRead {
            path: PathBuf::from("/tmp/missing.log"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/tmp/missing.log"));
        assert!(err.user_message().contains("/tmp/missing.log"));
        assert!(err.is_log_error());
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_dispatcher_closed_is_not_log_error() {
        let err = PopupError::DispatcherClosed;
        assert!(!err.is_log_error());
        assert!(err.suggestion().is_none());
    }
}
