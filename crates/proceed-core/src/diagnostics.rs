//! Text placed on the clipboard by the "Copy to clipboard" button.

use crate::question::Presentation;
use crate::settings::AppIdentity;

/// Format a question for pasting into a bug report.
///
/// ```text
/// {app}, version {version}
/// {title}: {message}
///
/// {detail}
/// ```
pub fn diagnostic_report(app: &AppIdentity, presentation: &Presentation) -> String {
    format!(
        "{}, version {}\n{}: {}\n\n{}",
        app.name,
        app.version,
        presentation.title,
        presentation.message,
        presentation.detail_message
    )
}
