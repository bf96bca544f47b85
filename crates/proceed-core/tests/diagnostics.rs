//! Clipboard text produced by the copy button.

use proceed_core::{AppIdentity, Question, diagnostic_report};

#[test]
fn test_diagnostic_report_layout() {
    let app = AppIdentity {
        name: "calibre".to_string(),
        version: "2.85.1".to_string(),
    };
    let question = Question::new((), "Send to device", "Some books could not be sent.")
        .detail("Traceback (most recent call last):\n  device busy");

    let report = diagnostic_report(&app, question.presentation());
    insta::assert_snapshot!(report, @r"
    calibre, version 2.85.1
    Send to device: Some books could not be sent.

    Traceback (most recent call last):
      device busy
    ");
}
