//! Question record and its presentation options.

use std::fmt;
use std::path::PathBuf;

/// Callback run on the UI thread with the payload and the checkbox state.
///
/// The second argument is `None` when the question had no checkbox and
/// `Some(checked)` otherwise.
pub type Callback<P> = Box<dyn FnOnce(P, Option<bool>) + Send + 'static>;

/// The user's answer to the question currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Yes / OK.
    Proceed,
    /// No.
    Cancel,
    /// The extra action button.
    Action,
}

impl Decision {
    /// Get a label for logging and status display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Proceed => "proceed",
            Self::Cancel => "cancel",
            Self::Action => "action",
        }
    }
}

/// Where the log attached to a question comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    /// Log text held in memory.
    Inline(String),
    /// Path to a UTF-8 encoded log file, read when the user asks to see it.
    File(PathBuf),
}

impl LogSource {
    /// An empty inline log or an empty path counts as no log.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Inline(text) => text.is_empty(),
            Self::File(path) => path.as_os_str().is_empty(),
        }
    }
}

/// Checkbox shown below the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxOption {
    /// Checkbox label.
    pub message: String,
    /// Initial state.
    pub checked: bool,
}

/// Extra button that fires the action callback instead of the proceed one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionButton {
    /// Button text.
    pub label: Option<String>,
    /// Icon glyph or name drawn before the label.
    pub icon: Option<String>,
    /// Make this the default button instead of Yes / OK.
    pub focus: bool,
}

impl ActionButton {
    /// Create an action button with a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            icon: None,
            focus: false,
        }
    }

    /// Set the icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Make the action the default button.
    #[must_use]
    pub fn focused(mut self) -> Self {
        self.focus = true;
        self
    }
}

/// Everything the popup needs to paint a question.
///
/// Payload and callbacks are deliberately absent: the renderer only reads
/// this and reports a [`Decision`] back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presentation {
    pub title: String,
    pub message: String,
    /// Text for the collapsible details pane (empty hides the toggle).
    pub detail_message: String,
    pub log: Option<LogSource>,
    pub log_viewer_title: String,
    pub show_copy_button: bool,
    pub checkbox: Option<CheckboxOption>,
    /// Present exactly when an action callback is registered.
    pub action: Option<ActionButton>,
    pub show_details_initially: bool,
    /// Show a single OK button instead of Yes / No.
    pub show_ok: bool,
}

/// One pending question.
///
/// Built on any thread, then handed to the dispatcher. Once queued it is
/// never modified; the decision picks which callback consumes the payload.
pub struct Question<P> {
    payload: P,
    callback: Option<Callback<P>>,
    cancel_callback: Option<Callback<P>>,
    action_callback: Option<Callback<P>>,
    presentation: Presentation,
}

impl<P> Question<P> {
    /// Create a question with a title and message and no callbacks.
    pub fn new(payload: P, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            payload,
            callback: None,
            cancel_callback: None,
            action_callback: None,
            presentation: Presentation {
                title: title.into(),
                message: message.into(),
                log_viewer_title: "Log".to_string(),
                ..Presentation::default()
            },
        }
    }

    /// Callback for Yes / OK.
    #[must_use]
    pub fn on_proceed<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(P, Option<bool>) + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Callback for No.
    #[must_use]
    pub fn on_cancel<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(P, Option<bool>) + Send + 'static,
    {
        self.cancel_callback = Some(Box::new(callback));
        self
    }

    /// Add the extra action button and the callback it fires.
    #[must_use]
    pub fn with_action<F>(mut self, button: ActionButton, callback: F) -> Self
    where
        F: FnOnce(P, Option<bool>) + Send + 'static,
    {
        self.action_callback = Some(Box::new(callback));
        self.presentation.action = Some(button);
        self
    }

    /// Detailed message shown in the collapsible pane.
    #[must_use]
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.presentation.detail_message = detail.into();
        self
    }

    /// Attach an in-memory log.
    #[must_use]
    pub fn log_text(mut self, log: impl Into<String>) -> Self {
        self.presentation.log = Some(LogSource::Inline(log.into()));
        self
    }

    /// Attach a log stored in a UTF-8 file.
    #[must_use]
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.presentation.log = Some(LogSource::File(path.into()));
        self
    }

    /// Title of the log viewer window.
    #[must_use]
    pub fn log_viewer_title(mut self, title: impl Into<String>) -> Self {
        self.presentation.log_viewer_title = title.into();
        self
    }

    /// Show the "Copy to clipboard" button.
    #[must_use]
    pub fn copy_button(mut self, show: bool) -> Self {
        self.presentation.show_copy_button = show;
        self
    }

    /// Show a checkbox; its state is passed to whichever callback fires.
    #[must_use]
    pub fn checkbox(mut self, message: impl Into<String>, checked: bool) -> Self {
        self.presentation.checkbox = Some(CheckboxOption {
            message: message.into(),
            checked,
        });
        self
    }

    /// Expand the details pane when the question is first shown.
    #[must_use]
    pub fn show_details_initially(mut self, show: bool) -> Self {
        self.presentation.show_details_initially = show;
        self
    }

    /// Show OK instead of Yes / No.
    #[must_use]
    pub fn ok_only(mut self, ok_only: bool) -> Self {
        self.presentation.show_ok = ok_only;
        self
    }

    /// Presentation options for the renderer.
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// The payload passed to the chosen callback.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Check if a callback is registered for a decision.
    pub fn has_callback(&self, decision: Decision) -> bool {
        match decision {
            Decision::Proceed => self.callback.is_some(),
            Decision::Cancel => self.cancel_callback.is_some(),
            Decision::Action => self.action_callback.is_some(),
        }
    }

    /// Consume the question, keeping the payload and the callback the
    /// decision selects. All other callbacks are dropped uncalled.
    pub(crate) fn resolve(self, decision: Decision) -> (P, Option<Callback<P>>) {
        let callback = match decision {
            Decision::Proceed => self.callback,
            Decision::Cancel => self.cancel_callback,
            Decision::Action => self.action_callback,
        };
        (self.payload, callback)
    }
}

impl<P: fmt::Debug> fmt::Debug for Question<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("payload", &self.payload)
            .field("callback", &self.callback.is_some())
            .field("cancel_callback", &self.cancel_callback.is_some())
            .field("action_callback", &self.action_callback.is_some())
            .field("presentation", &self.presentation)
            .finish()
    }
}
