//! Boundary between the dispatcher and the popup widget.

use crate::question::Presentation;

/// The visible popup.
///
/// Implemented by the GUI layer. The dispatcher calls these on the UI
/// thread only; the renderer reports clicks back through
/// [`Dispatcher::decide`](crate::Dispatcher::decide) and never touches the
/// queue itself.
pub trait Renderer {
    /// Paint a question, resetting every per-question widget state
    /// (checkbox, details pane, copy button label).
    fn render(&mut self, presentation: &Presentation);

    /// Hide the popup.
    fn hide(&mut self);

    /// Bring an already visible popup to the front.
    fn raise(&mut self) {}

    /// `None` when no checkbox is shown, otherwise its current state.
    fn checkbox_state(&self) -> Option<bool>;

    /// Open a log viewer window.
    fn show_log_viewer(&mut self, title: &str, text: &str);

    /// Put diagnostic text on the clipboard.
    fn copy_to_clipboard(&mut self, text: String);
}
