//! egui implementation of the popup.
//!
//! [`EguiPopup`] keeps what the dispatcher last told it to render and paints
//! it every frame as a borderless window anchored to the bottom-right corner
//! of the host window. Clicks come back from [`EguiPopup::show`] as
//! [`PopupEvent`]s for the host to forward to the dispatcher.
//!
//! The popup never takes keyboard focus. Enter presses the default button
//! only while no widget anywhere holds focus, so typing in the host window,
//! a log viewer or the error window never answers a question.

use egui::{Color32, Context, CornerRadius, Key, Modifiers, RichText, Stroke, Ui, WidgetText};
use proceed_core::{
    ButtonKind, Decision, LayoutSettings, PopupError, PopupView, Presentation, Renderer,
};

use crate::log_viewer::LogViewer;

const POPUP_ID: &str = "proceed_popup";
const ERROR_ID: &str = "proceed_popup_error";
const DETAILS_HEIGHT: f32 = 160.0;
const ICON_SIZE: f32 = 32.0;

/// What the user did in the popup this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEvent {
    /// Yes / OK, No or the action button.
    Decide(Decision),
    ViewLog,
    Copy,
}

struct Shown {
    presentation: Presentation,
    view: PopupView,
}

struct ErrorDialog {
    title: &'static str,
    message: String,
    suggestion: Option<&'static str>,
}

/// The popup window plus the log viewers opened from it.
pub struct EguiPopup {
    layout: LayoutSettings,
    current: Option<Shown>,
    raise_requested: bool,
    pending_clipboard: Option<String>,
    log_viewers: Vec<LogViewer>,
    next_viewer: u64,
    error: Option<ErrorDialog>,
    /// A widget held keyboard focus at the end of the previous frame.
    focus_held: bool,
}

impl EguiPopup {
    pub fn new(layout: LayoutSettings) -> Self {
        Self {
            layout,
            current: None,
            raise_requested: false,
            pending_clipboard: None,
            log_viewers: Vec::new(),
            next_viewer: 0,
            error: None,
            focus_held: false,
        }
    }

    fn view(&self) -> Option<&PopupView> {
        self.current.as_ref().map(|shown| &shown.view)
    }

    fn view_mut(&mut self) -> Option<&mut PopupView> {
        self.current.as_mut().map(|shown| &mut shown.view)
    }

    /// Show an error window, e.g. for a log file that failed to load.
    pub fn report_error(&mut self, error: &PopupError) {
        let title = if error.is_log_error() {
            "Could not open log"
        } else {
            "Error"
        };
        self.error = Some(ErrorDialog {
            title,
            message: error.user_message(),
            suggestion: error.suggestion(),
        });
    }

    /// Paint the popup and its windows.
    ///
    /// `bottom_inset` is the height of any bottom panel (status bar) the
    /// popup must stay above.
    pub fn show(&mut self, ctx: &Context, bottom_inset: f32) -> Option<PopupEvent> {
        // Focus is checked at both frame ends: a single-line host TextEdit
        // drops focus while handling the same Enter press.
        let enter_allowed = !self.focus_held && ctx.memory(|m| m.focused().is_none());

        if let Some(text) = self.pending_clipboard.take() {
            ctx.copy_text(text);
        }
        self.log_viewers.retain_mut(|viewer| viewer.show(ctx));
        self.show_error(ctx);
        let event = self.show_question(ctx, bottom_inset, enter_allowed);

        self.focus_held = ctx.memory(|m| m.focused().is_some());
        event
    }

    fn show_question(
        &mut self,
        ctx: &Context,
        bottom_inset: f32,
        enter_allowed: bool,
    ) -> Option<PopupEvent> {
        let layout = &self.layout;
        let shown = self.current.as_mut()?;

        let style = ctx.style();
        let frame = egui::Frame::window(&style)
            .fill(style.visuals.window_fill.gamma_multiply(layout.background_opacity))
            .corner_radius(CornerRadius::same(layout.corner_radius))
            .stroke(Stroke::new(layout.border_width, style.visuals.text_color()));

        let response = egui::Window::new(POPUP_ID)
            .id(egui::Id::new(POPUP_ID))
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .order(egui::Order::Foreground)
            .frame(frame)
            .max_width(layout.max_width)
            .max_height(layout.max_height)
            .anchor(
                egui::Align2::RIGHT_BOTTOM,
                egui::vec2(-layout.margin, -(layout.margin + bottom_inset)),
            )
            .show(ctx, |ui| {
                ui.set_width(layout.popup_width(content_width(ui, &shown.presentation)));
                paint_question(ui, shown, enter_allowed)
            });

        if std::mem::take(&mut self.raise_requested) {
            ctx.move_to_top(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new(POPUP_ID),
            ));
        }

        response.and_then(|response| response.inner).flatten()
    }

    fn show_error(&mut self, ctx: &Context) {
        let Some(dialog) = self.error.as_ref() else {
            return;
        };

        let mut open = true;
        let mut dismissed = false;
        egui::Window::new(dialog.title)
            .id(egui::Id::new(ERROR_ID))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(RichText::new(&dialog.message).color(Color32::from_rgb(220, 80, 80)));
                if let Some(suggestion) = dialog.suggestion {
                    ui.add_space(4.0);
                    ui.label(RichText::new(suggestion).weak());
                }
                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    dismissed = true;
                }
            });

        if !open || dismissed {
            self.error = None;
        }
    }
}

/// Unwrapped width of the icon, title and message row.
fn content_width(ui: &Ui, presentation: &Presentation) -> f32 {
    let measure = |text: WidgetText| {
        text.into_galley(
            ui,
            Some(egui::TextWrapMode::Extend),
            f32::INFINITY,
            egui::TextStyle::Body,
        )
        .size()
        .x
    };
    let title = measure(RichText::new(&presentation.title).strong().into());
    let message = measure(presentation.message.as_str().into());
    ICON_SIZE + ui.spacing().item_spacing.x + title.max(message)
}

/// Paint one question; returns the click, if any.
fn paint_question(ui: &mut Ui, shown: &mut Shown, enter_allowed: bool) -> Option<PopupEvent> {
    let Shown { presentation, view } = shown;

    ui.horizontal(|ui| {
        ui.label(RichText::new("?").size(ICON_SIZE).strong());
        ui.vertical(|ui| {
            ui.label(RichText::new(&presentation.title).strong());
            ui.label(presentation.message.as_str());
        });
    });

    if let Some(checkbox) = view.checkbox.as_mut() {
        ui.add_space(4.0);
        ui.checkbox(&mut checkbox.checked, checkbox.label.as_str());
    }

    if view.details_visible {
        ui.add_space(4.0);
        egui::ScrollArea::vertical()
            .max_height(DETAILS_HEIGHT)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut presentation.detail_message.as_str())
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            });
    }

    ui.add_space(8.0);
    let mut clicked = None;
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        for button in view.buttons().into_iter().rev() {
            let mut text = view.label(button);
            if let (ButtonKind::Action, Some((_, Some(icon)))) = (button, &view.action) {
                text = format!("{icon} {text}");
            }
            let mut widget = egui::Button::new(text);
            if button == view.default_button {
                widget = widget.fill(ui.visuals().selection.bg_fill);
            }
            if ui.add(widget).clicked() {
                clicked = Some(button);
            }
        }
    });

    if clicked.is_none()
        && enter_allowed
        && ui.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Enter))
    {
        clicked = Some(view.default_button);
    }

    match clicked? {
        ButtonKind::ToggleDetails => {
            view.toggle_details();
            None
        }
        ButtonKind::ViewLog => Some(PopupEvent::ViewLog),
        ButtonKind::Copy => Some(PopupEvent::Copy),
        other => other.decision().map(PopupEvent::Decide),
    }
}

impl Renderer for EguiPopup {
    fn render(&mut self, presentation: &Presentation) {
        self.current = Some(Shown {
            view: PopupView::for_question(presentation),
            presentation: presentation.clone(),
        });
    }

    fn hide(&mut self) {
        self.current = None;
        self.raise_requested = false;
    }

    fn raise(&mut self) {
        self.raise_requested = true;
    }

    fn checkbox_state(&self) -> Option<bool> {
        self.view().and_then(PopupView::checkbox_state)
    }

    fn show_log_viewer(&mut self, title: &str, text: &str) {
        self.next_viewer += 1;
        self.log_viewers
            .push(LogViewer::new(self.next_viewer, title, text));
    }

    fn copy_to_clipboard(&mut self, text: String) {
        self.pending_clipboard = Some(text);
        if let Some(view) = self.view_mut() {
            view.mark_copied();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proceed_core::{PopupSettings, Question};
    use std::path::PathBuf;

    fn popup() -> EguiPopup {
        EguiPopup::new(PopupSettings::default().layout)
    }

    fn enter() -> egui::Event {
        egui::Event::Key {
            key: Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    /// One frame of a host window with a text field and the popup on top.
    fn run_frame(
        ctx: &Context,
        popup: &mut EguiPopup,
        host_text: &mut String,
        focus_host: bool,
        events: Vec<egui::Event>,
    ) -> Option<PopupEvent> {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut event = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = ui.text_edit_singleline(host_text);
                if focus_host {
                    response.request_focus();
                }
            });
            event = popup.show(ctx, 0.0);
        });
        event
    }

    #[test]
    fn test_render_and_hide() {
        let mut popup = popup();
        let question = Question::new((), "Title", "Message");
        popup.render(question.presentation());
        assert!(popup.current.is_some());
        popup.hide();
        assert!(popup.current.is_none());
        assert_eq!(popup.checkbox_state(), None);
    }

    #[test]
    fn test_render_resets_checkbox() {
        let mut popup = popup();
        let question = Question::new((), "Title", "Message").checkbox("Remember", false);
        popup.render(question.presentation());
        popup.view_mut().unwrap().set_checked(true);
        assert_eq!(popup.checkbox_state(), Some(true));

        popup.render(question.presentation());
        assert_eq!(popup.checkbox_state(), Some(false));
    }

    #[test]
    fn test_copy_marks_button() {
        let mut popup = popup();
        let question = Question::new((), "Title", "Message").copy_button(true);
        popup.render(question.presentation());
        popup.copy_to_clipboard("report".to_string());

        let view = popup.view().unwrap();
        assert_eq!(view.label(ButtonKind::Copy), "Copied");
        assert_eq!(popup.pending_clipboard.as_deref(), Some("report"));
    }

    #[test]
    fn test_each_log_gets_a_viewer() {
        let mut popup = popup();
        popup.show_log_viewer("Log", "one");
        popup.show_log_viewer("Log", "two");
        assert_eq!(popup.log_viewers.len(), 2);
    }

    #[test]
    fn test_report_log_error() {
        let mut popup = popup();
        let error = PopupError::LogRead {
            path: PathBuf::from("/missing/job.log"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        popup.report_error(&error);

        let dialog = popup.error.as_ref().unwrap();
        assert_eq!(dialog.title, "Could not open log");
        assert!(dialog.message.contains("job.log"));
        assert!(dialog.suggestion.is_some());
    }

    #[test]
    fn test_report_other_error() {
        let mut popup = popup();
        popup.report_error(&PopupError::DispatcherClosed);
        assert_eq!(popup.error.as_ref().unwrap().title, "Error");
    }

    #[test]
    fn test_hide_clears_raise_request() {
        let mut popup = popup();
        let question = Question::new((), "Title", "Message");
        popup.render(question.presentation());
        popup.raise();
        popup.hide();
        assert!(!popup.raise_requested);
    }

    #[test]
    fn test_enter_answers_with_default_button() {
        let ctx = Context::default();
        let mut popup = popup();
        let mut host_text = String::new();
        popup.render(Question::new((), "Title", "Message").presentation());

        run_frame(&ctx, &mut popup, &mut host_text, false, Vec::new());
        let event = run_frame(&ctx, &mut popup, &mut host_text, false, vec![enter()]);
        assert_eq!(event, Some(PopupEvent::Decide(Decision::Proceed)));
    }

    #[test]
    fn test_enter_in_host_text_field_is_ignored() {
        let ctx = Context::default();
        let mut popup = popup();
        let mut host_text = String::new();
        popup.render(Question::new((), "Title", "Message").presentation());

        assert_eq!(run_frame(&ctx, &mut popup, &mut host_text, true, Vec::new()), None);
        assert_eq!(run_frame(&ctx, &mut popup, &mut host_text, false, vec![enter()]), None);
        assert!(popup.current.is_some());
    }

    #[test]
    fn test_longer_message_widens_popup_up_to_max() {
        let ctx = Context::default();
        let layout = PopupSettings::default().layout;
        let short = Question::new((), "Title", "Short");
        let long = Question::new((), "Title", "A much longer message ".repeat(20));

        let mut widths = (0.0, 0.0);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                widths = (
                    content_width(ui, short.presentation()),
                    content_width(ui, long.presentation()),
                );
            });
        });

        let (short_width, long_width) = widths;
        assert!(long_width > short_width);
        assert!(short_width > ICON_SIZE);
        assert_eq!(
            layout.popup_width(short_width),
            short_width + layout.extra_width
        );
        assert_eq!(layout.popup_width(long_width), layout.max_width);
    }
}
