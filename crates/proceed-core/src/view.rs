//! Renderer-agnostic layout of the popup for one question.
//!
//! Any toolkit can paint a [`PopupView`]: it says which buttons exist, what
//! they read, which one is the default and whether the details pane is open.
//! A fresh view is built for every question, so nothing carries over from
//! the previous one.

use crate::question::{Decision, Presentation};

const SHOW_DETAILS: &str = "Show details";
const HIDE_DETAILS: &str = "Hide details";
const COPY_TO_CLIPBOARD: &str = "Copy to clipboard";
const COPIED: &str = "Copied";

/// Buttons the popup can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Yes,
    No,
    Ok,
    Action,
    ViewLog,
    Copy,
    ToggleDetails,
}

impl ButtonKind {
    /// Label for the standard buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Ok => "OK",
            Self::Action => "",
            Self::ViewLog => "View log",
            Self::Copy => COPY_TO_CLIPBOARD,
            Self::ToggleDetails => SHOW_DETAILS,
        }
    }

    /// The decision a button commits, if any.
    pub fn decision(&self) -> Option<Decision> {
        match self {
            Self::Yes | Self::Ok => Some(Decision::Proceed),
            Self::No => Some(Decision::Cancel),
            Self::Action => Some(Decision::Action),
            Self::ViewLog | Self::Copy | Self::ToggleDetails => None,
        }
    }
}

/// Checkbox row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxView {
    pub label: String,
    pub checked: bool,
}

/// Layout decisions for the question currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupView {
    pub show_log_button: bool,
    pub show_copy_button: bool,
    /// Action label and icon when the question has an action.
    pub action: Option<(String, Option<String>)>,
    pub show_details_toggle: bool,
    pub details_visible: bool,
    pub checkbox: Option<CheckboxView>,
    pub default_button: ButtonKind,
    show_ok: bool,
    copied: bool,
}

impl PopupView {
    /// Build the view for a question.
    pub fn for_question(presentation: &Presentation) -> Self {
        let has_details = !presentation.detail_message.is_empty();
        let default_button = match &presentation.action {
            Some(action) if action.focus => ButtonKind::Action,
            _ if presentation.show_ok => ButtonKind::Ok,
            _ => ButtonKind::Yes,
        };

        Self {
            show_log_button: presentation.log.as_ref().is_some_and(|log| !log.is_empty()),
            show_copy_button: presentation.show_copy_button,
            action: presentation.action.as_ref().map(|action| {
                (action.label.clone().unwrap_or_default(), action.icon.clone())
            }),
            show_details_toggle: has_details,
            details_visible: has_details && presentation.show_details_initially,
            checkbox: presentation.checkbox.as_ref().map(|checkbox| CheckboxView {
                label: checkbox.message.clone(),
                checked: checkbox.checked,
            }),
            default_button,
            show_ok: presentation.show_ok,
            copied: false,
        }
    }

    /// Yes / No, or OK alone.
    pub fn standard_buttons(&self) -> &'static [ButtonKind] {
        if self.show_ok {
            &[ButtonKind::Ok]
        } else {
            &[ButtonKind::Yes, ButtonKind::No]
        }
    }

    /// Every visible button, in painting order.
    pub fn buttons(&self) -> Vec<ButtonKind> {
        let mut buttons = Vec::new();
        if self.show_log_button {
            buttons.push(ButtonKind::ViewLog);
        }
        if self.show_copy_button {
            buttons.push(ButtonKind::Copy);
        }
        if self.action.is_some() {
            buttons.push(ButtonKind::Action);
        }
        if self.show_details_toggle {
            buttons.push(ButtonKind::ToggleDetails);
        }
        buttons.extend_from_slice(self.standard_buttons());
        buttons
    }

    /// Label for a button in the current state.
    pub fn label(&self, button: ButtonKind) -> String {
        match button {
            ButtonKind::Action => self
                .action
                .as_ref()
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            ButtonKind::Copy if self.copied => COPIED.to_string(),
            ButtonKind::ToggleDetails if self.details_visible => HIDE_DETAILS.to_string(),
            other => other.label().to_string(),
        }
    }

    /// Open or close the details pane.
    pub fn toggle_details(&mut self) {
        if self.show_details_toggle {
            self.details_visible = !self.details_visible;
        }
    }

    /// Switch the copy button to its "Copied" label.
    pub fn mark_copied(&mut self) {
        self.copied = true;
    }

    /// Set the checkbox, if there is one.
    pub fn set_checked(&mut self, checked: bool) {
        if let Some(checkbox) = self.checkbox.as_mut() {
            checkbox.checked = checked;
        }
    }

    /// `None` without a checkbox, otherwise its state.
    pub fn checkbox_state(&self) -> Option<bool> {
        self.checkbox.as_ref().map(|checkbox| checkbox.checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{ActionButton, Question};

    fn view_of<P>(question: &Question<P>) -> PopupView {
        PopupView::for_question(question.presentation())
    }

    #[test]
    fn test_plain_question_shows_yes_no() {
        let view = view_of(&Question::new((), "T", "M"));
        assert_eq!(view.buttons(), vec![ButtonKind::Yes, ButtonKind::No]);
        assert_eq!(view.default_button, ButtonKind::Yes);
        assert!(view.checkbox_state().is_none());
        assert!(!view.details_visible);
    }

    #[test]
    fn test_ok_only() {
        let view = view_of(&Question::new((), "T", "M").ok_only(true));
        assert_eq!(view.standard_buttons(), &[ButtonKind::Ok]);
        assert_eq!(view.default_button, ButtonKind::Ok);
    }

    #[test]
    fn test_focused_action_is_default() {
        let question = Question::new((), "T", "M")
            .ok_only(true)
            .with_action(ActionButton::new("Open").focused(), |_, _| {});
        let view = view_of(&question);
        assert_eq!(view.default_button, ButtonKind::Action);
        assert_eq!(view.label(ButtonKind::Action), "Open");
    }

    #[test]
    fn test_unfocused_action_keeps_yes_default() {
        let question =
            Question::new((), "T", "M").with_action(ActionButton::default(), |_, _| {});
        let view = view_of(&question);
        assert_eq!(view.default_button, ButtonKind::Yes);
        assert_eq!(view.label(ButtonKind::Action), "");
    }

    #[test]
    fn test_full_button_order() {
        let question = Question::new((), "T", "M")
            .log_text("log")
            .copy_button(true)
            .detail("details")
            .with_action(ActionButton::new("Act"), |_, _| {});
        assert_eq!(
            view_of(&question).buttons(),
            vec![
                ButtonKind::ViewLog,
                ButtonKind::Copy,
                ButtonKind::Action,
                ButtonKind::ToggleDetails,
                ButtonKind::Yes,
                ButtonKind::No,
            ]
        );
    }

    #[test]
    fn test_empty_log_hides_log_button() {
        let view = view_of(&Question::new((), "T", "M").log_text(""));
        assert!(!view.show_log_button);
    }

    #[test]
    fn test_details_toggle_labels() {
        let mut view = view_of(&Question::new((), "T", "M").detail("trace"));
        assert_eq!(view.label(ButtonKind::ToggleDetails), "Show details");
        view.toggle_details();
        assert!(view.details_visible);
        assert_eq!(view.label(ButtonKind::ToggleDetails), "Hide details");
        view.toggle_details();
        assert!(!view.details_visible);
    }

    #[test]
    fn test_details_shown_initially() {
        let view = view_of(
            &Question::new((), "T", "M")
                .detail("details shown first")
                .show_details_initially(true),
        );
        assert!(view.details_visible);
    }

    #[test]
    fn test_show_details_without_detail_text() {
        let mut view = view_of(&Question::new((), "T", "M").show_details_initially(true));
        assert!(!view.show_details_toggle);
        assert!(!view.details_visible);
        view.toggle_details();
        assert!(!view.details_visible);
    }

    #[test]
    fn test_copy_label_resets_per_question() {
        let question = Question::new((), "T", "M").copy_button(true);
        let mut view = view_of(&question);
        view.mark_copied();
        assert_eq!(view.label(ButtonKind::Copy), "Copied");

        let next = view_of(&question);
        assert_eq!(next.label(ButtonKind::Copy), "Copy to clipboard");
    }

    #[test]
    fn test_checkbox_state() {
        let mut view = view_of(&Question::new((), "T", "M").checkbox("Remember", true));
        assert_eq!(view.checkbox_state(), Some(true));
        view.set_checked(false);
        assert_eq!(view.checkbox_state(), Some(false));
    }

    #[test]
    fn test_button_decisions() {
        assert_eq!(ButtonKind::Yes.decision(), Some(Decision::Proceed));
        assert_eq!(ButtonKind::Ok.decision(), Some(Decision::Proceed));
        assert_eq!(ButtonKind::No.decision(), Some(Decision::Cancel));
        assert_eq!(ButtonKind::Action.decision(), Some(Decision::Action));
        assert_eq!(ButtonKind::Copy.decision(), None);
    }
}
