//! Shared test renderer.

#![allow(dead_code)]

use proceed_core::{Presentation, Renderer};

/// What the dispatcher asked the renderer to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Render(String),
    Hide,
    Raise,
}

/// Renderer that records calls and simulates a checkbox.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<RenderEvent>,
    pub visible: bool,
    /// Times `render` was called while a question was already on screen.
    pub overlapping_renders: usize,
    pub checkbox: Option<bool>,
    pub logs: Vec<(String, String)>,
    pub clipboard: Vec<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Titles passed to `render`, in order.
    pub fn rendered(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Render(title) => Some(title.clone()),
                _ => None,
            })
            .collect()
    }

    /// Simulate the user clicking the checkbox.
    pub fn set_checkbox(&mut self, checked: bool) {
        if self.checkbox.is_some() {
            self.checkbox = Some(checked);
        }
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, presentation: &Presentation) {
        if self.visible {
            self.overlapping_renders += 1;
        }
        self.visible = true;
        self.checkbox = presentation.checkbox.as_ref().map(|c| c.checked);
        self.events
            .push(RenderEvent::Render(presentation.title.clone()));
    }

    fn hide(&mut self) {
        self.visible = false;
        self.checkbox = None;
        self.events.push(RenderEvent::Hide);
    }

    fn raise(&mut self) {
        self.events.push(RenderEvent::Raise);
    }

    fn checkbox_state(&self) -> Option<bool> {
        self.checkbox
    }

    fn show_log_viewer(&mut self, title: &str, text: &str) {
        self.logs.push((title.to_string(), text.to_string()));
    }

    fn copy_to_clipboard(&mut self, text: String) {
        self.clipboard.push(text);
    }
}
