//! Read-only log viewer window.

use egui::{Context, Id};

/// One open log window.
pub struct LogViewer {
    id: Id,
    title: String,
    text: String,
    open: bool,
}

impl LogViewer {
    /// Create a viewer. `serial` keeps windows with equal titles apart.
    pub fn new(serial: u64, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Id::new(("proceed_log_viewer", serial)),
            title: title.into(),
            text: text.into(),
            open: true,
        }
    }

    /// Paint the window. Returns `false` once the user has closed it.
    pub fn show(&mut self, ctx: &Context) -> bool {
        let text = &self.text;
        egui::Window::new(self.title.as_str())
            .id(self.id)
            .open(&mut self.open)
            .resizable(true)
            .default_size([600.0, 400.0])
            .show(ctx, |ui| {
                if ui.button("Copy to clipboard").clicked() {
                    ui.ctx().copy_text(text.clone());
                }
                ui.separator();
                egui::ScrollArea::both()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(&mut text.as_str())
                                .code_editor()
                                .desired_width(f32::INFINITY),
                        );
                    });
            });
        self.open
    }
}
