//! Demo host window and eframe::App implementation

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, unbounded};
use eframe::egui;

use proceed_core::{ActionButton, Dispatcher, PopupSettings, Question};
use proceed_gui::{EguiPopup, PopupEvent};

/// Payload carried by demo questions.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: u32,
    pub name: String,
}

/// Main application struct
pub struct DemoApp {
    dispatcher: Dispatcher<Job>,
    popup: EguiPopup,
    settings: PopupSettings,
    /// Callbacks report what they did here; drained every frame.
    outcome_sender: Sender<String>,
    outcome_receiver: Receiver<String>,
    status: String,
    next_job: u32,
}

impl DemoApp {
    /// Create the app and raise the sample questions.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: PopupSettings,
        sample_log: Option<PathBuf>,
    ) -> Self {
        let ctx = cc.egui_ctx.clone();
        let dispatcher = Dispatcher::with_waker(move || ctx.request_repaint());
        let (outcome_sender, outcome_receiver) = unbounded();

        let app = Self {
            popup: EguiPopup::new(settings.layout.clone()),
            dispatcher,
            settings,
            outcome_sender,
            outcome_receiver,
            status: "Ready".to_string(),
            next_job: 1,
        };
        app.dispatcher
            .ask(sample_question(&app.outcome_sender, sample_log));
        app.dispatcher.ask(details_first_question());
        app
    }

    /// Ask a question from a background thread after a short delay.
    fn spawn_worker(&mut self) {
        let job = Job {
            id: self.next_job,
            name: format!("Conversion {}", self.next_job),
        };
        self.next_job += 1;

        let handle = self.dispatcher.handle();
        let outcomes = self.outcome_sender.clone();
        let spawned = thread::Builder::new()
            .name(format!("job-{}", job.id))
            .spawn(move || {
                thread::sleep(Duration::from_millis(400));
                let id = job.id;
                if let Err(e) = handle.ask(job_question(job, &outcomes)) {
                    tracing::warn!("Job {} could not ask its question: {}", id, e);
                }
            });
        if let Err(e) = spawned {
            tracing::error!("Failed to start worker thread: {}", e);
        }
    }

    fn handle_popup_event(&mut self, event: PopupEvent) {
        tracing::debug!("Popup event: {:?}", event);
        match event {
            PopupEvent::Decide(decision) => {
                self.dispatcher.decide(decision, &mut self.popup);
            }
            PopupEvent::ViewLog => {
                if let Err(e) = self.dispatcher.show_log_for_head(&mut self.popup) {
                    self.popup.report_error(&e);
                }
            }
            PopupEvent::Copy => {
                self.dispatcher
                    .copy_details_for_head(&mut self.popup, &self.settings.app);
            }
        }
    }

    fn save_settings(&mut self) {
        let Some(path) = PopupSettings::config_path() else {
            self.status = "No config directory available".to_string();
            return;
        };
        match self.settings.save_to(&path) {
            Ok(()) => self.status = format!("Settings saved to {}", path.display()),
            Err(e) => {
                tracing::error!("Failed to save settings: {}", e);
                self.status = e.user_message();
            }
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.dispatcher.pump(&mut self.popup);

        while let Ok(outcome) = self.outcome_receiver.try_recv() {
            tracing::info!("{}", outcome);
            self.status = outcome;
        }

        let status_bar = egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} waiting", self.dispatcher.pending()));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Proceed demo");
            ui.add_space(8.0);
            ui.label("Questions raised here are shown one at a time in the bottom-right corner.");
            ui.add_space(12.0);

            if ui.button("Ask from a background job").clicked() {
                self.spawn_worker();
            }
            if ui.button("Ask from three jobs at once").clicked() {
                for _ in 0..3 {
                    self.spawn_worker();
                }
            }
            if ui.button("Ask again with details").clicked() {
                self.dispatcher.ask(details_first_question());
            }
            ui.add_space(12.0);
            if ui.button("Save settings").clicked() {
                self.save_settings();
            }
        });

        let inset = status_bar.response.rect.height();
        if let Some(event) = self.popup.show(ctx, inset) {
            self.handle_popup_event(event);
        }
    }
}

/// Question with every optional part: log, checkbox and action.
fn sample_question(outcomes: &Sender<String>, sample_log: Option<PathBuf>) -> Question<Job> {
    let job = Job {
        id: 0,
        name: "Sample".to_string(),
    };
    let (proceed, cancel, action) = (outcomes.clone(), outcomes.clone(), outcomes.clone());

    let question = Question::new(
        job,
        "A sample popup",
        "This popup shows every part of a question, with a message long enough \
         that it has to wrap across more than one line.",
    )
    .log_viewer_title("Sample log")
    .checkbox("Remember this choice", false)
    .copy_button(true)
    .detail("Details are hidden until requested.")
    .on_proceed(move |job, checked| {
        let _ = proceed.send(format!("{}: yes (checkbox {:?})", job.name, checked));
    })
    .on_cancel(move |job, checked| {
        let _ = cancel.send(format!("{}: no (checkbox {:?})", job.name, checked));
    })
    .with_action(ActionButton::new("An action"), move |job, checked| {
        let _ = action.send(format!("{}: action (checkbox {:?})", job.name, checked));
    });

    match sample_log {
        Some(path) => question.log_file(path),
        None => question.log_text("sample log line 1\nsample log line 2\n"),
    }
}

/// OK-only question that opens with its details visible.
fn details_first_question() -> Question<Job> {
    Question::new(
        Job {
            id: 0,
            name: "Notice".to_string(),
        },
        "Second popup",
        "This one waited until the first was answered.",
    )
    .detail("details shown first")
    .show_details_initially(true)
    .ok_only(true)
}

fn job_question(job: Job, outcomes: &Sender<String>) -> Question<Job> {
    let title = format!("{} finished", job.name);
    let message = format!("Job {} finished. Add the result to the library?", job.id);
    let log = format!(
        "job {id}: started\njob {id}: converted 1 file\njob {id}: done\n",
        id = job.id
    );
    let viewer_title = format!("Log for job {}", job.id);
    let (added, skipped, opened) = (outcomes.clone(), outcomes.clone(), outcomes.clone());

    Question::new(job, title, message)
        .log_text(log)
        .log_viewer_title(viewer_title)
        .copy_button(true)
        .on_proceed(move |job, _| {
            let _ = added.send(format!("Added result of job {}", job.id));
        })
        .on_cancel(move |job, _| {
            let _ = skipped.send(format!("Skipped result of job {}", job.id));
        })
        .with_action(
            ActionButton::new("Open folder").icon("📂").focused(),
            move |job, _| {
                let _ = opened.send(format!("Opened output folder of job {}", job.id));
            },
        )
}
