//! Queued "do you want to proceed" questions for a desktop GUI.
//!
//! Background tasks raise questions from any thread. The questions are
//! marshalled to the UI thread and shown one at a time in a single popup;
//! every other question waits its turn in FIFO order. The chosen callback
//! always runs on the UI thread, after the popup state has settled.
//!
//! # Architecture
//!
//! - `question.rs` - Question record, presentation options, decisions
//! - `queue.rs` - FIFO queue owned by the dispatcher
//! - `dispatcher.rs` - Cross-thread dispatcher and question handles
//! - `renderer.rs` - Boundary trait implemented by the popup widget
//! - `view.rs` - Renderer-agnostic popup layout decisions
//! - `log.rs` - Inline or file-backed log resolution
//! - `diagnostics.rs` - Clipboard text for the copy button
//! - `settings.rs` - Persisted popup settings
//! - `error.rs` - Error types with user-friendly messages
//!
//! # Example
//!
//! ```ignore
//! use proceed_core::{Decision, Dispatcher, Question};
//!
//! let mut dispatcher = Dispatcher::new();
//! let handle = dispatcher.handle();
//!
//! std::thread::spawn(move || {
//!     let question = Question::new(42_u32, "Books added", "Open the first one?")
//!         .on_proceed(|id, _| println!("opening {id}"));
//!     let _ = handle.ask(question);
//! });
//!
//! // On the UI thread, once per frame:
//! dispatcher.pump(&mut renderer);
//! // When the user clicks a button:
//! dispatcher.decide(Decision::Proceed, &mut renderer);
//! ```

mod diagnostics;
mod dispatcher;
mod error;
mod log;
mod question;
mod queue;
mod renderer;
mod settings;
mod view;

pub use diagnostics::diagnostic_report;
pub use dispatcher::{Dispatcher, QuestionHandle};
pub use error::{PopupError, Result};
pub use log::resolve_log;
pub use question::{
    ActionButton, Callback, CheckboxOption, Decision, LogSource, Presentation, Question,
};
pub use queue::QuestionQueue;
pub use renderer::Renderer;
pub use settings::{AppIdentity, LayoutSettings, PopupSettings};
pub use view::{ButtonKind, CheckboxView, PopupView};
