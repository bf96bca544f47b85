//! Cross-thread question dispatcher.
//!
//! Worker threads only ever touch a [`QuestionHandle`], which sends an
//! envelope over a channel. The [`Dispatcher`] lives on the UI thread, owns
//! the queue and the visible/hidden state, and drains the channel in
//! [`pump`](Dispatcher::pump). Chosen callbacks travel back through the same
//! channel, so they also run during `pump`, on the UI thread, after the
//! popup has already moved on.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};

use crate::diagnostics::diagnostic_report;
use crate::error::{PopupError, Result};
use crate::log::resolve_log;
use crate::question::{Callback, Decision, Presentation, Question};
use crate::queue::QuestionQueue;
use crate::renderer::Renderer;
use crate::settings::AppIdentity;

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Work items delivered to the UI thread, processed strictly in send order.
enum Envelope<P> {
    /// A new question from any thread.
    Ask(Question<P>),
    /// A decided question's callback, posted by the UI thread itself.
    Invoke(Invocation<P>),
}

struct Invocation<P> {
    decision: Decision,
    title: String,
    callback: Option<Callback<P>>,
    payload: P,
    checkbox: Option<bool>,
}

impl<P> Invocation<P> {
    fn run(self) {
        match self.callback {
            Some(callback) => {
                tracing::debug!(
                    "Running {} callback for '{}' (checkbox: {:?})",
                    self.decision.label(),
                    self.title,
                    self.checkbox
                );
                callback(self.payload, self.checkbox);
            }
            None => {
                tracing::debug!(
                    "No {} callback registered for '{}'",
                    self.decision.label(),
                    self.title
                );
            }
        }
    }
}

/// Whether the popup is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PopupState {
    Hidden,
    Visible,
}

/// Cloneable, thread-safe entry point for raising questions.
pub struct QuestionHandle<P> {
    sender: Sender<Envelope<P>>,
    waker: Option<Waker>,
}

impl<P> Clone for QuestionHandle<P> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            waker: self.waker.clone(),
        }
    }
}

impl<P> QuestionHandle<P> {
    /// Queue a question. Returns immediately.
    ///
    /// If a popup is already visible the question waits its turn. Fails only
    /// when the dispatcher has been dropped, in which case the question is
    /// discarded without running any callback.
    pub fn ask(&self, question: Question<P>) -> Result<()> {
        self.sender
            .send(Envelope::Ask(question))
            .map_err(|_| PopupError::DispatcherClosed)?;
        if let Some(wake) = &self.waker {
            wake();
        }
        Ok(())
    }
}

/// Single authority over the popup: what is shown, and which callback fires.
///
/// Create one per host window and keep it on the UI thread.
pub struct Dispatcher<P> {
    queue: QuestionQueue<P>,
    state: PopupState,
    sender: Sender<Envelope<P>>,
    receiver: Receiver<Envelope<P>>,
    waker: Option<Waker>,
}

impl<P> Default for Dispatcher<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Dispatcher<P> {
    /// Create a dispatcher whose UI loop polls [`pump`](Self::pump) on its own.
    pub fn new() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self {
            queue: QuestionQueue::new(),
            state: PopupState::Hidden,
            sender,
            receiver,
            waker: None,
        }
    }

    /// Create a dispatcher that calls `wake` after every send, so an idle UI
    /// loop knows to pump (e.g. `egui::Context::request_repaint`).
    pub fn with_waker(wake: impl Fn() + Send + Sync + 'static) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.waker = Some(Arc::new(wake));
        dispatcher
    }

    /// Get a handle for raising questions from any thread.
    pub fn handle(&self) -> QuestionHandle<P> {
        QuestionHandle {
            sender: self.sender.clone(),
            waker: self.waker.clone(),
        }
    }

    /// Queue a question from the UI thread.
    ///
    /// Goes through the channel like any other caller, so ordering relative
    /// to worker threads is the channel order.
    pub fn ask(&self, question: Question<P>) {
        self.post(Envelope::Ask(question));
    }

    /// Drain the channel: queue new questions, run decided callbacks, then
    /// show the head if nothing is visible.
    ///
    /// Only envelopes already present when the call starts are processed;
    /// anything sent by a callback waits for the next pump. Returns the
    /// number of envelopes handled.
    pub fn pump<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> usize {
        let pending = self.receiver.len();
        let mut processed = 0;
        while processed < pending {
            let Ok(envelope) = self.receiver.try_recv() else {
                break;
            };
            processed += 1;
            match envelope {
                Envelope::Ask(question) => {
                    tracing::debug!(
                        "Queued question '{}' ({} waiting)",
                        question.presentation().title,
                        self.queue.len()
                    );
                    self.queue.enqueue(question);
                }
                Envelope::Invoke(invocation) => invocation.run(),
            }
        }
        if processed > 0 {
            self.show_head(renderer);
        }
        processed
    }

    /// Commit the user's decision on the visible question.
    ///
    /// Pops the head, captures the checkbox state, posts the selected
    /// callback to run on a later [`pump`](Self::pump), hides the popup and
    /// shows the next question if there is one. Returns `false` without
    /// doing anything when no question is visible.
    pub fn decide<R: Renderer + ?Sized>(&mut self, decision: Decision, renderer: &mut R) -> bool {
        if self.state == PopupState::Hidden {
            tracing::debug!("Ignoring {} decision: popup is hidden", decision.label());
            return false;
        }
        let Some(question) = self.queue.pop_head() else {
            tracing::debug!("Ignoring {} decision: no question queued", decision.label());
            self.hide(renderer);
            return false;
        };

        let checkbox = question
            .presentation()
            .checkbox
            .as_ref()
            .and_then(|_| renderer.checkbox_state());
        let title = question.presentation().title.clone();
        tracing::debug!("User chose {} for '{}'", decision.label(), title);

        let (payload, callback) = question.resolve(decision);
        self.post(Envelope::Invoke(Invocation {
            decision,
            title,
            callback,
            payload,
            checkbox,
        }));

        self.hide(renderer);
        self.show_head(renderer);
        true
    }

    /// Open the head question's log in the renderer's log viewer.
    ///
    /// Returns `Ok(false)` when there is no question or it has no log. A
    /// file that cannot be read or decoded is returned as an error for the
    /// caller to report; the dispatcher state is unaffected.
    pub fn show_log_for_head<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<bool> {
        let Some(presentation) = self.head() else {
            return Ok(false);
        };
        let Some(log) = presentation.log.as_ref().filter(|log| !log.is_empty()) else {
            return Ok(false);
        };

        let text = resolve_log(log).inspect_err(|e| {
            tracing::warn!("Could not open log for '{}': {}", presentation.title, e);
        })?;
        renderer.show_log_viewer(&presentation.log_viewer_title, &text);
        Ok(true)
    }

    /// Copy the head question's diagnostic report to the clipboard.
    ///
    /// Returns `false` when there is no question.
    pub fn copy_details_for_head<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        app: &AppIdentity,
    ) -> bool {
        match self.head() {
            Some(presentation) => {
                renderer.copy_to_clipboard(diagnostic_report(app, presentation));
                true
            }
            None => false,
        }
    }

    /// Presentation of the question being shown, or next to be shown.
    pub fn head(&self) -> Option<&Presentation> {
        self.queue.peek_head().map(Question::presentation)
    }

    /// Number of queued questions, including the visible one.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.state == PopupState::Visible
    }

    fn show_head<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        if self.state == PopupState::Visible {
            renderer.raise();
            return;
        }
        if let Some(head) = self.queue.peek_head() {
            tracing::debug!("Showing question '{}'", head.presentation().title);
            renderer.render(head.presentation());
            self.state = PopupState::Visible;
        }
    }

    fn hide<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        renderer.hide();
        self.state = PopupState::Hidden;
    }

    fn post(&self, envelope: Envelope<P>) {
        // The dispatcher holds the receiver, so the channel cannot be closed here.
        if self.sender.send(envelope).is_err() {
            tracing::error!("Question channel closed while the dispatcher is alive");
            return;
        }
        if let Some(wake) = &self.waker {
            wake();
        }
    }
}

impl<P> Drop for Dispatcher<P> {
    fn drop(&mut self) {
        let in_flight = self
            .receiver
            .try_iter()
            .filter(|envelope| matches!(envelope, Envelope::Ask(_)))
            .count();
        let discarded = self.queue.len() + in_flight;
        if discarded > 0 {
            tracing::info!("Discarding {} unanswered question(s)", discarded);
        }
    }
}
