//! egui rendering for queued proceed/cancel questions.
//!
//! This module exposes the popup renderer and logging setup so host
//! applications (and tests) can use them without the demo binary.

pub mod log_viewer;
pub mod logging;
pub mod popup;

pub use popup::{EguiPopup, PopupEvent};
