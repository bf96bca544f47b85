//! FIFO queue of pending questions.

use std::collections::VecDeque;

use crate::question::Question;

/// Pending questions in display order.
///
/// Insertion order is display order. There is no reordering, deduplication
/// or removal by identity: the only way out is [`pop_head`](Self::pop_head)
/// once the user has decided.
pub struct QuestionQueue<P> {
    questions: VecDeque<Question<P>>,
}

impl<P> Default for QuestionQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> QuestionQueue<P> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            questions: VecDeque::new(),
        }
    }

    /// Append a question to the tail.
    pub fn enqueue(&mut self, question: Question<P>) {
        self.questions.push_back(question);
    }

    /// The question being shown, or next to be shown.
    #[inline]
    pub fn peek_head(&self) -> Option<&Question<P>> {
        self.questions.front()
    }

    /// Remove the head. Returns `None` when the queue is empty.
    pub fn pop_head(&mut self) -> Option<Question<P>> {
        self.questions.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
