use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{book::SharedBook, events::LoanEvent, observers::LoanObserver, timestamp::TimeStamp};

/// A single recorded lending event
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoanRecord {
    /// Description of the book at the moment the event was recorded
    pub book: String,
    /// The event that occurred
    pub event: LoanEvent,
    /// When the event was recorded
    pub timestamp: TimeStamp,
}

/// In-memory record of lending activity across the simulation.
///
/// The ledger is purely observational: it never touches book or patron
/// state, it only remembers what happened and tells its observers.
pub struct LoanLedger {
    /// Recorded events, oldest first
    history: Vec<LoanRecord>,
    /// Maximum number of history entries to keep
    max_history_size: usize,
    /// Registered lending observers
    observers: Vec<Box<dyn LoanObserver>>,
}

// Manual implementation of Debug for LoanLedger
impl fmt::Debug for LoanLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoanLedger")
            .field("history", &self.history)
            .field("max_history_size", &self.max_history_size)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Default for LoanLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanLedger {
    /// Create an empty ledger with the default history cap
    #[must_use]
    pub fn new() -> Self {
        Self { history: Vec::new(), max_history_size: 100, observers: Vec::new() }
    }

    /// Register an observer to be notified of recorded events
    pub fn register_observer(&mut self, observer: Box<dyn LoanObserver>) {
        self.observers.push(observer);
    }

    /// Record a lending event against a book and notify observers.
    ///
    /// The book description is captured after the transition, so the
    /// record shows the availability the event produced.
    pub fn record(&mut self, book: &SharedBook, event: LoanEvent) {
        let record =
            LoanRecord { book: book.borrow().describe(), event, timestamp: TimeStamp::now() };

        self.history.push(record);

        // Maintain history size limit
        if self.history.len() > self.max_history_size {
            self.history.remove(0); // Remove oldest entry
        }

        if let Some(latest) = self.history.last() {
            for observer in &self.observers {
                observer.on_loan_event(latest);
            }
        }
    }

    /// Get the complete recorded history, oldest first.
    ///
    /// Rendering and printing of the history is owned by the report layer.
    #[must_use]
    pub fn history(&self) -> &[LoanRecord] {
        &self.history
    }
}
