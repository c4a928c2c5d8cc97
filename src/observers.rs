use crate::events::LoanEvent;
use crate::ledger::LoanRecord;

/// Trait for lending activity observation
pub trait LoanObserver {
    /// Called when a lending event is recorded
    fn on_loan_event(&self, record: &LoanRecord);
}

/// Logs every lending event that reaches the ledger
#[derive(Debug)]
pub struct LoanLogger;

impl LoanObserver for LoanLogger {
    fn on_loan_event(&self, record: &LoanRecord) {
        println!("LOGGER: {} --({:?})", record.book, record.event);
    }
}

/// Announces granted loans and returns at the lending desk
#[derive(Debug)]
pub struct DeskAnnouncer;

impl LoanObserver for DeskAnnouncer {
    fn on_loan_event(&self, record: &LoanRecord) {
        match &record.event {
            LoanEvent::Borrowed(patron) => {
                println!("NOTIFICATION: {patron} has borrowed: {}", record.book);
            }
            LoanEvent::Returned(patron) => {
                println!("NOTIFICATION: {patron} has returned: {}", record.book);
            }
            _ => {}
        }
    }
}
