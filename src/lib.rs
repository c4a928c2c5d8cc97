//! Book lending simulation built around a guarded availability state.
//!
//! This crate models a small lending library: books with an encapsulated
//! availability state, patrons holding identity-tracked collections of
//! borrowed books, and a ledger that records lending activity and notifies
//! observers. A separate [`animal`] module carries an unrelated profile
//! exercise sharing the same normalize-or-default conventions.

pub mod animal;
pub mod book;
pub mod events;
pub mod ledger;
pub mod loan_state;
pub mod observers;
pub mod patron;
pub mod report;
pub mod timestamp;

pub use animal::AnimalProfile;
pub use book::{Book, SharedBook};
pub use events::LoanEvent;
pub use ledger::{LoanLedger, LoanRecord};
pub use loan_state::LoanState;
pub use patron::Patron;
pub use report::LendingReport;
