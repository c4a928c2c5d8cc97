use std::{cell::RefCell, fmt, rc::Rc};

use crate::loan_state::LoanState;

/// A book shared between the library's universe and whichever patron holds
/// it. Held-collection membership is checked with [`Rc::ptr_eq`], so two
/// books with identical fields remain distinct.
pub type SharedBook = Rc<RefCell<Book>>;

/// A single library book with an encapsulated availability state.
///
/// The state can only change through [`Book::request_loan`] and
/// [`Book::return_book`]. `PartialEq` is deliberately not implemented:
/// identity is by reference, never by field values.
#[derive(Debug)]
pub struct Book {
    /// Author of the book
    author: String,
    /// Title of the book
    title: String,
    /// Opaque catalogue identifier
    identifier: String,
    /// Current availability state
    state: LoanState,
}

impl Book {
    /// Create a new book; every book starts out available
    #[must_use]
    pub fn new(author: &str, title: &str, identifier: &str) -> Self {
        Self {
            author: author.to_string(),
            title: title.to_string(),
            identifier: identifier.to_string(),
            state: LoanState::Available,
        }
    }

    /// Wrap the book in a shared handle for identity-based tracking
    #[must_use]
    pub fn into_shared(self) -> SharedBook {
        Rc::new(RefCell::new(self))
    }

    /// Try to lend the book out.
    ///
    /// Transitions to [`LoanState::Lent`] and returns `true` when the book
    /// is available; returns `false` without any state change when it is
    /// already lent. This check-and-set is the only code path that can mark
    /// a book as lent.
    pub fn request_loan(&mut self) -> bool {
        if self.state == LoanState::Lent {
            false
        } else {
            self.state = LoanState::Lent;
            true
        }
    }

    /// Put the book back on the shelf.
    ///
    /// Always succeeds; returning an already-available book is a no-op.
    pub fn return_book(&mut self) {
        self.state = LoanState::Available;
    }

    /// Whether the book is currently out on loan
    #[must_use]
    pub fn is_lent(&self) -> bool {
        self.state == LoanState::Lent
    }

    /// Current availability state
    #[must_use]
    pub fn state(&self) -> LoanState {
        self.state
    }

    /// Author accessor
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Title accessor
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Catalogue identifier accessor
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// One-line description including the current availability status
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

// Implementing display for nicer output
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (ID: {}) | {}",
            self.title,
            self.author,
            self.identifier,
            self.state.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{book::Book, loan_state::LoanState};

    #[test]
    fn new_book_is_available() {
        let book = Book::new("George Orwell", "1984", "123-123");
        assert!(!book.is_lent());
        assert_eq!(book.state(), LoanState::Available);
        assert_eq!(book.author(), "George Orwell");
        assert_eq!(book.title(), "1984");
        assert_eq!(book.identifier(), "123-123");
    }

    #[test]
    fn second_loan_request_is_refused() {
        let mut book = Book::new("George Orwell", "1984", "123-123");
        assert!(book.request_loan());
        assert!(!book.request_loan());
        assert!(book.is_lent());
    }

    #[test]
    fn return_book_is_idempotent() {
        let mut book = Book::new("George Orwell", "1984", "123-123");
        assert!(book.request_loan());
        book.return_book();
        assert!(!book.is_lent());

        // Returning an already-available book is a no-op
        book.return_book();
        book.return_book();
        assert!(!book.is_lent());
    }

    #[test]
    fn describe_includes_status() {
        let mut book = Book::new("George Orwell", "1984", "123-123");
        assert_eq!(book.describe(), "1984 - George Orwell (ID: 123-123) | Available");

        assert!(book.request_loan());
        assert_eq!(book.describe(), "1984 - George Orwell (ID: 123-123) | Lent");
    }
}
