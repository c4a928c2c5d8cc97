use std::rc::Rc;

use crate::book::SharedBook;

/// Indicator yielded by [`Patron::list_held_books`] when nothing is held
pub const NO_BOOKS_HELD: &str = "No books currently held";

/// A library patron holding a collection of borrowed books.
///
/// The held collection tracks books by identity ([`Rc::ptr_eq`]) in
/// borrowing order. It is mutated only by [`Patron::borrow_book`] and
/// [`Patron::give_back`], which always go through the book's own guarded
/// transition, so a book can sit in at most one patron's collection at a
/// time.
#[derive(Debug)]
pub struct Patron {
    /// Display name of the patron
    name: String,
    /// Numeric identifier of the patron
    id: u32,
    /// Books currently held, in borrowing order
    held: Vec<SharedBook>,
}

impl Patron {
    /// Create a patron holding no books
    #[must_use]
    pub fn new(name: &str, id: u32) -> Self {
        Self { name: name.to_string(), id, held: Vec::new() }
    }

    /// Name accessor
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier accessor
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Try to borrow a book.
    ///
    /// The decision is delegated to the book's guarded check-and-set; the
    /// held collection grows only when the loan is granted. Returns `false`
    /// when the book is already lent, including to this patron.
    pub fn borrow_book(&mut self, book: &SharedBook) -> bool {
        if book.borrow_mut().request_loan() {
            self.held.push(Rc::clone(book));
            true
        } else {
            false
        }
    }

    /// Give back a held book.
    ///
    /// Membership is checked by identity, so a book this patron never
    /// borrowed is refused even when it is available or held by someone
    /// else. On a hit the book is returned to the shelf and removed from
    /// the collection; on a miss nothing changes anywhere.
    pub fn give_back(&mut self, book: &SharedBook) -> bool {
        if let Some(pos) = self.held.iter().position(|held| Rc::ptr_eq(held, book)) {
            book.borrow_mut().return_book();
            self.held.remove(pos);
            true
        } else {
            false
        }
    }

    /// Whether this patron currently holds the given book (identity check)
    #[must_use]
    pub fn holds(&self, book: &SharedBook) -> bool {
        self.held.iter().any(|held| Rc::ptr_eq(held, book))
    }

    /// Number of books currently held
    #[must_use]
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Iterate over descriptions of the held books in borrowing order.
    ///
    /// The listing is lazy and every call starts a fresh pass; when the
    /// collection is empty it yields [`NO_BOOKS_HELD`] exactly once instead
    /// of nothing.
    #[must_use]
    pub fn list_held_books(&self) -> HeldBooks<'_> {
        HeldBooks { books: &self.held, next: 0, indicator_emitted: false }
    }
}

/// Lazy listing over a patron's held books
#[derive(Debug)]
pub struct HeldBooks<'a> {
    /// Books backing the listing
    books: &'a [SharedBook],
    /// Index of the next book to describe
    next: usize,
    /// Whether the empty indicator has already been yielded
    indicator_emitted: bool,
}

impl Iterator for HeldBooks<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.books.is_empty() {
            if self.indicator_emitted {
                None
            } else {
                self.indicator_emitted = true;
                Some(NO_BOOKS_HELD.to_string())
            }
        } else {
            let book = self.books.get(self.next)?;
            self.next = self.next.saturating_add(1);
            Some(book.borrow().describe())
        }
    }
}
