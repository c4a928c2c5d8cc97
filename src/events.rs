use serde::{Deserialize, Serialize};

/// Lending events recorded against a book
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LoanEvent {
    /// A patron borrowed the book
    Borrowed(String),
    /// A borrow attempt was refused because the book was already lent
    BorrowRefused(String),
    /// A patron returned the book
    Returned(String),
    /// A return attempt was refused because the patron did not hold the book
    ReturnRefused(String),
}

impl LoanEvent {
    /// Name of the patron the event concerns
    #[must_use]
    pub fn patron(&self) -> &str {
        match self {
            Self::Borrowed(patron)
            | Self::BorrowRefused(patron)
            | Self::Returned(patron)
            | Self::ReturnRefused(patron) => patron,
        }
    }

    /// Whether the event records a granted operation rather than a refusal
    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Borrowed(_) | Self::Returned(_))
    }
}
