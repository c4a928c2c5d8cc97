use serde::{Deserialize, Serialize};

/// Represents the two availability states of a library book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LoanState {
    /// Book is on the shelf and may be borrowed
    #[default]
    Available,
    /// Book is currently out on loan
    Lent,
}

impl LoanState {
    /// Get a human-readable description of the current state
    #[must_use]
    pub fn get_description(self) -> String {
        match self {
            Self::Available => "Book is available for borrowing".to_string(),
            Self::Lent => "Book is out on loan".to_string(),
        }
    }

    /// Short status label used in book descriptions
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Lent => "Lent",
        }
    }
}
