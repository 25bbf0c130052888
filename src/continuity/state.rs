use std::fmt;
use std::sync::Arc;

use crate::book::CurrentBook;
use crate::store::StoreError;

/// Where restoration of the current book stands.
///
/// `Uninitialized -> Loading -> {Resolved(Some) | Resolved(None) | Failed}`.
/// Terminal states never change for the rest of the process.
#[derive(Debug, Clone)]
pub enum RestoreState {
    Uninitialized,
    Loading,
    /// `None` means the store was empty
    Resolved(Option<CurrentBook>),
    /// Kept for diagnostics; downstream it reads the same as `Resolved(None)`
    Failed(Arc<StoreError>),
}

impl RestoreState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RestoreState::Resolved(_) | RestoreState::Failed(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RestoreState::Failed(_))
    }

    /// The book to seed the player with, if any
    pub fn initial_book(&self) -> Option<&CurrentBook> {
        match self {
            RestoreState::Resolved(book) => book.as_ref(),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RestoreState::Uninitialized => "uninitialized",
            RestoreState::Loading => "loading",
            RestoreState::Resolved(Some(_)) => "resolved",
            RestoreState::Resolved(None) => "empty",
            RestoreState::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for RestoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestoreState::Resolved(Some(book)) => write!(f, "resolved ({}: {})", book.id, book.title),
            RestoreState::Failed(err) => write!(f, "failed ({})", err),
            other => f.write_str(other.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_resolved_book_seeds_player() {
        let failed = RestoreState::Failed(Arc::new(StoreError::DeserializationFailure {
            detail: "bad".to_string(),
        }));

        assert!(RestoreState::Uninitialized.initial_book().is_none());
        assert!(RestoreState::Loading.initial_book().is_none());
        assert!(RestoreState::Resolved(None).initial_book().is_none());
        assert!(failed.initial_book().is_none());

        let resolved = RestoreState::Resolved(Some(CurrentBook::new("b1", "Dune")));
        assert_eq!(resolved.initial_book().map(|b| b.title.as_str()), Some("Dune"));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!RestoreState::Uninitialized.is_terminal());
        assert!(!RestoreState::Loading.is_terminal());
        assert!(RestoreState::Resolved(None).is_terminal());
    }

    #[test]
    fn test_display() {
        let resolved = RestoreState::Resolved(Some(CurrentBook::new("b1", "Dune")));
        assert_eq!(resolved.to_string(), "resolved (b1: Dune)");
        assert_eq!(RestoreState::Resolved(None).to_string(), "empty");
    }
}
