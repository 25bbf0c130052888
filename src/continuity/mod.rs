//! Restores the current book from the store once per process.
//!
//! The controller owns the only in-memory copy of "the book the player should
//! open". Restoration starts at most once and always runs to a terminal state;
//! store errors are logged and folded into [`RestoreState::Failed`] rather
//! than returned.

mod state;

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::book::CurrentBook;
use crate::store::{self, BookStore};

pub use state::RestoreState;

pub struct ContinuityController<S> {
    store: Arc<S>,
    state: Arc<watch::Sender<RestoreState>>,
}

impl<S: BookStore> ContinuityController<S> {
    pub fn new(store: Arc<S>) -> Self {
        let (state, _) = watch::channel(RestoreState::Uninitialized);
        Self {
            store,
            state: Arc::new(state),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> RestoreState {
        self.state.borrow().clone()
    }

    /// Observe state transitions
    pub fn subscribe(&self) -> watch::Receiver<RestoreState> {
        self.state.subscribe()
    }

    /// The restored book, `None` until resolution lands on a stored book
    pub fn initial_book(&self) -> Option<CurrentBook> {
        self.state.borrow().initial_book().cloned()
    }

    /// Move to `Loading` and hand back the restoration future.
    ///
    /// Only the first call gets a future; every later call returns `None`.
    /// The future publishes the terminal state when it completes.
    pub fn begin_restore(&self) -> Option<impl Future<Output = RestoreState> + Send + 'static> {
        let started = self.state.send_if_modified(|state| {
            if matches!(state, RestoreState::Uninitialized) {
                *state = RestoreState::Loading;
                true
            } else {
                false
            }
        });

        if !started {
            debug!("restoration already started");
            return None;
        }

        debug!(location = %self.store.location(), "restoring last added book");
        let store = Arc::clone(&self.store);
        let state = Arc::clone(&self.state);

        Some(async move {
            let outcome = restore(store.as_ref()).await;
            state.send_replace(outcome.clone());
            outcome
        })
    }

    /// Wait for the terminal state.
    ///
    /// Never completes if nobody calls [`begin_restore`](Self::begin_restore).
    pub async fn resolved(&self) -> RestoreState {
        let mut rx = self.subscribe();
        let resolved = match rx.wait_for(RestoreState::is_terminal).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        resolved
    }
}

async fn restore<S: BookStore>(store: &S) -> RestoreState {
    match store::load_book(store).await {
        Ok(Some(record)) => {
            info!(
                id = %record.book.id,
                title = %record.book.title,
                schema_version = record.schema_version,
                saved_at = ?record.saved_at,
                "restored last added book"
            );
            RestoreState::Resolved(Some(record.book))
        }
        Ok(None) => {
            debug!("no book stored yet");
            RestoreState::Resolved(None)
        }
        Err(err) => {
            warn!(kind = err.kind(), error = %err, "could not restore last added book");
            RestoreState::Failed(Arc::new(err))
        }
    }
}
