//! Tab container hosting the Player and Add Book screens.
//!
//! Mounting starts restoration and returns immediately. The Player screen's
//! `initial_book` is captured the first time the Player route renders and is
//! never re-delivered: a resolution or intake that lands afterwards does not
//! reach an already rendered Player.

pub mod chrome;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::book::CurrentBook;
use crate::continuity::{ContinuityController, RestoreState};
use crate::store::BookStore;

pub use chrome::{Chrome, Header, SystemLinkOpener, TabItem, DEFAULT_REPOSITORY_URL};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    #[default]
    Player,
    AddBook,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Player, Route::AddBook];

    /// Route name as registered with the navigator
    pub fn name(self) -> &'static str {
        match self {
            Route::Player => "Player",
            Route::AddBook => "AddBook",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Player => "Player",
            Route::AddBook => "Add Book",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Route::Player => "headset",
            Route::AddBook => "add-circle-outline",
        }
    }
}

/// Initialization parameters for the Player screen.
///
/// Advisory seed state only; the player must not treat it as live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerParams {
    pub initial_book: Option<CurrentBook>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "kebab-case")]
pub enum Screen {
    Player(PlayerParams),
    AddBook,
}

/// One rendered frame of the shell
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub header: Header,
    pub tabs: Vec<TabItem>,
    pub active: Route,
    pub body: Screen,
    /// Restoration state at render time, diagnostics only
    pub restore_state: String,
}

pub struct NavigationShell<S> {
    controller: Arc<ContinuityController<S>>,
    chrome: Chrome,
    active: Route,
    player_params: Option<PlayerParams>,
    restoration: Option<JoinHandle<RestoreState>>,
}

impl<S: BookStore> NavigationShell<S> {
    /// Mount the shell and kick off restoration on the runtime.
    ///
    /// Must be called from within a tokio runtime. Does not wait for the
    /// store.
    pub fn mount(controller: Arc<ContinuityController<S>>, chrome: Chrome, initial: Route) -> Self {
        let restoration = controller.begin_restore().map(tokio::spawn);
        debug!(route = initial.name(), "navigation shell mounted");

        Self {
            controller,
            chrome,
            active: initial,
            player_params: None,
            restoration,
        }
    }

    pub fn navigate(&mut self, route: Route) {
        debug!(from = self.active.name(), to = route.name(), "navigate");
        self.active = route;
    }

    /// Params delivered to the Player, `None` if it has not rendered yet
    #[cfg(test)]
    pub fn player_params(&self) -> Option<&PlayerParams> {
        self.player_params.as_ref()
    }

    pub fn controller(&self) -> &ContinuityController<S> {
        &self.controller
    }

    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    pub fn render(&mut self) -> Frame {
        let body = match self.active {
            Route::Player => Screen::Player(self.deliver_player_params().clone()),
            Route::AddBook => Screen::AddBook,
        };

        Frame {
            header: self.chrome.header(),
            tabs: Route::ALL
                .iter()
                .map(|&route| self.chrome.tab_item(route, route == self.active))
                .collect(),
            active: self.active,
            body,
            restore_state: self.controller.state().to_string(),
        }
    }

    /// Wait until restoration reaches a terminal state
    pub async fn settle(&mut self) -> RestoreState {
        match self.restoration.take() {
            Some(handle) => match handle.await {
                Ok(state) => state,
                Err(e) => {
                    error!(error = %e, "restoration task did not complete");
                    self.controller.state()
                }
            },
            None => self.controller.resolved().await,
        }
    }

    fn deliver_player_params(&mut self) -> &PlayerParams {
        let controller = &self.controller;
        self.player_params.get_or_insert_with(|| {
            let initial_book = controller.initial_book();
            debug!(
                state = controller.state().label(),
                book = initial_book.as_ref().map(|b| b.id.as_str()),
                "delivering player params"
            );
            PlayerParams { initial_book }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{save_book, MemoryBookStore};
    use std::time::Duration;

    fn shell_over(store: &Arc<MemoryBookStore>, initial: Route) -> NavigationShell<MemoryBookStore> {
        let controller = Arc::new(ContinuityController::new(Arc::clone(store)));
        NavigationShell::mount(controller, Chrome::default(), initial)
    }

    fn player_book(frame: &Frame) -> Option<&CurrentBook> {
        match &frame.body {
            Screen::Player(params) => params.initial_book.as_ref(),
            Screen::AddBook => panic!("player not active"),
        }
    }

    #[tokio::test]
    async fn test_stored_book_reaches_player_after_settle() {
        let store = Arc::new(MemoryBookStore::new());
        save_book(store.as_ref(), &CurrentBook::new("b1", "Dune"))
            .await
            .unwrap();

        let mut shell = shell_over(&store, Route::Player);
        let state = shell.settle().await;
        assert_eq!(state.label(), "resolved");

        let frame = shell.render();
        assert_eq!(player_book(&frame), Some(&CurrentBook::new("b1", "Dune")));
    }

    #[tokio::test]
    async fn test_render_does_not_wait_for_store() {
        let store = Arc::new(
            MemoryBookStore::with_record(r#"{"id":"b1","title":"Dune"}"#)
                .with_read_delay(Duration::from_millis(50)),
        );

        let mut shell = shell_over(&store, Route::Player);
        let frame = shell.render();

        assert_eq!(frame.restore_state, "loading");
        assert_eq!(player_book(&frame), None);
    }

    #[tokio::test]
    async fn test_player_params_are_delivered_once() {
        let store = Arc::new(
            MemoryBookStore::with_record(r#"{"id":"b1","title":"Dune"}"#)
                .with_read_delay(Duration::from_millis(20)),
        );

        let mut shell = shell_over(&store, Route::Player);
        shell.render();
        shell.settle().await;

        let frame = shell.render();
        assert_eq!(player_book(&frame), None);
        assert_eq!(frame.restore_state, "resolved (b1: Dune)");
    }

    #[tokio::test]
    async fn test_late_put_does_not_reach_rendered_player() {
        let store = Arc::new(MemoryBookStore::new());
        let mut shell = shell_over(&store, Route::Player);

        assert_eq!(player_book(&shell.render()), None);
        assert_eq!(shell.settle().await.label(), "empty");

        save_book(store.as_ref(), &CurrentBook::new("b2", "Hyperion"))
            .await
            .unwrap();

        shell.navigate(Route::AddBook);
        shell.navigate(Route::Player);
        assert_eq!(player_book(&shell.render()), None);
        assert_eq!(shell.player_params().unwrap().initial_book, None);
    }

    #[tokio::test]
    async fn test_corrupt_record_still_renders() {
        let store = Arc::new(MemoryBookStore::with_record("\u{0}garbage"));
        let mut shell = shell_over(&store, Route::Player);

        assert!(shell.settle().await.is_failed());

        let frame = shell.render();
        assert_eq!(player_book(&frame), None);
        assert!(frame.restore_state.starts_with("failed"));
    }

    #[tokio::test]
    async fn test_player_first_rendered_after_resolution_gets_book() {
        let store = Arc::new(MemoryBookStore::with_record(r#"{"id":"b1","title":"Dune"}"#));
        let mut shell = shell_over(&store, Route::AddBook);

        assert_eq!(shell.render().body, Screen::AddBook);
        assert!(shell.player_params().is_none());

        shell.settle().await;
        shell.navigate(Route::Player);

        let frame = shell.render();
        assert_eq!(player_book(&frame).map(|b| b.title.as_str()), Some("Dune"));
    }

    #[tokio::test]
    async fn test_tab_bar_focus() {
        let store = Arc::new(MemoryBookStore::new());
        let mut shell = shell_over(&store, Route::AddBook);

        let frame = shell.render();
        let focused: Vec<_> = frame.tabs.iter().filter(|t| t.focused).map(|t| t.route).collect();
        assert_eq!(focused, vec![Route::AddBook]);
        assert_eq!(frame.tabs[0].label, "Player");
        assert_eq!(frame.header.left_icon, "library");
    }

    #[tokio::test]
    async fn test_frame_json_uses_null_for_missing_book() {
        let store = Arc::new(MemoryBookStore::new());
        let mut shell = shell_over(&store, Route::Player);
        shell.settle().await;

        let json = serde_json::to_value(shell.render()).unwrap();
        assert_eq!(json["body"]["screen"], "player");
        assert!(json["body"]["initial_book"].is_null());
        assert_eq!(json["active"], "player");
    }

    #[test]
    fn test_route_metadata() {
        assert_eq!(Route::Player.icon(), "headset");
        assert_eq!(Route::AddBook.label(), "Add Book");
        assert_eq!(Route::AddBook.name(), "AddBook");
        assert_eq!(Route::default(), Route::Player);
    }
}
