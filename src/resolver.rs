//! Back navigation for a single screen
//!
//! A screen captures its return address once, when it mounts, and keeps it
//! for its whole lifetime. Asking it to go back picks exactly one action at
//! call time, in priority order:
//!
//! 1. the captured return address, as an absolute navigation;
//! 2. the app root, when the current entry is the session's landing route
//!    (stepping back in history would leave the app);
//! 3. one step back in history.
//!
//! # Example
//! ```
//! use backnav::{BackNavigation, BackResolution, MemoryHistory, Router};
//!
//! let history = MemoryHistory::new("/");
//! let home = BackNavigation::mount(&history);
//! home.navigate_with_back_url("/modal/page1");
//!
//! let modal = BackNavigation::mount(&history);
//! assert_eq!(modal.back_url(), Some("/"));
//! assert_eq!(modal.resolve_back(), BackResolution::ExplicitReturn("/".to_string()));
//!
//! modal.on_back();
//! assert_eq!(history.current_path(), "/");
//! ```

use log::debug;
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::router::Router;
use crate::state::{build_return_state, extract_back_url, is_landing_route};
use crate::types::{LocationState, NavigateOptions, NavigationTarget};

/// Path used when back navigation falls back to the app root
pub const ROOT_PATH: &str = "/";

// =============================================================================
// Back Resolution
// =============================================================================

/// How "back" navigates from the current screen. Computed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum BackResolution {
    ExplicitReturn(String),
    ToRoot,
    HistoryRelative(i32),
}

impl BackResolution {
    pub fn target(&self) -> NavigationTarget {
        match self {
            BackResolution::ExplicitReturn(path) => NavigationTarget::Path(path.clone()),
            BackResolution::ToRoot => NavigationTarget::Path(ROOT_PATH.to_string()),
            BackResolution::HistoryRelative(delta) => NavigationTarget::Delta(*delta),
        }
    }

    pub fn apply<R: Router + ?Sized>(&self, router: &R) {
        router.navigate_to(&self.target());
    }
}

// =============================================================================
// Back Navigation
// =============================================================================

/// Per-screen back navigation handle
pub struct BackNavigation<'r, R: Router + ?Sized> {
    router: &'r R,
    back_url: OnceCell<Option<String>>,
}

impl<'r, R: Router + ?Sized> BackNavigation<'r, R> {
    /// Mount a screen on the router's current entry, capturing its return
    /// address from the entry's state
    pub fn mount(router: &'r R) -> Self {
        let screen = Self {
            router,
            back_url: OnceCell::new(),
        };
        screen.capture_back_url();
        screen
    }

    /// Rebuild a mounted screen from a return address captured earlier
    pub fn with_snapshot(router: &'r R, back_url: Option<String>) -> Self {
        Self {
            router,
            back_url: OnceCell::with_value(back_url),
        }
    }

    fn capture_back_url(&self) -> &Option<String> {
        self.back_url.get_or_init(|| {
            let back_url = extract_back_url(&self.router.current_state());
            debug!(
                "screen mounted on {} with back url {:?}",
                self.router.current_path(),
                back_url
            );
            back_url
        })
    }

    /// The return address captured at mount
    pub fn back_url(&self) -> Option<&str> {
        self.capture_back_url().as_deref()
    }

    /// Decide how back navigates right now
    pub fn resolve_back(&self) -> BackResolution {
        if let Some(back_url) = self.back_url() {
            return BackResolution::ExplicitReturn(back_url.to_string());
        }

        if is_landing_route(&self.router.location()) {
            return BackResolution::ToRoot;
        }

        BackResolution::HistoryRelative(-1)
    }

    /// Resolve and dispatch back navigation
    pub fn on_back(&self) -> BackResolution {
        let resolution = self.resolve_back();
        debug!("back from {}: {:?}", self.router.current_path(), resolution);
        resolution.apply(self.router);
        resolution
    }

    /// State to attach to an outgoing navigation so its destination can
    /// return to the current path
    pub fn create_back_url_state(&self) -> LocationState {
        build_return_state(&self.router.current_path())
    }

    /// Navigate forward to `path`, carrying the current path as return address
    pub fn navigate_with_back_url(&self, path: &str) {
        self.router
            .navigate(path, NavigateOptions::with_state(self.create_back_url_state()));
    }

    /// Navigate to the parent of the current path, ignoring history and any
    /// return address
    pub fn navigate_up_one_path(&self) -> String {
        let target = parent_path(&self.router.current_path());
        self.router.navigate(&target, NavigateOptions::default());
        target
    }
}

/// Drop the last `/`-delimited segment. An empty result becomes `/`.
pub fn parent_path(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => ROOT_PATH.to_string(),
        Some(index) => path[..index].to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::landing::mark_landing;
    use proptest::prelude::*;
    use serde_json::json;

    fn history_with_state(path: &str, state: LocationState) -> MemoryHistory {
        let history = MemoryHistory::new(path);
        history.navigate(path, NavigateOptions::replace_with(state));
        history
    }

    #[test]
    fn explicit_return_wins_over_landing_flag() {
        let history = history_with_state("/modal", json!({"backUrl": "/home"}));
        let screen = BackNavigation::mount(&history);
        mark_landing(&history);

        assert!(is_landing_route(&history.location()));
        assert_eq!(
            screen.resolve_back(),
            BackResolution::ExplicitReturn("/home".to_string())
        );
    }

    #[test]
    fn landing_route_resolves_to_root() {
        let history = MemoryHistory::new("/modal/page2");
        mark_landing(&history);
        let screen = BackNavigation::mount(&history);

        assert_eq!(screen.back_url(), None);
        assert_eq!(screen.resolve_back(), BackResolution::ToRoot);

        screen.on_back();
        assert_eq!(history.current_path(), "/");
        assert_eq!(history.entry_count(), 2);
    }

    #[test]
    fn plain_entry_resolves_to_history_step() {
        let history = MemoryHistory::new("/");
        history.navigate("/modal", NavigateOptions::default());
        let screen = BackNavigation::mount(&history);

        assert_eq!(screen.resolve_back(), BackResolution::HistoryRelative(-1));

        screen.on_back();
        assert_eq!(history.current_path(), "/");
        assert_eq!(history.index(), 0);
    }

    #[test]
    fn landing_flag_false_is_not_landing() {
        let history = history_with_state("/x", json!({"landingRoute": false}));
        let screen = BackNavigation::mount(&history);
        assert_eq!(screen.resolve_back(), BackResolution::HistoryRelative(-1));
    }

    #[test]
    fn malformed_back_url_is_ignored() {
        let history = history_with_state("/x", json!({"backUrl": 12}));
        let screen = BackNavigation::mount(&history);
        assert_eq!(screen.back_url(), None);
    }

    #[test]
    fn snapshot_is_frozen_for_screen_lifetime() {
        let history = MemoryHistory::new("/");
        history.navigate("/modal", NavigateOptions::with_state(json!({"backUrl": "/"})));
        let modal = BackNavigation::mount(&history);

        history.navigate("page1", NavigateOptions::default());
        history.navigate("/modal/page2", NavigateOptions::with_state(json!({"backUrl": "/other"})));

        assert_eq!(modal.back_url(), Some("/"));
        assert_eq!(modal.resolve_back(), BackResolution::ExplicitReturn("/".to_string()));
    }

    #[test]
    fn landing_flag_is_read_at_call_time() {
        let history = MemoryHistory::new("/a");
        let screen = BackNavigation::mount(&history);
        assert_eq!(screen.resolve_back(), BackResolution::HistoryRelative(-1));

        mark_landing(&history);
        assert_eq!(screen.resolve_back(), BackResolution::ToRoot);
    }

    #[test]
    fn with_snapshot_restores_captured_value() {
        let history = history_with_state("/modal", json!({"backUrl": "/ignored"}));
        let screen = BackNavigation::with_snapshot(&history, Some("/saved".to_string()));
        assert_eq!(screen.back_url(), Some("/saved"));

        let screen = BackNavigation::with_snapshot(&history, None);
        assert_eq!(screen.back_url(), None);
    }

    #[test]
    fn create_back_url_state_uses_current_path() {
        let history = MemoryHistory::new("/");
        let screen = BackNavigation::mount(&history);
        assert_eq!(screen.create_back_url_state(), json!({"backUrl": "/"}));

        history.navigate("/settings", NavigateOptions::default());
        assert_eq!(screen.create_back_url_state(), json!({"backUrl": "/settings"}));
    }

    #[test]
    fn navigate_with_back_url_pushes_return_state() {
        let history = MemoryHistory::new("/profile/7");
        let screen = BackNavigation::mount(&history);
        screen.navigate_with_back_url("/settings");

        assert_eq!(history.entry_count(), 2);
        assert_eq!(history.current_path(), "/settings");
        assert_eq!(history.current_state(), json!({"backUrl": "/profile/7"}));
    }

    #[test]
    fn navigate_up_one_path_ignores_back_state() {
        let history = history_with_state(
            "/modal/page1",
            json!({"backUrl": "/elsewhere", "landingRoute": true}),
        );
        let screen = BackNavigation::mount(&history);
        assert_eq!(screen.back_url(), Some("/elsewhere"));

        assert_eq!(screen.navigate_up_one_path(), "/modal");
        assert_eq!(history.current_path(), "/modal");
        assert_eq!(history.current_state(), LocationState::Null);

        assert_eq!(screen.navigate_up_one_path(), "/");
        assert_eq!(history.current_path(), "/");
    }

    #[test]
    fn parent_path_trims_last_segment() {
        assert_eq!(parent_path("/modal/page1"), "/modal");
        assert_eq!(parent_path("/a/b/c"), "/a/b");
        assert_eq!(parent_path("/modal/"), "/modal");
    }

    #[test]
    fn parent_path_of_top_level_is_root() {
        assert_eq!(parent_path("/modal"), "/");
        assert_eq!(parent_path("/"), "/");
        assert_eq!(parent_path(""), "/");
    }

    #[test]
    fn resolution_serializes_tagged() {
        assert_eq!(
            serde_json::to_value(BackResolution::ExplicitReturn("/".to_string())).unwrap(),
            json!({"action": "explicit_return", "target": "/"})
        );
        assert_eq!(
            serde_json::to_value(BackResolution::ToRoot).unwrap(),
            json!({"action": "to_root"})
        );
    }

    proptest! {
        #[test]
        fn parent_path_is_a_strict_prefix(segments in prop::collection::vec("[a-z0-9]{1,8}", 1..6)) {
            let path = format!("/{}", segments.join("/"));
            let parent = parent_path(&path);
            prop_assert!(parent.starts_with('/'));
            prop_assert!(path.starts_with(&parent));
            prop_assert!(parent.len() < path.len());
        }

        #[test]
        fn arbitrary_state_never_yields_landing_resolution_with_back_url(url in "/[a-z/]{0,12}", flag in any::<bool>()) {
            let history = history_with_state("/x", json!({"backUrl": url.clone(), "landingRoute": flag}));
            let screen = BackNavigation::mount(&history);
            prop_assert_eq!(screen.resolve_back(), BackResolution::ExplicitReturn(url));
        }
    }
}
