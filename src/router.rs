//! Router collaborator contract
//!
//! The navigation core consumes a router only through these primitives.
//! Navigation calls are fire-and-forget: the caller never observes completion.

use crate::types::{Location, LocationState, NavigateOptions, NavigationTarget};

pub trait Router {
    /// Path of the current history entry
    fn current_path(&self) -> String;

    /// Raw state payload of the current history entry
    fn current_state(&self) -> LocationState;

    /// Navigate to a path, optionally attaching state or replacing the entry
    fn navigate(&self, target: &str, options: NavigateOptions);

    /// Move through history relative to the current entry
    fn go(&self, delta: i32);

    fn location(&self) -> Location {
        Location::new(self.current_path(), self.current_state())
    }

    /// Dispatch a path-or-delta target with default options
    fn navigate_to(&self, target: &NavigationTarget) {
        match target {
            NavigationTarget::Path(path) => self.navigate(path, NavigateOptions::default()),
            NavigationTarget::Delta(delta) => self.go(*delta),
        }
    }
}
