//! Screen host
//!
//! Tracks which screens are mounted for the current path, the way a nested
//! route tree would. The root screen (`/`) is always mounted and runs the
//! landing marker when it mounts. Other screens are registered by path prefix
//! and mount parent-before-child when the path enters them; they keep their
//! captured return address until the path leaves them.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::landing::mark_landing;
use crate::resolver::{BackNavigation, ROOT_PATH};
use crate::router::Router;

/// A mounted screen and the return address it captured on mount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountedScreen {
    pub route: String,
    pub back_url: Option<String>,
}

pub struct ScreenHost {
    routes: Vec<String>,
    mounted: Vec<MountedScreen>,
}

impl ScreenHost {
    /// Create a host with nothing mounted. Routes are sorted so parents mount
    /// before their children.
    pub fn new(routes: Vec<String>) -> Self {
        Self::with_mounted(routes, Vec::new())
    }

    /// Restore a host with screens mounted earlier. Screens whose route is no
    /// longer registered are dropped.
    pub fn with_mounted(mut routes: Vec<String>, mut mounted: Vec<MountedScreen>) -> Self {
        routes.retain(|route| route != ROOT_PATH);
        routes.sort();
        routes.dedup();
        routes.sort_by_key(|route| route.matches('/').count());

        mounted.retain(|screen| {
            let known = screen.route == ROOT_PATH || routes.contains(&screen.route);
            if !known {
                debug!("dropping unregistered screen {}", screen.route);
            }
            known
        });

        Self { routes, mounted }
    }

    pub fn mounted(&self) -> &[MountedScreen] {
        &self.mounted
    }

    pub fn into_mounted(self) -> Vec<MountedScreen> {
        self.mounted
    }

    /// Mount the app from scratch, as on first load or reload: the landing
    /// marker stamps the current entry, then every matching screen mounts.
    pub fn mount_root<R: Router + ?Sized>(&mut self, router: &R) {
        self.mounted.clear();
        mark_landing(router);
        self.sync(router);
    }

    /// Reconcile mounted screens with the router's current path
    pub fn sync<R: Router + ?Sized>(&mut self, router: &R) {
        let path = router.current_path();

        self.mounted.retain(|screen| {
            let keep = route_matches(&screen.route, &path);
            if !keep {
                debug!("unmounting {}", screen.route);
            }
            keep
        });

        let matching = std::iter::once(ROOT_PATH).chain(
            self.routes
                .iter()
                .map(String::as_str)
                .filter(|route| route_matches(route, &path)),
        );

        for route in matching {
            if self.mounted.iter().any(|screen| screen.route == route) {
                continue;
            }
            let screen = BackNavigation::mount(router);
            self.mounted.push(MountedScreen {
                route: route.to_string(),
                back_url: screen.back_url().map(str::to_string),
            });
        }
    }

    /// Back navigation for the innermost mounted screen
    pub fn active_screen<'r, R: Router + ?Sized>(&self, router: &'r R) -> BackNavigation<'r, R> {
        match self.mounted.last() {
            Some(screen) => BackNavigation::with_snapshot(router, screen.back_url.clone()),
            None => BackNavigation::mount(router),
        }
    }
}

/// Whether a screen registered at `route` is mounted for `path`
pub fn route_matches(route: &str, path: &str) -> bool {
    if route == ROOT_PATH {
        return true;
    }
    path == route
        || path
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}

// =============================================================================
// Tests
// =============================================================================
