//! Landing route marker
//!
//! Stamps the entry a session starts on, so a later "back" from that entry
//! goes to the app root instead of leaving the app. Mount it once at the
//! root route; a reload remounts it and re-stamps whatever entry is current.

use log::debug;

use crate::router::Router;
use crate::state::landing_route_state;
use crate::types::NavigateOptions;

/// Replace the current entry's state with the landing flag. Same path, no new
/// entry, any previous state on the entry is discarded.
pub fn mark_landing<R: Router + ?Sized>(router: &R) {
    let path = router.current_path();
    debug!("marking {} as landing route", path);
    router.navigate(&path, NavigateOptions::replace_with(landing_route_state()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::state::is_landing_route;
    use serde_json::json;

    #[test]
    fn mark_landing_sets_flag_without_new_entry() {
        let history = MemoryHistory::new("/modal/page2");
        mark_landing(&history);

        assert!(is_landing_route(&history.location()));
        assert_eq!(history.current_state(), json!({"landingRoute": true}));
        assert_eq!(history.current_path(), "/modal/page2");
        assert_eq!(history.entry_count(), 1);
    }

    #[test]
    fn mark_landing_overwrites_prior_state() {
        let history = MemoryHistory::new("/");
        history.navigate("/modal", NavigateOptions::with_state(json!({"backUrl": "/"})));

        mark_landing(&history);

        assert_eq!(history.current_state(), json!({"landingRoute": true}));
        assert_eq!(history.entry_count(), 2);
    }

    #[test]
    fn mark_landing_is_idempotent() {
        let history = MemoryHistory::new("/");
        mark_landing(&history);
        mark_landing(&history);
        assert_eq!(history.entry_count(), 1);
        assert!(is_landing_route(&history.location()));
    }
}
