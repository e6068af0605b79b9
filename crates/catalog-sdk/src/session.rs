//! Per-listing filter session
//!
//! Checkbox toggles apply immediately. Slider drags are held per param until
//! the drag has been quiet for the debounce interval, so a fast drag issues
//! one query instead of dozens. Time is passed in by the caller.

use crate::filter_state::FilterState;
use catalog_core::FilterDefinition;
use catalog_parser::RangeToken;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// A slider position that has not been committed yet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingRange {
    pub range: RangeToken,
    pub last_moved: Instant,
}

/// Filter state of one listing plus its uncommitted slider drags
#[derive(Debug, Clone)]
pub struct FilterSession {
    state: FilterState,
    definitions: Vec<FilterDefinition>,
    pending: HashMap<String, PendingRange>,
    debounce: Duration,
}

impl FilterSession {
    pub fn new(state: FilterState, definitions: Vec<FilterDefinition>, debounce: Duration) -> Self {
        Self {
            state,
            definitions,
            pending: HashMap::new(),
            debounce,
        }
    }

    /// Committed state
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn definitions(&self) -> &[FilterDefinition] {
        &self.definitions
    }

    /// Toggle a checkbox option; returns whether it is now selected
    pub fn toggle_option(&mut self, param: &str, token: &str) -> bool {
        let selected = self.state.toggle_token(param, token);
        self.state.page = None;
        selected
    }

    /// Record a slider position; committed by [`flush_due`](Self::flush_due)
    pub fn drag_slider(&mut self, param: &str, range: RangeToken, now: Instant) {
        self.pending.insert(
            param.to_string(),
            PendingRange {
                range,
                last_moved: now,
            },
        );
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Earliest instant at which a pending drag settles
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
            .values()
            .map(|p| p.last_moved + self.debounce)
            .min()
    }

    /// Commit every drag quiet for at least the debounce interval
    ///
    /// Returns true when the committed state changed.
    pub fn flush_due(&mut self, now: Instant) -> bool {
        let debounce = self.debounce;
        let due: Vec<(String, RangeToken)> = self
            .pending
            .iter()
            .filter(|(_, p)| now.saturating_duration_since(p.last_moved) >= debounce)
            .map(|(param, p)| (param.clone(), p.range))
            .collect();

        let mut changed = false;
        for (param, range) in due {
            self.pending.remove(&param);
            changed |= self.commit_range(&param, range);
        }
        changed
    }

    /// Commit every pending drag regardless of age
    pub fn flush_all(&mut self) -> bool {
        let pending: Vec<(String, PendingRange)> = self.pending.drain().collect();
        let mut changed = false;
        for (param, p) in pending {
            changed |= self.commit_range(&param, p.range);
        }
        changed
    }

    /// Query string of the committed state
    pub fn query_string(&self) -> String {
        self.state.to_query_string()
    }

    fn commit_range(&mut self, param: &str, range: RangeToken) -> bool {
        // Dragging back to the full bounds removes the filter.
        let full = self
            .definitions
            .iter()
            .find(|d| d.param == param)
            .and_then(|d| d.range)
            .is_some_and(|[min, max]| range == RangeToken::closed(min, max));
        let range = if full { RangeToken::default() } else { range };

        let before = self.state.parameters.get(param).cloned();
        self.state.set_range(param, range);
        let changed = self.state.parameters.get(param) != before.as_ref();
        if changed {
            self.state.page = None;
            tracing::debug!("Committed slider '{}' = '{}'", param, range);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> FilterSession {
        FilterSession::new(
            FilterState::for_categories(vec!["cis"]),
            vec![FilterDefinition::slider("Line Rate", "line_rate", 0.0, 200.0)],
            Duration::from_millis(300),
        )
    }

    #[test]
    fn test_drag_is_debounced() {
        let mut session = session();
        let t0 = Instant::now();

        session.drag_slider("line_rate", RangeToken::closed(10.0, 100.0), t0);
        session.drag_slider(
            "line_rate",
            RangeToken::closed(20.0, 100.0),
            t0 + Duration::from_millis(100),
        );

        assert!(!session.flush_due(t0 + Duration::from_millis(300)));
        assert!(session.has_pending());
        assert_eq!(
            session.next_deadline(),
            Some(t0 + Duration::from_millis(400))
        );

        assert!(session.flush_due(t0 + Duration::from_millis(400)));
        assert!(!session.has_pending());
        assert!(session.query_string().ends_with("line_rate=20-100"));
    }

    #[test]
    fn test_full_bounds_clears_filter() {
        let mut session = session();
        session.drag_slider("line_rate", RangeToken::closed(10.0, 100.0), Instant::now());
        assert!(session.flush_all());
        session.drag_slider("line_rate", RangeToken::closed(0.0, 200.0), Instant::now());
        assert!(session.flush_all());
        assert!(!session.state().parameters.contains_key("line_rate"));
    }

    #[test]
    fn test_toggle_resets_page() {
        let mut session = session();
        let mut state = session.state().clone();
        state.page = Some(4);
        session = FilterSession::new(state, Vec::new(), Duration::ZERO);

        assert!(session.toggle_option("dpi", "4800"));
        assert_eq!(session.state().page, None);
        assert_eq!(session.query_string(), "category=cis&dpi=4800");
    }
}
