//! Listing controller — owns the filter state of one board and the visible subset.
//!
//! Every mutation calls `recompute` before returning, so `visible()` always reflects the
//! current filters and search.

use std::sync::Arc;

use tracing::debug;

use crate::board::filter::FilterState;
use crate::models::job::JobListing;

#[derive(Debug, Clone)]
pub struct ListingController {
    all: Arc<[JobListing]>,
    state: FilterState,
    visible: Arc<[JobListing]>,
}

impl ListingController {
    /// Starts with no filters; the visible set is the full set.
    pub fn new(all: Arc<[JobListing]>) -> Self {
        Self {
            visible: Arc::clone(&all),
            all,
            state: FilterState::new(),
        }
    }

    /// Adds a filter. Clicking an already-active filter changes nothing.
    pub fn add_filter(&mut self, name: &str) {
        if self.state.insert_filter(name) {
            self.recompute();
        }
    }

    pub fn remove_filter(&mut self, name: &str) {
        if self.state.remove_filter(name) {
            self.recompute();
        }
    }

    pub fn set_search(&mut self, text: &str) {
        self.state.set_search(text);
        self.recompute();
    }

    pub fn clear_all(&mut self) {
        self.state.clear();
        self.recompute();
    }

    /// Rebuilds the visible set as a stable filter of the full set.
    ///
    /// With nothing active the full set handle itself is shared.
    pub fn recompute(&mut self) {
        if self.state.is_empty() {
            self.visible = Arc::clone(&self.all);
        } else {
            self.visible = self
                .all
                .iter()
                .filter(|listing| self.state.matches(listing))
                .cloned()
                .collect();
        }
        debug!(
            filters = self.state.filter_count(),
            search = %self.state.search(),
            total = self.all.len(),
            visible = self.visible.len(),
            "Recomputed visible listings"
        );
    }

    pub fn visible(&self) -> &Arc<[JobListing]> {
        &self.visible
    }

    pub fn all(&self) -> &Arc<[JobListing]> {
        &self.all
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Mirrors the "Clear Filters" button: enabled only when something is active.
    pub fn can_clear(&self) -> bool {
        !self.state.is_empty()
    }
}
