//! Filter evaluation: tag filters (AND, exact, case-insensitive) combined with a
//! free-text search (substring over position OR company).

use indexmap::IndexSet;
use serde::Serialize;

use crate::models::job::JobListing;

/// Active filters plus the search text for one board.
///
/// Filters keep the case they were clicked with and the order they were added. Duplicate
/// detection is exact-string; matching against skills is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    filters: IndexSet<String>,
    search: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the filter was already present.
    pub fn insert_filter(&mut self, name: impl Into<String>) -> bool {
        self.filters.insert(name.into())
    }

    /// Returns `false` when the filter was not active.
    pub fn remove_filter(&mut self, name: &str) -> bool {
        self.filters.shift_remove(name)
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn clear(&mut self) {
        self.filters.clear();
        self.search.clear();
    }

    pub fn filters(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().map(String::as_str)
    }

    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// No filters and no search text.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.search.is_empty()
    }

    pub fn matches(&self, listing: &JobListing) -> bool {
        matches(listing, self.filters(), &self.search)
    }
}

/// Every filter must equal (case-insensitively) some skill name on the listing.
pub fn matches_filters<I, S>(listing: &JobListing, filters: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    filters.into_iter().all(|filter| {
        let filter = filter.as_ref().to_lowercase();
        listing
            .skills
            .iter()
            .any(|skill| skill.name.to_lowercase() == filter)
    })
}

/// Substring match of the search text against position or company name.
pub fn matches_search(listing: &JobListing, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    listing.position.to_lowercase().contains(&needle)
        || listing.company_name.to_lowercase().contains(&needle)
}

pub fn matches<I, S>(listing: &JobListing, filters: I, search: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    matches_filters(listing, filters) && matches_search(listing, search)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{Category, Skill};

    fn listing(position: &str, company: &str, skills: &[&str]) -> JobListing {
        JobListing {
            id: "1".to_string(),
            company_name: company.to_string(),
            company_logo: String::new(),
            position: position.to_string(),
            posted_at: "1d ago".to_string(),
            job_type: "Full Time".to_string(),
            location: "Remote".to_string(),
            is_new: false,
            is_featured: false,
            skills: skills
                .iter()
                .map(|name| Skill::new(*name, Category::Other))
                .collect(),
        }
    }

    const NONE: [&str; 0] = [];

    #[test]
    fn test_empty_filters_and_search_match_everything() {
        let job = listing("Dev", "Acme", &[]);
        assert!(matches(&job, NONE, ""));
    }

    #[test]
    fn test_all_filters_present_matches() {
        let job = listing("Dev", "Acme", &["React", "Node", "Senior"]);
        assert!(matches_filters(&job, ["React", "Node"]));
    }

    #[test]
    fn test_one_missing_filter_fails_and_semantics() {
        let job = listing("Dev", "Acme", &["React", "Node", "Senior"]);
        assert!(!matches_filters(&job, ["React", "Vue"]));
    }

    #[test]
    fn test_filter_match_is_case_insensitive() {
        let job = listing("Dev", "Acme", &["React"]);
        assert!(matches_filters(&job, ["REACT"]));
        assert!(matches_filters(&job, ["react"]));
    }

    #[test]
    fn test_filter_match_is_exact_not_substring() {
        let job = listing("Dev", "Acme", &["JavaScript"]);
        assert!(!matches_filters(&job, ["Java"]));
    }

    #[test]
    fn test_search_matches_position_regardless_of_company() {
        let job = listing("Frontend Developer", "Zeta", &[]);
        assert!(matches_search(&job, "front"));
    }

    #[test]
    fn test_search_matches_company_or_position() {
        let job = listing("Backend Engineer", "Beta", &[]);
        assert!(matches_search(&job, "BETA"));
        assert!(matches_search(&job, "engineer"));
        assert!(!matches_search(&job, "acme"));
    }

    #[test]
    fn test_search_does_not_look_at_skills() {
        let job = listing("Dev", "Acme", &["Python"]);
        assert!(!matches_search(&job, "python"));
    }

    #[test]
    fn test_overall_requires_both() {
        let job = listing("Backend Engineer", "Beta", &["Python"]);
        assert!(matches(&job, ["python"], "beta"));
        assert!(!matches(&job, ["React"], "beta"));
        assert!(!matches(&job, ["Python"], "acme"));
    }

    #[test]
    fn test_state_insert_is_idempotent() {
        let mut once = FilterState::new();
        once.insert_filter("React");

        let mut twice = FilterState::new();
        assert!(twice.insert_filter("React"));
        assert!(!twice.insert_filter("React"));

        assert_eq!(once, twice);
        assert_eq!(twice.filter_count(), 1);
    }

    #[test]
    fn test_state_keeps_clicked_case_and_order() {
        let mut state = FilterState::new();
        state.insert_filter("Python");
        state.insert_filter("react");
        state.insert_filter("CSS");
        state.remove_filter("react");
        assert_eq!(state.filters().collect::<Vec<_>>(), vec!["Python", "CSS"]);
    }

    #[test]
    fn test_state_remove_missing_is_noop() {
        let mut state = FilterState::new();
        state.insert_filter("Python");
        assert!(!state.remove_filter("python"));
        assert_eq!(state.filter_count(), 1);
    }

    #[test]
    fn test_state_clear_resets_everything() {
        let mut state = FilterState::new();
        state.insert_filter("Python");
        state.set_search("acme");
        assert!(!state.is_empty());
        state.clear();
        assert!(state.is_empty());
        assert_eq!(state.search(), "");
    }
}
