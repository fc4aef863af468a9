use serde::{Deserialize, Serialize};

use super::filter::{filter_jobs, ListingFilter, SearchFilter};
use super::paginate::{clamp_page, paginate, Page};
use crate::models::{Job, JOB_CATEGORIES, JOB_LOCATIONS};

fn first_page() -> usize {
    1
}

/// Everything a listing render depends on besides the jobs themselves.
///
/// A value is never mutated in place: every user action produces the next
/// state through [`ListingState::reduce`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingState {
    #[serde(default)]
    pub filter: ListingFilter,
    #[serde(default = "first_page")]
    pub page: usize,
    /// Set once a search was submitted from the search bar
    #[serde(default)]
    pub searched: bool,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            filter: ListingFilter::default(),
            page: first_page(),
            searched: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ListingAction {
    Search(SearchFilter),
    ClearSearchTitle,
    ClearSearchLocation,
    ToggleCategory(String),
    ToggleLocation(String),
    ClearAllFilters,
    GoToPage(usize),
    NextPage,
    PreviousPage,
    /// The shared job list was replaced
    JobsReloaded,
}

impl ListingState {
    /// Next state after `action`.
    ///
    /// `filtered_count` is the size of the result under the current filter;
    /// page actions are clamped against it. Any change to the filter or the
    /// job list sends the listing back to page 1.
    pub fn reduce(&self, action: ListingAction, filtered_count: usize) -> ListingState {
        let mut next = self.clone();
        match action {
            ListingAction::Search(search) => {
                next.filter.search = search;
                next.searched = true;
                next.page = 1;
            }
            ListingAction::ClearSearchTitle => {
                next.filter.search.title.clear();
                next.page = 1;
            }
            ListingAction::ClearSearchLocation => {
                next.filter.search.location.clear();
                next.page = 1;
            }
            ListingAction::ToggleCategory(category) => {
                toggle(&mut next.filter.categories, category);
                next.page = 1;
            }
            ListingAction::ToggleLocation(location) => {
                toggle(&mut next.filter.locations, location);
                next.page = 1;
            }
            ListingAction::ClearAllFilters => {
                next.filter = ListingFilter::default();
                next.page = 1;
            }
            ListingAction::JobsReloaded => next.page = 1,
            ListingAction::GoToPage(page) => next.page = clamp_page(page, filtered_count),
            ListingAction::NextPage => {
                next.page = clamp_page(self.page.saturating_add(1), filtered_count)
            }
            ListingAction::PreviousPage => {
                next.page = clamp_page(self.page.saturating_sub(1), filtered_count)
            }
        }
        next
    }

    /// The "Current Search" panel only shows after a submitted, non-empty search
    pub fn shows_current_search(&self) -> bool {
        self.searched && self.filter.search.is_active()
    }
}

fn toggle(set: &mut std::collections::BTreeSet<String>, value: String) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// A checkbox in the category or location facet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub selected: bool,
}

fn facet(options: &[&str], selected: &std::collections::BTreeSet<String>) -> Vec<FacetOption> {
    options
        .iter()
        .map(|option| FacetOption {
            value: option.to_string(),
            selected: selected.contains(*option),
        })
        .collect()
}

/// What a listing render shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    /// The state the view was derived from, with the page clamped
    pub state: ListingState,
    pub page: Page<Job>,
    /// Nothing matched; the "no jobs found" state with a clear-all control
    pub empty: bool,
    pub show_current_search: bool,
    pub categories: Vec<FacetOption>,
    pub locations: Vec<FacetOption>,
}

/// Derive the visible page for `state` over `jobs`.
///
/// Called after every state change; pure and synchronous.
pub fn derive_visible_page(state: &ListingState, jobs: &[Job]) -> ListingView {
    let filtered: Vec<Job> = filter_jobs(jobs, &state.filter)
        .into_iter()
        .cloned()
        .collect();
    let page = paginate(filtered, state.page);

    ListingView {
        state: ListingState {
            page: page.page,
            ..state.clone()
        },
        empty: page.total_items == 0,
        show_current_search: state.shows_current_search(),
        categories: facet(&JOB_CATEGORIES, &state.filter.categories),
        locations: facet(&JOB_LOCATIONS, &state.filter.locations),
        page,
    }
}
