use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::listing::{ListingAction, ListingFilter, ListingState, ListingView, SearchFilter};

fn split_list(raw: &Option<String>) -> BTreeSet<String> {
    raw.as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// `GET /listing` query string.
///
/// Facet selections are comma separated: `categories=Programming,Marketing`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListingQuery {
    #[serde(default)]
    #[validate(length(max = 100, message = "Title search is too long"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "Location search is too long"))]
    pub location: String,
    pub categories: Option<String>,
    pub locations: Option<String>,
    #[validate(range(min = 1, message = "Page numbers start at 1"))]
    pub page: Option<usize>,
}

impl ListingQuery {
    pub fn into_state(self) -> ListingState {
        let categories = split_list(&self.categories);
        let locations = split_list(&self.locations);
        let search = SearchFilter::new(self.title, self.location);
        ListingState {
            searched: search.is_active(),
            filter: ListingFilter {
                categories,
                locations,
                search,
            },
            page: self.page.unwrap_or(1),
        }
    }
}

fn validate_action(action: &ListingAction) -> Result<(), ValidationError> {
    match action {
        ListingAction::GoToPage(0) => Err(ValidationError::new("page")),
        _ => Ok(()),
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct DispatchRequest {
    #[serde(default)]
    pub state: ListingState,
    #[validate(custom(function = "validate_action", message = "Page numbers start at 1"))]
    pub action: ListingAction,
}

#[derive(Serialize)]
pub struct DispatchResponse {
    pub state: ListingState,
    pub view: ListingView,
}

#[derive(Serialize)]
pub struct FacetsResponse {
    pub categories: Vec<&'static str>,
    pub locations: Vec<&'static str>,
    pub levels: Vec<&'static str>,
}
