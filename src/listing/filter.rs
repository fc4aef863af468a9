use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::Job;

/// Free-text criteria typed into the search bar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
}

impl SearchFilter {
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.title.is_empty() || !self.location.is_empty()
    }
}

/// Every criterion a listing is narrowed by.
///
/// An empty set or an empty string places no restriction; the criteria are
/// combined with AND, so their order never matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilter {
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub locations: BTreeSet<String>,
    #[serde(default)]
    pub search: SearchFilter,
}

impl ListingFilter {
    pub fn matches(&self, job: &Job) -> bool {
        (self.categories.is_empty() || self.categories.contains(&job.category))
            && (self.locations.is_empty() || self.locations.contains(&job.location))
            && contains_ignore_case(&job.title, &self.search.title)
            && contains_ignore_case(&job.location, &self.search.location)
    }
}

/// Plain substring containment, no tokenization.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Newest-first view of `jobs` narrowed by `filter`.
///
/// `jobs` is in arrival order; the result is reversed so the most recently
/// posted job comes first. The input is never modified.
pub fn filter_jobs<'a>(jobs: &'a [Job], filter: &ListingFilter) -> Vec<&'a Job> {
    jobs.iter().rev().filter(|job| filter.matches(job)).collect()
}
