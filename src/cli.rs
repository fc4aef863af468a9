use std::fmt::Write;

use clap::{Args, Parser, Subcommand};

use crate::backend::{BackendError, JobBoardApi};
use crate::listing::{derive_visible_page, ListingFilter, ListingState, ListingView, SearchFilter};

#[derive(Parser)]
#[command(name = "job-board", version, about = "Job board listing service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP service (default)
    Serve,
    /// Fetch the job list once and print one listing page
    Browse(BrowseArgs),
}

#[derive(Args, Debug, Default)]
pub struct BrowseArgs {
    /// Case-insensitive title search
    #[arg(long, default_value = "")]
    pub title: String,
    /// Case-insensitive location search
    #[arg(long, default_value = "")]
    pub location: String,
    /// Category facet, repeatable
    #[arg(long = "category")]
    pub categories: Vec<String>,
    /// Location facet, repeatable
    #[arg(long = "location-facet")]
    pub locations: Vec<String>,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl BrowseArgs {
    pub fn listing_state(&self) -> ListingState {
        let search = SearchFilter::new(self.title.clone(), self.location.clone());
        ListingState {
            searched: search.is_active(),
            filter: ListingFilter {
                categories: self.categories.iter().cloned().collect(),
                locations: self.locations.iter().cloned().collect(),
                search,
            },
            page: self.page,
        }
    }
}

/// Plain-text rendering of a listing page
pub fn render(view: &ListingView) -> String {
    let mut out = String::new();
    if view.empty {
        out.push_str("No jobs found\n");
        return out;
    }

    for job in &view.page.items {
        let _ = writeln!(
            out,
            "{:<28} {:<14} {:<12} {:>9}  [{}]",
            job.title, job.category, job.location, job.salary, job.id
        );
    }
    let _ = writeln!(
        out,
        "Showing {}-{} of {} jobs (page {}/{})",
        view.page.range_start,
        view.page.range_end,
        view.page.total_items,
        view.page.page,
        view.page.total_pages
    );
    out
}

pub async fn browse(backend: &dyn JobBoardApi, args: &BrowseArgs) -> Result<String, BackendError> {
    let jobs = backend.list_jobs().await?;
    let view = derive_visible_page(&args.listing_state(), &jobs);
    Ok(render(&view))
}
