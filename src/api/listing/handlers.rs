use actix_web::{
    get, post,
    web::{scope, Data, ServiceConfig},
    HttpResponse, Responder,
};
use actix_web_validator::{Json, Query};
use tracing::debug;

use super::models::{DispatchRequest, DispatchResponse, FacetsResponse, ListingQuery};
use crate::board::JobBoard;
use crate::listing::{derive_visible_page, filter_jobs};
use crate::models::{JOB_CATEGORIES, JOB_LEVELS, JOB_LOCATIONS};

/// One rendered listing page for the filters in the query string
#[get("")]
async fn listing_page(board: Data<JobBoard>, query: Query<ListingQuery>) -> impl Responder {
    let state = query.into_inner().into_state();
    let jobs = board.jobs().await;
    let view = derive_visible_page(&state, &jobs);
    debug!(
        "Listing page {}/{} ({} matches)",
        view.page.page, view.page.total_pages, view.page.total_items
    );
    HttpResponse::Ok().json(view)
}

/// Apply one user action to a listing state and return the next render
#[post("/dispatch")]
async fn dispatch(board: Data<JobBoard>, request: Json<DispatchRequest>) -> impl Responder {
    let DispatchRequest { state, action } = request.into_inner();
    let jobs = board.jobs().await;

    let filtered_count = filter_jobs(&jobs, &state.filter).len();
    let next = state.reduce(action, filtered_count);
    let view = derive_visible_page(&next, &jobs);

    HttpResponse::Ok().json(DispatchResponse {
        state: view.state.clone(),
        view,
    })
}

#[get("/facets")]
async fn facets() -> impl Responder {
    HttpResponse::Ok().json(FacetsResponse {
        categories: JOB_CATEGORIES.to_vec(),
        locations: JOB_LOCATIONS.to_vec(),
        levels: JOB_LEVELS.to_vec(),
    })
}

pub fn listing_config(config: &mut ServiceConfig) {
    config.service(
        scope("listing")
            .service(facets)
            .service(dispatch)
            .service(listing_page),
    );
}
