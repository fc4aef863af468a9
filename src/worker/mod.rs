pub mod job_refresher;

pub use job_refresher::JobRefresher;
