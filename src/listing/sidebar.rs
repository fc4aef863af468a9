use std::collections::HashSet;

use crate::models::Job;

/// Cards shown in the "more jobs from this company" sidebar
pub const MORE_JOBS_LIMIT: usize = 4;

/// Other openings from the company behind `current`.
///
/// Skips `current` itself and anything the user already applied to. Unlike
/// the main listing this keeps arrival order.
pub fn more_jobs_from_company<'a>(
    jobs: &'a [Job],
    current: &Job,
    applied_job_ids: &HashSet<&str>,
) -> Vec<&'a Job> {
    jobs.iter()
        .filter(|job| job.id != current.id && job.company_id() == current.company_id())
        .filter(|job| !applied_job_ids.contains(job.id.as_str()))
        .take(MORE_JOBS_LIMIT)
        .collect()
}
