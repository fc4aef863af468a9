pub mod application;
pub mod company;
pub mod job;
pub mod reference;
pub mod timestamp;
pub mod user;

// Re-export commonly used types
pub use application::{Application, ApplicationStatus, JobSummary};
pub use company::Company;
pub use job::{Job, JOB_CATEGORIES, JOB_LEVELS, JOB_LOCATIONS};
pub use reference::Ref;
pub use user::UserProfile;
