pub mod company;
pub mod error;
pub mod health;
pub mod jobs;
pub mod listing;
pub mod session;
pub mod state;
pub mod users;
pub mod validation;
