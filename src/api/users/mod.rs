pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use service::UserService;
