pub mod books;
pub mod errors;
pub mod feedback;
pub mod formatting;
pub mod query;
pub mod repositories;

// Re-exports
pub use books::Book;
pub use errors::FetchError;
pub use feedback::{BookFeedback, FeedbackItem, FeedbackSource};
