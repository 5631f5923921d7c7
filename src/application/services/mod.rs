pub mod books;
pub mod feedback;

pub use books::BookService;
pub use feedback::FeedbackService;
