pub mod catalog;
pub mod credentials;
pub mod endpoints;
pub mod feedback;
pub mod http;
