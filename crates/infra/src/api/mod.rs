//! Canto API client and response wrappers

pub mod client;
pub mod factory;
pub mod results;
pub mod schema;

pub use client::{CantoClient, SortOptions};
pub use factory::CantoClientFactory;
pub use results::{ListResult, PaginatedResult};
pub use schema::ImageDetail;
