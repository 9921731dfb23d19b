//! Command plumbing: logging setup and offset pagination.

pub mod logging;
pub mod pagination;

pub use logging::{init_tracing, log_command_execution};
pub use pagination::{paginate_by_start, PageContext};
