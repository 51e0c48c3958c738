//! Wire shapes of the portal endpoints.

mod envelope;
pub mod update;
pub mod user_info;
pub mod user_options;
pub mod user_phones;
pub mod user_queues;

pub use envelope::{error_text, Acknowledged, ApiResult, UNKNOWN_ERROR};
