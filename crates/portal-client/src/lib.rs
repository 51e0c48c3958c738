pub mod api_interfaces;
pub mod client;
pub mod constants;
pub mod error;
pub mod ids;
mod session;
mod util;
pub mod view;
pub mod widgets;

pub use client::{Client, Endpoints};
pub use session::Session;
pub use util::default_http_client;
