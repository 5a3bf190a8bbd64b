mod api_interfaces;
pub mod constants;
pub mod endpoint;
pub mod error;
pub mod establishments;
pub mod prompt;
pub mod table;
mod util;

pub use endpoint::Endpoint;
pub use establishments::{Establishment, Establishments, StatusPolicy};
pub use util::default_http_client;
