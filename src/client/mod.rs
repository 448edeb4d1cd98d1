// Thin blocking client for the external price database REST API.
// The API owns persistence and filtering; this side only assembles
// requests and decodes responses.

pub mod api;
pub mod error;
pub mod models;

pub use api::ApiClient;
pub use error::ApiError;
pub use models::{Product, ProductEntry, Shop, Unit};
