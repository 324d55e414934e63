//! CLI command implementations.

pub mod api;
pub mod search;
pub mod suggest;

pub use api::{ApiCommand, Endpoint};
pub use search::SearchCommand;
pub use suggest::SuggestCommand;
