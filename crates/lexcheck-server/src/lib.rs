//! HTTP API: compliance checks, EUR-Lex search proxy, legal updates feed.

pub mod error;
pub mod handlers;
pub mod router;
pub mod service;
pub mod state;

pub use error::ApiError;
pub use router::{build_router, serve};
pub use service::check_compliance;
pub use state::AppState;
