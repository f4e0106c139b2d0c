//! Upstream legal databases: EUR-Lex document search over SPARQL.

#[cfg(feature = "http")]
pub mod eurlex;

#[cfg(feature = "http")]
pub use eurlex::{EurLexClient, EurLexDocument, EurLexError};
