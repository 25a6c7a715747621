//! Utility modules shared across the front end.

pub mod errors;

pub use errors::{LexError, LexErrorKind, MapError, MiniCError, MiniCResult};
