//! API middleware.

mod fallback;

pub use fallback::{handle_panic, method_not_allowed, not_found};
