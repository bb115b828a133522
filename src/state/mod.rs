//! Application state module

mod form_cursor;

pub use form_cursor::*;
