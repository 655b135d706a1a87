//! Command handlers
//!
//! The CLI has a single command: validate one record file.

mod validate;

pub use validate::handle_validate;
