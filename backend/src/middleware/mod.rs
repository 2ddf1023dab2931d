//! Request middleware.
//!
//! Purpose: request lifecycle concerns that apply to every endpoint, such as
//! trace identifiers and access logging.

pub mod trace;

pub use trace::Trace;
