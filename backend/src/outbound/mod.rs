//! Outbound adapters implementing the driven ports.
//!
//! - **memory**: mutex-guarded in-memory stores for users, sessions,
//!   credentials and first auto-login domains.
//! - **seed**: the startup data those stores are filled from.
//!
//! Adapters are thin: they store and retrieve domain values and contain no
//! business rules.

pub mod memory;
pub mod seed;
