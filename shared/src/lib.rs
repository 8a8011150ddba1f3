//! Shared types for the Kingdom Roster service
//!
//! Domain models, the unified error system, and small utilities used by
//! the API server.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
