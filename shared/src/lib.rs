//! Shared types for the Quad event platform
//!
//! Request/response DTOs used in API communication between the event server
//! and its clients.

pub mod client;

// Re-exports
pub use serde::{Deserialize, Serialize};
