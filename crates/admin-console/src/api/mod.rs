//! API client module for the admin backend.
//!
//! Plain JSON over HTTP; see [`Backend`] for the consumed endpoints.

mod client;
mod types;

pub use client::{AdminApiClient, ApiError, Backend};
pub use types::*;
