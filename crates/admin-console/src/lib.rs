//! Admin Console: terminal dashboard for the admin backend
//!
//! A TUI client that polls the admin backend's REST endpoints and renders
//! scripts, log viewers, health cards and demo project status.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐  key   ┌─────────────┐ Command ┌──────────────────────────┐
//! │ terminal │ ─────▶ │ domain::App │ ──────▶ │ sync::SyncContext        │
//! │ (ui::*)  │ ◀───── │ (model)     │ ◀────── │ controllers / actions    │
//! └──────────┘  draw  └─────────────┘  apply  │ Poller, StatusSimulator  │
//!                                             └────────────┬─────────────┘
//!                                                          │ api::Backend
//!                                                          ▼
//!                                                   admin backend (HTTP)
//! ```
//!
//! The model sits behind `Arc<tokio::sync::Mutex<App>>`. Background tasks
//! lock it to stamp a request and again to apply the response, never across
//! a network call.

pub mod api;
pub mod config;
pub mod domain;
pub mod render;
pub mod sync;
pub mod telemetry;
pub mod ui;

pub use domain::{App, AppState, Command, Page};
