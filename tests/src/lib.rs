//! # Admin Console Test Suite
//!
//! End-to-end flows that drive the console the way the event loop does:
//! key presses produce commands, commands run against a scripted backend,
//! and assertions read the application model or a headless render.
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── backend.rs   # Scripted `Backend` implementation
//!     └── flows.rs     # Navigation, polling, actions, rendering
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p console-tests
//! ```

pub mod integration;
