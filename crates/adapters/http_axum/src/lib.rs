//! # devstate-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** used by control clients and the polling device
//!   (`/api/state`, `/api/control`, `/api/device`)
//! - Describe the available endpoints at `/` and answer `/health`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//! - Allow cross-origin requests from any origin
//!
//! ## Dependency rule
//! Depends on `devstate-app` (for port traits and services) and
//! `devstate-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
