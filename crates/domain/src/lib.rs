//! # devstate-domain
//!
//! Pure domain model for the devstate service.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **device state** record (open command → value mapping plus
//!   the time of the last mutation)
//! - Define **control commands** and the presence rules they must satisfy
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod command;
pub mod device_state;
pub mod error;
pub mod time;
