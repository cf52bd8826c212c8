//! # devstate-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the `DeviceStateRepository` port that holds the single
//!   device state record
//! - Provide **in-process infrastructure** for that port (a lock-guarded
//!   in-memory record) since nothing is persisted
//! - Define the `DeviceStateService` use-cases: read the record, apply a
//!   control command
//!
//! ## Dependency rule
//! Depends on `devstate-domain` only (plus `tokio::sync` for the lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod memory_store;
pub mod ports;
pub mod services;
