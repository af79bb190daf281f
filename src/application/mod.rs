//! Application layer services implementing the reservation workflow.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls and the pure decision functions. Services consume repository
//! traits and provide a clean API for HTTP handlers.
//!
//! # Modules
//!
//! - [`services`] - The reservation workflow (create / search / delete)
//! - [`locks`] - Per-restaurant serialization for the create path

pub mod locks;
pub mod services;
