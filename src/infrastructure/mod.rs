//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, plus the
//! network-facing pieces the application layer depends on.
//!
//! # Modules
//!
//! - [`dns`] - Hostname resolution (system and static implementations)
//! - [`memory`] - In-memory registry implementation

pub mod dns;
pub mod memory;
