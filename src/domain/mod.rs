//! Domain layer containing business entities and storage contracts.
//!
//! The domain layer has no dependency on HTTP or on any particular storage.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! Business logic that combines validation with registration lives in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
