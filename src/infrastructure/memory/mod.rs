//! In-memory storage for the URL registry.
//!
//! State lives only as long as the process; there is no persistence layer.

mod in_memory_registry;

pub use in_memory_registry::InMemoryRegistry;
