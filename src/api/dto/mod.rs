//! Data Transfer Objects for API requests and responses.
//!
//! Response DTOs serialize with Serde; the shorten form is checked with
//! `validator` before it reaches the service layer.

pub mod greeting;
pub mod health;
pub mod shorten;
