//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - An original URL paired with its short identifier
//! - [`ShortId`] - The positive integer handed out for each distinct URL

pub mod short_id;
pub mod url_record;

pub use short_id::{ParseShortIdError, ShortId};
pub use url_record::UrlRecord;
