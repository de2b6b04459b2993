//! Static reference data
//!
//! Descriptions are adapted from the Mozilla developer documentation
//! (https://developer.mozilla.org/en-US/docs/Web/HTTP), copyright Mozilla
//! and individual contributors. Paragraphs are separated by a blank line.

mod headers;
mod methods;
mod statuses;

pub use headers::HEADERS;
pub use methods::METHODS;
pub use statuses::STATUSES;
