//! httpref core - HTTP reference data and the filter-and-present pipeline
//!
//! Holds the static methods, status codes and headers, the matcher that
//! narrows them down by name, and the renderer that wraps the result to a
//! terminal width.

pub mod category;
pub mod config;
pub mod data;
pub mod error;
pub mod lookup;
pub mod paragraph;
pub mod reference;
pub mod render;

pub use category::Category;
pub use config::Config;
pub use error::LookupError;
pub use paragraph::Width;
pub use reference::{Reference, References};
