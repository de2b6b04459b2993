//! The three fixed reference categories

use std::fmt;

use crate::data::{HEADERS, METHODS, STATUSES};
use crate::reference::{Reference, References};

/// A fixed group of references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Methods,
    Statuses,
    Headers,
}

impl Category {
    /// Order used when every category is searched at once
    pub const LOOKUP_ORDER: [Category; 3] = [Self::Statuses, Self::Headers, Self::Methods];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Methods => "methods",
            Self::Statuses => "statuses",
            Self::Headers => "headers",
        }
    }

    pub fn references(&self) -> &'static [Reference] {
        match self {
            Self::Methods => METHODS,
            Self::Statuses => STATUSES,
            Self::Headers => HEADERS,
        }
    }

    pub fn collection(&self) -> References {
        References::from(self.references())
    }

    /// Statuses, headers and methods joined in lookup order
    pub fn everything() -> References {
        let parts: Vec<&[Reference]> = Self::LOOKUP_ORDER.iter().map(|c| c.references()).collect();
        References::concat(&parts)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
