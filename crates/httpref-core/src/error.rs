//! Lookup errors reported to the user

use thiserror::Error;

/// Ways a lookup can end without anything to print
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    #[error("Must specify something to filter by")]
    MissingFilter,

    #[error("Filter not found any results")]
    NoResults,
}
