//! Error types for the Emojivoto domain.
//!
//! Only catalog construction can fail at this level. Lookups of unknown
//! codes are a normal outcome and are modeled with `Option`, never with
//! an error.
//!
//! # Example
//!
//! ```
//! use emojivoto_core::{CatalogError, Item, ItemCatalog};
//!
//! let result = ItemCatalog::new(vec![
//!     Item::new(":joy:", "😂"),
//!     Item::new(":joy:", "😂"),
//! ]);
//!
//! assert!(matches!(result, Err(CatalogError::DuplicateCode { .. })));
//! ```

use thiserror::Error;

/// Errors raised while building an [`ItemCatalog`](crate::ItemCatalog).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two items share the same code.
    #[error("duplicate item code '{code}' in catalog")]
    DuplicateCode {
        /// The repeated code
        code: String,
    },

    /// An item was given an empty (or whitespace-only) code.
    #[error("item at position {position} has an empty code")]
    EmptyCode {
        /// Index of the offending item in the input list
        position: usize,
    },
}

impl CatalogError {
    /// Creates a DuplicateCode error.
    pub fn duplicate_code(code: impl Into<String>) -> Self {
        Self::DuplicateCode { code: code.into() }
    }

    /// Returns true if this error was caused by a repeated code.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateCode { .. })
    }
}

/// Type alias for Results with CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;
