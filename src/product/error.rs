//! Domain error definitions.

use thiserror::Error;

use crate::product::model::ProductId;
use crate::product::store::StoreError;
use crate::product::validation::ValidationErrors;

/// Errors raised by the product service.
#[derive(Debug, Error)]
pub enum ProductError {
    /// No row with the requested id.
    #[error("Could not find product by that id")]
    NotFound(ProductId),

    /// The payload broke one or more field rules.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for product operations.
pub type ProductResult<T> = Result<T, ProductError>;
