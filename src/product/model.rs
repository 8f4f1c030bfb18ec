//! Product representations.
//!
//! `ProductEntity` is the row shape held by the store; `ProductDto` is the
//! JSON shape exchanged over HTTP.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier type for product rows.
pub type ProductId = i64;

/// A product row as persisted in the `product` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ProductEntity {
    /// Generated by the store on insert; `None` until then.
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Wire representation of a product.
///
/// `id` is output-only: it is never read from request bodies and is always
/// present on responses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(skip_deserializing)]
    pub id: Option<ProductId>,

    /// Missing or `null` in the payload reads as empty, which the validator rejects.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    /// `None` when absent or `null` in the payload.
    #[serde(default)]
    pub price: Option<f64>,
}

impl ProductDto {
    /// Build a wire payload without an id.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price: Some(price),
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
