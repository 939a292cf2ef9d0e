use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Product as held by the product manager view.
///
/// Records only enter the view through normalization, so every field is
/// always defined: `price` and `quantity` are never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Product {
    /// Opaque identifier assigned by the remote collection.
    /// Empty only for placeholders built from malformed entries.
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl Product {
    /// Placeholder for a raw entry that is not an object.
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Request body for `POST /products` and `PUT /products/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}
