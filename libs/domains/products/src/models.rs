use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog product
///
/// `id == 0` means the product has not been persisted yet; the repository
/// assigns a positive id on creation. Every field is optional in JSON
/// input and falls back to its zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,
    #[serde(default)]
    #[schema(example = "Laptop")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = 10)]
    pub quantity: i32,
    #[serde(default)]
    #[schema(example = 1000.0)]
    pub price: f64,
}

impl Product {
    /// Unsaved product (id 0)
    pub fn new(name: impl Into<String>, quantity: i32, price: f64) -> Self {
        Self {
            id: 0,
            name: Some(name.into()),
            quantity,
            price,
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    /// Apply the fields of an update request to this product.
    ///
    /// A present, non-empty name replaces the current one. Quantity and
    /// price always replace the current values, zero included, since a
    /// numeric zero cannot be told apart from an omitted field.
    pub fn merge_from(&mut self, changes: Product) {
        if let Some(name) = changes.name.filter(|name| !name.is_empty()) {
            self.name = Some(name);
        }
        self.quantity = changes.quantity;
        self.price = changes.price;
    }
}
