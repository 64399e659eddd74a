use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub name: Option<String>,
    pub quantity: i32,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            price: model.price,
        }
    }
}

// An unsaved product leaves the id to the SERIAL column
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: if product.is_new() { NotSet } else { Set(product.id) },
            name: Set(product.name),
            quantity: Set(product.quantity),
            price: Set(product.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_leaves_id_unset() {
        let active: ActiveModel = Product::new("Laptop", 10, 1000.0).into();
        assert!(active.id.is_not_set());
        assert_eq!(active.quantity, Set(10));
    }

    #[test]
    fn test_existing_product_keeps_id() {
        let active: ActiveModel = Product::new("Laptop", 10, 1000.0).with_id(7).into();
        assert_eq!(active.id, Set(7));
    }

    #[test]
    fn test_model_into_product() {
        let product: Product = Model {
            id: 3,
            name: None,
            quantity: 1,
            price: 2.5,
        }
        .into();

        assert_eq!(product.id, 3);
        assert!(product.name.is_none());
        assert_eq!(product.price, 2.5);
    }
}
