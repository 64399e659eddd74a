use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::{
    entity,
    error::ProductResult,
    models::Product,
    repository::ProductRepository,
};

/// Keeps the SERIAL sequence ahead of ids inserted explicitly
const SYNC_ID_SEQUENCE: &str = "SELECT setval(pg_get_serial_sequence('products', 'id'), \
     (SELECT GREATEST(COALESCE(MAX(id), 1), 1) FROM products))";

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Insert or upsert one product on any connection, including a transaction.
async fn save_with<C: ConnectionTrait>(conn: &C, product: Product) -> ProductResult<Product> {
    if product.is_new() {
        let active_model: entity::ActiveModel = product.into();
        let model = active_model.insert(conn).await?;
        tracing::info!(product_id = model.id, "Created product");
        return Ok(model.into());
    }

    let exists = entity::Entity::find_by_id(product.id)
        .one(conn)
        .await?
        .is_some();

    let active_model: entity::ActiveModel = product.into();
    let model = if exists {
        let model = active_model.update(conn).await?;
        tracing::info!(product_id = model.id, "Updated product");
        model
    } else {
        let model = active_model.insert(conn).await?;
        conn.execute_unprepared(SYNC_ID_SEQUENCE).await?;
        tracing::info!(product_id = model.id, "Created product with explicit id");
        model
    };

    Ok(model.into())
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn save(&self, product: Product) -> ProductResult<Product> {
        save_with(&self.db, product).await
    }

    async fn save_all(&self, products: Vec<Product>) -> ProductResult<Vec<Product>> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self.db.begin().await?;
        let mut saved = Vec::with_capacity(products.len());
        for product in products {
            saved.push(save_with(&txn, product).await?);
        }
        txn.commit().await?;

        tracing::info!(count = saved.len(), "Saved product batch");
        Ok(saved)
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .order_by_asc(entity::Column::Id)
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(result.rows_affected > 0)
    }
}
