use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::record::ProductRecord;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

const SELECT_PRODUCTS: &str = "SELECT id, name, description, cost, qty FROM products";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "products query failed");
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => RepositoryError::Persistence,
        _ => RepositoryError::DatabaseError,
    }
}

fn insert_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        _ => database_error(err),
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        let entities =
            sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_PRODUCTS} ORDER BY id"))
                .fetch_all(&self.pool)
                .await
                .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_record()).collect())
    }

    async fn get_product(&self, id: i64) -> Result<ProductRecord, RepositoryError> {
        let entity =
            sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_PRODUCTS} WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?
                .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_record())
    }

    async fn add_product(&self, record: &ProductRecord) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        // Records without an id take the next value of the serial sequence.
        sqlx::query(
            r#"INSERT INTO products (id, name, description, cost, qty)
            VALUES (COALESCE($1, nextval('products_id_seq')), $2, $3, $4, COALESCE($5, 0))"#,
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(&record.cost)
        .bind(record.qty)
        .execute(&mut *tx)
        .await
        .map_err(insert_error)?;

        // An explicit id bypasses the sequence, so move it past the highest stored id.
        if record.id.is_some() {
            sqlx::query(
                "SELECT setval('products_id_seq', GREATEST((SELECT MAX(id) FROM products), 1))",
            )
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;
        }

        tx.commit().await.map_err(database_error)?;
        Ok(())
    }

    async fn update_qty(&self, id: i64, qty: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET qty = $2 WHERE id = $1")
            .bind(id)
            .bind(qty)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
