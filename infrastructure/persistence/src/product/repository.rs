use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::Mutex;

use business::domain::errors::StorageError;
use business::domain::product::data_sources::ProductsLocalDataSource;
use business::domain::product::model::Product;
use business::domain::shared::observable::{Observer, StateSlot};

use super::entity::FavoriteProductEntity;
use crate::db::Database;

/// Favorites store backed by the `favorite_products` table.
///
/// The snapshot is read once on open. After that every committed write is
/// applied to it, so a write that reached the table is always observable.
/// Writes are serialized so snapshots reach observers in commit order.
pub struct FavoriteProductsSqlite {
    database: Arc<Database>,
    favorites: StateSlot<Vec<Product>>,
    write_lock: Mutex<()>,
}

impl FavoriteProductsSqlite {
    /// Opens the database if needed and loads the initial snapshot.
    pub async fn new(database: Arc<Database>) -> Result<Self, StorageError> {
        let pool = database.pool().await?;
        let initial = Self::load_all(pool).await?;
        tracing::debug!(target: "persistence", count = initial.len(), "Loaded favorites");

        Ok(Self {
            database,
            favorites: StateSlot::new(initial),
            write_lock: Mutex::new(()),
        })
    }

    async fn load_all(pool: &SqlitePool) -> Result<Vec<Product>, StorageError> {
        let entities = sqlx::query_as::<_, FavoriteProductEntity>(
            "SELECT id, price, thumbnail, title, brand, description FROM favorite_products",
        )
        .fetch_all(pool)
        .await
        .map_err(|_| StorageError::Query)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}

#[async_trait]
impl ProductsLocalDataSource for FavoriteProductsSqlite {
    async fn upsert_favorite(&self, product: &Product) -> Result<(), StorageError> {
        let pool = self.database.pool().await?;
        let _guard = self.write_lock.lock().await;

        sqlx::query(
            r#"INSERT INTO favorite_products (id, price, thumbnail, title, brand, description)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT (id) DO UPDATE SET
                price = excluded.price,
                thumbnail = excluded.thumbnail,
                title = excluded.title,
                brand = excluded.brand,
                description = excluded.description"#,
        )
        .bind(product.id)
        .bind(product.price)
        .bind(&product.thumbnail)
        .bind(&product.title)
        .bind(&product.brand)
        .bind(&product.description)
        .execute(pool)
        .await
        .map_err(|err| {
            tracing::error!(target: "persistence", id = product.id, error = %err, "Upsert failed");
            StorageError::Query
        })?;

        self.favorites.update(|favorites| {
            match favorites.iter_mut().find(|stored| stored.same_identity(product)) {
                Some(stored) => *stored = product.clone(),
                None => favorites.push(product.clone()),
            }
        });
        Ok(())
    }

    async fn remove_favorite(&self, product: &Product) -> Result<(), StorageError> {
        let pool = self.database.pool().await?;
        let _guard = self.write_lock.lock().await;

        let result = sqlx::query("DELETE FROM favorite_products WHERE id = ?1")
            .bind(product.id)
            .execute(pool)
            .await
            .map_err(|err| {
                tracing::error!(target: "persistence", id = product.id, error = %err, "Delete failed");
                StorageError::Query
            })?;

        if result.rows_affected() == 0 {
            tracing::debug!(target: "persistence", id = product.id, "Favorite was not stored");
        }

        self.favorites
            .update(|favorites| favorites.retain(|stored| !stored.same_identity(product)));
        Ok(())
    }

    fn observe_favorites(&self) -> Observer<Vec<Product>> {
        self.favorites.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::time::Duration;

    use super::*;
    use crate::db::DatabaseConfig;
    use proptest::prelude::*;

    fn product(id: i64, title: &str, price: f64) -> Product {
        Product {
            id,
            price,
            thumbnail: Some(format!("https://cdn.example.com/{}.jpg", id)),
            title: title.to_string(),
            brand: "Acme".to_string(),
            description: format!("About {}", title),
        }
    }

    async fn store() -> (Arc<Database>, FavoriteProductsSqlite) {
        let database = Arc::new(Database::new(DatabaseConfig::in_memory()));
        let store = FavoriteProductsSqlite::new(database.clone()).await.unwrap();
        (database, store)
    }

    fn sorted(mut products: Vec<Product>) -> Vec<Product> {
        products.sort_by_key(|p| p.id);
        products
    }

    #[tokio::test]
    async fn should_start_with_empty_snapshot_when_table_is_empty() {
        let (_, store) = store().await;

        assert!(store.observe_favorites().current().is_empty());
    }

    #[tokio::test]
    async fn should_emit_snapshot_after_each_write_when_observed() {
        let (_, store) = store().await;
        let mut favorites = store.observe_favorites();

        store.upsert_favorite(&product(1, "A", 1.0)).await.unwrap();
        assert_eq!(favorites.next().await, Some(vec![product(1, "A", 1.0)]));

        store.upsert_favorite(&product(2, "B", 2.0)).await.unwrap();
        assert_eq!(
            favorites.next().await.map(sorted),
            Some(vec![product(1, "A", 1.0), product(2, "B", 2.0)])
        );

        store.remove_favorite(&product(1, "A", 1.0)).await.unwrap();
        assert_eq!(favorites.next().await, Some(vec![product(2, "B", 2.0)]));
    }

    #[tokio::test]
    async fn should_replace_all_fields_when_id_already_stored() {
        let (_, store) = store().await;
        store.upsert_favorite(&product(1, "Old", 1.0)).await.unwrap();

        let mut updated = product(1, "New", 2.5);
        updated.thumbnail = None;
        store.upsert_favorite(&updated).await.unwrap();

        assert_eq!(store.observe_favorites().current(), vec![updated]);
    }

    #[tokio::test]
    async fn should_keep_one_row_when_same_product_upserted_twice() {
        let (_, store) = store().await;

        store.upsert_favorite(&product(7, "G", 7.0)).await.unwrap();
        store.upsert_favorite(&product(7, "G", 7.0)).await.unwrap();

        assert_eq!(store.observe_favorites().current(), vec![product(7, "G", 7.0)]);
    }

    #[tokio::test]
    async fn should_treat_missing_id_as_noop_when_removing() {
        let (_, store) = store().await;
        store.upsert_favorite(&product(1, "A", 1.0)).await.unwrap();

        let result = store.remove_favorite(&product(42, "Ghost", 0.0)).await;

        assert!(result.is_ok());
        assert_eq!(store.observe_favorites().current(), vec![product(1, "A", 1.0)]);
    }

    #[tokio::test]
    async fn should_see_committed_rows_when_reopening_store_on_same_database() {
        let (database, store) = store().await;
        store.upsert_favorite(&product(3, "C", 3.0)).await.unwrap();
        drop(store);

        let reopened = FavoriteProductsSqlite::new(database).await.unwrap();

        assert_eq!(reopened.observe_favorites().current(), vec![product(3, "C", 3.0)]);
    }

    #[tokio::test]
    async fn should_keep_every_row_when_writes_to_different_ids_run_concurrently() {
        let (_, store) = store().await;
        let store = Arc::new(store);

        let writers: Vec<_> = (0..20)
            .map(|id| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .upsert_favorite(&product(id, "bulk", id as f64))
                        .await
                        .unwrap();
                })
            })
            .collect();
        for writer in writers {
            writer.await.unwrap();
        }

        let ids: Vec<i64> = sorted(store.observe_favorites().current())
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, (0..20).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn should_publish_committed_write_when_table_holds_undecodable_row() {
        let (database, store) = store().await;
        let pool = database.pool().await.unwrap();
        sqlx::query(
            "INSERT INTO favorite_products (id, price, title, brand, description) \
             VALUES (99, 'not a price', 'Broken', 'Acme', '')",
        )
        .execute(pool)
        .await
        .unwrap();
        let mut favorites = store.observe_favorites();

        let result = store.upsert_favorite(&product(1, "A", 1.0)).await;

        assert_eq!(result, Ok(()));
        assert_eq!(favorites.next().await, Some(vec![product(1, "A", 1.0)]));
        let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM favorite_products")
            .fetch_one(pool)
            .await
            .unwrap();
        assert_eq!(rows, 2);
    }

    #[tokio::test]
    async fn should_not_publish_snapshot_when_write_fails() {
        let (database, store) = store().await;
        store.upsert_favorite(&product(1, "A", 1.0)).await.unwrap();
        let pool = database.pool().await.unwrap();
        sqlx::query("DROP TABLE favorite_products")
            .execute(pool)
            .await
            .unwrap();
        let mut favorites = store.observe_favorites();

        let upserted = store.upsert_favorite(&product(2, "B", 2.0)).await;
        let removed = store.remove_favorite(&product(1, "A", 1.0)).await;

        assert_eq!(upserted, Err(StorageError::Query));
        assert_eq!(removed, Err(StorageError::Query));
        assert!(
            tokio::time::timeout(Duration::from_millis(50), favorites.next())
                .await
                .is_err()
        );
        assert_eq!(favorites.current(), vec![product(1, "A", 1.0)]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn should_match_replayed_model_for_any_write_sequence(
            ops in proptest::collection::vec((0i64..5, 0u8..10, any::<bool>()), 0..25)
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            let (snapshot, stored, expected) = runtime.block_on(async {
                let (database, store) = store().await;
                let mut model = BTreeMap::new();
                for (id, version, add) in ops {
                    let p = product(id, &format!("v{}", version), version as f64);
                    if add {
                        store.upsert_favorite(&p).await.unwrap();
                        model.insert(id, p);
                    } else {
                        store.remove_favorite(&p).await.unwrap();
                        model.remove(&id);
                    }
                }
                let reopened = FavoriteProductsSqlite::new(database).await.unwrap();
                (
                    sorted(store.observe_favorites().current()),
                    sorted(reopened.observe_favorites().current()),
                    model.into_values().collect::<Vec<_>>(),
                )
            });

            prop_assert_eq!(&snapshot, &expected);
            prop_assert_eq!(stored, expected);
        }
    }
}
