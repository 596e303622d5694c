//! Product Repository
//!
//! Products are hard-deleted; order lines keep their own name and price
//! snapshot and lose only the product reference.

use super::{RepoError, RepoResult};
use shared::models::{Product, ProductCreate, ProductUpdate};
use sqlx::sqlite::SqliteExecutor;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, name, price, category, description, bonus_percentage_for_barber, bonus_percentage_for_cashier, created_at, updated_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {COLUMNS} FROM product ORDER BY name ASC, id ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(products)
}

pub async fn find_by_id(ex: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {COLUMNS} FROM product WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(ex)
    .await?;
    Ok(product)
}

/// Load every product whose id is in `ids` (missing ids are simply absent)
pub async fn find_many(conn: &mut SqliteConnection, ids: &[i64]) -> RepoResult<Vec<Product>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut qb: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM product WHERE id IN ("));
    let mut sep = qb.separated(", ");
    for id in ids {
        sep.push_bind(*id);
    }
    sep.push_unseparated(")");
    let products = qb.build_query_as::<Product>().fetch_all(conn).await?;
    Ok(products)
}

pub async fn create(pool: &SqlitePool, data: &ProductCreate) -> RepoResult<Product> {
    let now = shared::util::now_millis();
    let product = Product {
        id: shared::util::snowflake_id(),
        name: data.name.clone(),
        price: data.price,
        category: data.category,
        description: data.description.clone(),
        bonus_percentage_for_barber: data.bonus_percentage_for_barber,
        bonus_percentage_for_cashier: data.bonus_percentage_for_cashier,
        created_at: now,
        updated_at: now,
    };
    sqlx::query(&format!(
        "INSERT INTO product ({COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"
    ))
    .bind(product.id)
    .bind(&product.name)
    .bind(product.price)
    .bind(product.category)
    .bind(&product.description)
    .bind(product.bonus_percentage_for_barber)
    .bind(product.bonus_percentage_for_cashier)
    .bind(product.created_at)
    .bind(product.updated_at)
    .execute(pool)
    .await?;
    Ok(product)
}

pub async fn update(pool: &SqlitePool, data: &ProductUpdate) -> RepoResult<Product> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE product SET name = ?, price = ?, category = ?, description = ?, bonus_percentage_for_barber = ?, bonus_percentage_for_cashier = ?, updated_at = ? WHERE id = ?",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(data.category)
    .bind(&data.description)
    .bind(data.bonus_percentage_for_barber)
    .bind(data.bonus_percentage_for_cashier)
    .bind(now)
    .bind(data.id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Product with ID {} not found",
            data.id
        )));
    }
    find_by_id(pool, data.id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product with ID {} not found", data.id)))
}

/// Hard delete, returning the removed product
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<Product> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "DELETE FROM product WHERE id = ? RETURNING {COLUMNS}"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    product.ok_or_else(|| RepoError::NotFound(format!("Product with ID {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use shared::models::ProductCategory;

    fn haircut() -> ProductCreate {
        ProductCreate {
            name: "Haircut".into(),
            price: 50.0,
            category: ProductCategory::Service,
            description: String::new(),
            bonus_percentage_for_barber: 10.0,
            bonus_percentage_for_cashier: 5.0,
        }
    }

    #[tokio::test]
    async fn test_crud_cycle() {
        let db = DbService::in_memory().await.unwrap();
        let created = create(&db.pool, &haircut()).await.unwrap();

        let updated = update(
            &db.pool,
            &ProductUpdate {
                id: created.id,
                name: "Fade".into(),
                price: 60.0,
                category: ProductCategory::Service,
                description: "Skin fade".into(),
                bonus_percentage_for_barber: 20.0,
                bonus_percentage_for_cashier: 0.0,
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.name, "Fade");
        assert_eq!(updated.bonus_percentage_for_barber, 20.0);

        let removed = delete(&db.pool, created.id).await.unwrap();
        assert_eq!(removed.id, created.id);
        assert!(find_by_id(&db.pool, created.id).await.unwrap().is_none());
        assert!(matches!(
            delete(&db.pool, created.id).await,
            Err(RepoError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_find_many_skips_unknown_ids() {
        let db = DbService::in_memory().await.unwrap();
        let a = create(&db.pool, &haircut()).await.unwrap();
        let mut conn = db.pool.acquire().await.unwrap();
        let found = find_many(&mut conn, &[a.id, a.id + 1]).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, a.id);
    }

    #[tokio::test]
    async fn test_listing_is_name_ordered() {
        let db = DbService::in_memory().await.unwrap();
        let mut shave = haircut();
        shave.name = "Beard trim".into();
        create(&db.pool, &haircut()).await.unwrap();
        create(&db.pool, &shave).await.unwrap();
        let names: Vec<_> = find_all(&db.pool)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Beard trim", "Haircut"]);
    }
}
