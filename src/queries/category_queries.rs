use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Category, CategoryWithProducts, CreateCategoryRequest, Product},
};

/// Find category by ID
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Category>> {
    let category =
        sqlx::query_as::<_, Category>("SELECT * FROM categorias WHERE categoria_id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(category)
}

/// Get all categories (flat list)
pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>> {
    let categories =
        sqlx::query_as::<_, Category>("SELECT * FROM categorias ORDER BY categoria_id ASC")
            .fetch_all(pool)
            .await?;

    Ok(categories)
}

/// Get all categories, each carrying at most `limit` products.
/// Products rank by ascending id within their category.
pub async fn get_all_with_products(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<CategoryWithProducts>> {
    let categories = get_all(pool).await?;

    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM (
             SELECT p.*,
                    ROW_NUMBER() OVER (
                        PARTITION BY categoria_id ORDER BY produto_id ASC
                    ) AS rn
             FROM produtos p
         ) ranked
         WHERE rn <= $1
         ORDER BY categoria_id ASC, produto_id ASC",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    let mut products_map: HashMap<i32, Vec<Product>> = HashMap::new();
    for product in products {
        products_map
            .entry(product.category_id)
            .or_default()
            .push(product);
    }

    let response = categories
        .into_iter()
        .map(|category| {
            let products = products_map.remove(&category.id).unwrap_or_default();
            CategoryWithProducts { category, products }
        })
        .collect();

    Ok(response)
}

/// Create a new category
pub async fn create(pool: &PgPool, req: CreateCategoryRequest) -> Result<Category> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categorias (nome, image_url)
         VALUES ($1, $2)
         RETURNING *",
    )
    .bind(&req.name)
    .bind(&req.image_url)
    .fetch_one(pool)
    .await?;

    Ok(category)
}

/// Replace a category's mutable fields in place; `None` when the id is absent
pub async fn update(pool: &PgPool, category: &Category) -> Result<Option<Category>> {
    let updated = sqlx::query_as::<_, Category>(
        "UPDATE categorias
         SET nome = $1, image_url = $2
         WHERE categoria_id = $3
         RETURNING *",
    )
    .bind(&category.name)
    .bind(&category.image_url)
    .bind(category.id)
    .fetch_optional(pool)
    .await?;

    Ok(updated)
}

/// Delete a category; dependent products are removed by the FK cascade
pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<Category>> {
    let deleted =
        sqlx::query_as::<_, Category>("DELETE FROM categorias WHERE categoria_id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(deleted)
}
