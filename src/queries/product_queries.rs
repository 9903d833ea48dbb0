use sqlx::PgPool;

use crate::{
    error::Result,
    models::{CreateProductRequest, Product},
};

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM produtos WHERE produto_id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM produtos ORDER BY produto_id ASC")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

/// Insert a product; a missing categoria_id surfaces as an FK violation
pub async fn create(pool: &PgPool, req: CreateProductRequest) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO produtos
             (nome, descricao, imagem_url, estoque, data_cadastro, preco, categoria_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(&req.image_url)
    .bind(req.stock)
    .bind(req.registered_at)
    .bind(req.price)
    .bind(req.category_id)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

pub async fn update(pool: &PgPool, product: &Product) -> Result<Option<Product>> {
    let updated = sqlx::query_as::<_, Product>(
        "UPDATE produtos
         SET nome = $1, descricao = $2, imagem_url = $3, estoque = $4,
             data_cadastro = $5, preco = $6, categoria_id = $7
         WHERE produto_id = $8
         RETURNING *",
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(&product.image_url)
    .bind(product.stock)
    .bind(product.registered_at)
    .bind(product.price)
    .bind(product.category_id)
    .bind(product.id)
    .fetch_optional(pool)
    .await?;

    Ok(updated)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let deleted =
        sqlx::query_as::<_, Product>("DELETE FROM produtos WHERE produto_id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(deleted)
}
