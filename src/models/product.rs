use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::chrono::NaiveDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[sqlx(rename = "produto_id")]
    pub id: i32,
    #[sqlx(rename = "nome")]
    pub name: String,
    #[sqlx(rename = "descricao")]
    pub description: String,
    #[sqlx(rename = "imagem_url")]
    pub image_url: String,
    #[sqlx(rename = "estoque")]
    pub stock: f64,
    #[sqlx(rename = "data_cadastro")]
    pub registered_at: NaiveDateTime,
    #[sqlx(rename = "preco")]
    pub price: Decimal,
    #[sqlx(rename = "categoria_id")]
    pub category_id: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub stock: f64,
    pub registered_at: NaiveDateTime,
    // Omitted price falls back to the store default of 0.00
    #[serde(default)]
    pub price: Decimal,
    pub category_id: i32,
}
