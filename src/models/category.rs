use serde::{Deserialize, Serialize};

use super::Product;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[sqlx(rename = "categoria_id")]
    pub id: i32,
    #[sqlx(rename = "nome")]
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub image_url: String,
}

/// Category plus a bounded slice of the products that reference it.
/// The relation is queried, never stored on the category row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: Category,
    pub products: Vec<Product>,
}
