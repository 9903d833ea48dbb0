use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with the rejection mapped to this crate's 400 response
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
