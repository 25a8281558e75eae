//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

use super::JsonObject;

/// List all books sorted by id
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, ascending by id", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.books.list().await)
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Missing id or no such book")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get(&id).await?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Missing id or id already taken")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    JsonObject(fields): JsonObject,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(fields).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update a book; only the fields sent are replaced
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    request_body(content = Book, description = "Fields to overwrite; `id` is ignored"),
    responses(
        (status = 200, description = "Merged book", body = Book),
        (status = 400, description = "Missing id or no such book")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    JsonObject(fields): JsonObject,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(&id, fields).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 400, description = "Missing id or no such book")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.books.delete(&id).await?;
    Ok(StatusCode::OK)
}

/// `/books/` with an empty id segment
pub async fn missing_book_id() -> AppError {
    AppError::InvalidArgument("Book id is missing".to_string())
}
