use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use application::transfer::{BookDto, GenreDetailDto, GenreDto};
use application::validate::FieldError;

/// View models stand in for the rendered templates: each carries the template
/// title plus the data the view receives.

#[derive(Debug, Serialize)]
pub struct GenreListView {
    title: &'static str,
    genre_list: Vec<GenreDto>,
}

impl GenreListView {
    pub fn new(genre_list: Vec<GenreDto>) -> Self {
        Self {
            title: "Genre List",
            genre_list,
        }
    }
}

impl IntoResponse for GenreListView {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct GenreDetailView {
    title: &'static str,
    genre: Option<GenreDto>,
    genre_books: Vec<BookDto>,
}

impl From<GenreDetailDto> for GenreDetailView {
    fn from(value: GenreDetailDto) -> Self {
        Self {
            title: "Genre Detail",
            genre: value.genre,
            genre_books: value.books,
        }
    }
}

impl IntoResponse for GenreDetailView {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct GenreDeleteView {
    title: &'static str,
    genre: Option<GenreDto>,
    genre_books: Vec<BookDto>,
}

impl GenreDeleteView {
    pub fn new(genre: Option<GenreDto>, genre_books: Vec<BookDto>) -> Self {
        Self {
            title: "Genre Delete",
            genre,
            genre_books,
        }
    }
}

impl From<GenreDetailDto> for GenreDeleteView {
    fn from(value: GenreDetailDto) -> Self {
        Self::new(value.genre, value.books)
    }
}

impl IntoResponse for GenreDeleteView {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

/// Shared by the create and update forms; the create path echoes the entered
/// name, the update path carries the fetched genre.
#[derive(Debug, Serialize)]
pub struct GenreFormView {
    title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    genre: Option<GenreDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl GenreFormView {
    pub fn create_form() -> Self {
        Self {
            title: "Create Genre",
            genre: None,
            name: None,
            errors: Vec::new(),
        }
    }

    pub fn create_invalid(name: String, errors: Vec<FieldError>) -> Self {
        Self {
            title: "Create Genre",
            genre: None,
            name: Some(name),
            errors,
        }
    }

    pub fn update_form(genre: Option<GenreDto>) -> Self {
        Self {
            title: "Update Genre",
            genre,
            name: None,
            errors: Vec::new(),
        }
    }

    pub fn update_invalid(genre: Option<GenreDto>, errors: Vec<FieldError>) -> Self {
        Self {
            title: "Update Genre",
            genre,
            name: None,
            errors,
        }
    }
}

impl IntoResponse for GenreFormView {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}
