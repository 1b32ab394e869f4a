use serde::Serialize;
use uuid::Uuid;

use kernel::prelude::entity::{DestructGenre, Genre};

use crate::transfer::BookDto;
use crate::validate::FieldError;

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct GenreDto {
    pub id: Uuid,
    pub name: String,
    pub url: String,
}

impl From<Genre> for GenreDto {
    fn from(value: Genre) -> Self {
        let url = value.url();
        let DestructGenre { id, name } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            url,
        }
    }
}

pub struct GetGenreDetailDto {
    pub id: Uuid,
}

/// Joined result of the genre/book fan-out. The genre may be missing; the
/// view renders an empty state in that case.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GenreDetailDto {
    pub genre: Option<GenreDto>,
    pub books: Vec<BookDto>,
}

pub struct CreateGenreDto {
    pub name: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CreateGenreOutcome {
    /// Validation failed; nothing was written. Carries the sanitized name for
    /// the re-rendered form.
    Invalid {
        name: String,
        errors: Vec<FieldError>,
    },
    /// A genre with this name already exists; treated as an idempotent create.
    Existing { genre: GenreDto },
    Created { genre: GenreDto },
}

pub struct UpdateGenreDto {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum UpdateGenreOutcome {
    /// Validation failed; the genre is re-fetched by the input id so the edit
    /// form can be re-rendered with current data.
    Invalid {
        genre: Option<GenreDto>,
        errors: Vec<FieldError>,
    },
    Updated { genre: GenreDto },
}

pub struct DeleteGenreDto {
    pub id: Uuid,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DeleteGenreOutcome {
    /// Dependent books exist; the record was not removed.
    Blocked {
        genre: Option<GenreDto>,
        books: Vec<BookDto>,
    },
    Deleted,
}
