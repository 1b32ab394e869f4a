use serde::Serialize;
use uuid::Uuid;

use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook { id, title, .. } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
