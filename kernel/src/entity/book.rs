mod id;
mod title;

pub use self::{id::*, title::*};
use crate::entity::GenreId;
use destructure::{Destructure, Mutation};

/// A catalog book. Read-only here: only queried as a dependent of a genre
/// through its non-owning genre reference.
#[derive(Debug, Clone, Eq, PartialEq, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    genre: GenreId,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, genre: GenreId) -> Self {
        Self { id, title, genre }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn genre(&self) -> &GenreId {
        &self.genre
    }
}
