mod id;
mod name;

pub use self::{id::*, name::*};
use destructure::{Destructure, Mutation};

#[derive(Debug, Clone, Eq, PartialEq, Destructure, Mutation)]
pub struct Genre {
    id: GenreId,
    name: GenreName,
}

impl Genre {
    pub fn new(id: GenreId, name: GenreName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> &GenreId {
        &self.id
    }

    pub fn name(&self) -> &GenreName {
        &self.name
    }

    /// Detail-page location, derived from the id.
    pub fn url(&self) -> String {
        format!("/genre/{}", self.id.as_ref())
    }
}
