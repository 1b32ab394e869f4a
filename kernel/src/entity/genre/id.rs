use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GenreId(Uuid);

impl GenreId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}

impl AsRef<Uuid> for GenreId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<GenreId> for Uuid {
    fn from(id: GenreId) -> Self {
        id.0
    }
}
