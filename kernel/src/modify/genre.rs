use crate::entity::{Genre, GenreId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait GenreModifier<Connection: Send>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        genre: &Genre,
    ) -> error_stack::Result<(), KernelError>;

    /// Updates the row in place. The id is a lookup key and is never rewritten.
    async fn update(
        &self,
        con: &mut Connection,
        genre: &Genre,
    ) -> error_stack::Result<(), KernelError>;

    async fn delete(
        &self,
        con: &mut Connection,
        genre_id: &GenreId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnGenreModifier<Connection: Send>: 'static + Sync + Send {
    type GenreModifier: GenreModifier<Connection>;
    fn genre_modifier(&self) -> &Self::GenreModifier;
}
