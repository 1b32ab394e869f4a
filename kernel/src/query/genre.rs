use crate::entity::{Genre, GenreId, GenreName};
use crate::KernelError;

#[async_trait::async_trait]
pub trait GenreQuery<Connection: Send>: Sync + Send + 'static {
    /// All genres, ordered by name ascending.
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Genre>, KernelError>;

    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &GenreId,
    ) -> error_stack::Result<Option<Genre>, KernelError>;

    async fn find_by_name(
        &self,
        con: &mut Connection,
        name: &GenreName,
    ) -> error_stack::Result<Option<Genre>, KernelError>;
}

pub trait DependOnGenreQuery<Connection: Send>: Sync + Send + 'static {
    type GenreQuery: GenreQuery<Connection>;
    fn genre_query(&self) -> &Self::GenreQuery;
}
