use crate::entity::{Book, GenreId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookQuery<Connection: Send>: Sync + Send + 'static {
    /// Every book whose genre reference equals `genre_id`.
    async fn find_by_genre_id(
        &self,
        con: &mut Connection,
        genre_id: &GenreId,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
}

pub trait DependOnBookQuery<Connection: Send>: Sync + Send + 'static {
    type BookQuery: BookQuery<Connection>;
    fn book_query(&self) -> &Self::BookQuery;
}
