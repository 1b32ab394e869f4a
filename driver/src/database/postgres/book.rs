use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};
use uuid::Uuid;

use kernel::interface::query::BookQuery;
use kernel::prelude::entity::{Book, BookId, BookTitle, GenreId};
use kernel::KernelError;

use crate::error::{ConvertError, DriverError};

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery<PoolConnection<Postgres>> for PostgresBookRepository {
    async fn find_by_genre_id(
        &self,
        con: &mut PoolConnection<Postgres>,
        genre_id: &GenreId,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_by_genre_id(con, genre_id)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    genre_id: Uuid,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            GenreId::new(value.genre_id),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_by_genre_id(
        con: &mut PgConnection,
        genre_id: &GenreId,
    ) -> Result<Vec<Book>, DriverError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, genre_id
            FROM books
            WHERE genre_id = $1
            "#,
        )
        .bind(genre_id.as_ref())
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }
}
