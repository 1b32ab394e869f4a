use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};
use uuid::Uuid;

use kernel::interface::query::GenreQuery;
use kernel::interface::update::GenreModifier;
use kernel::prelude::entity::{Genre, GenreId, GenreName};
use kernel::KernelError;

use crate::error::{ConvertError, DriverError};

pub struct PostgresGenreRepository;

#[async_trait::async_trait]
impl GenreQuery<PoolConnection<Postgres>> for PostgresGenreRepository {
    async fn find_all(
        &self,
        con: &mut PoolConnection<Postgres>,
    ) -> error_stack::Result<Vec<Genre>, KernelError> {
        PgGenreInternal::find_all(con).await.convert_error()
    }

    async fn find_by_id(
        &self,
        con: &mut PoolConnection<Postgres>,
        id: &GenreId,
    ) -> error_stack::Result<Option<Genre>, KernelError> {
        PgGenreInternal::find_by_id(con, id).await.convert_error()
    }

    async fn find_by_name(
        &self,
        con: &mut PoolConnection<Postgres>,
        name: &GenreName,
    ) -> error_stack::Result<Option<Genre>, KernelError> {
        PgGenreInternal::find_by_name(con, name).await.convert_error()
    }
}

#[async_trait::async_trait]
impl GenreModifier<PoolConnection<Postgres>> for PostgresGenreRepository {
    async fn create(
        &self,
        con: &mut PoolConnection<Postgres>,
        genre: &Genre,
    ) -> error_stack::Result<(), KernelError> {
        PgGenreInternal::create(con, genre).await.convert_error()
    }

    async fn update(
        &self,
        con: &mut PoolConnection<Postgres>,
        genre: &Genre,
    ) -> error_stack::Result<(), KernelError> {
        PgGenreInternal::update(con, genre).await.convert_error()
    }

    async fn delete(
        &self,
        con: &mut PoolConnection<Postgres>,
        genre_id: &GenreId,
    ) -> error_stack::Result<(), KernelError> {
        PgGenreInternal::delete(con, genre_id).await.convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct GenreRow {
    id: Uuid,
    name: String,
}

impl From<GenreRow> for Genre {
    fn from(value: GenreRow) -> Self {
        Genre::new(GenreId::new(value.id), GenreName::new(value.name))
    }
}

pub(in crate::database) struct PgGenreInternal;

impl PgGenreInternal {
    async fn find_all(con: &mut PgConnection) -> Result<Vec<Genre>, DriverError> {
        let rows = sqlx::query_as::<_, GenreRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM genres
            ORDER BY name ASC
            "#,
        )
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Genre::from).collect())
    }

    async fn find_by_id(
        con: &mut PgConnection,
        id: &GenreId,
    ) -> Result<Option<Genre>, DriverError> {
        let row = sqlx::query_as::<_, GenreRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM genres
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        let found = row.map(Genre::from);
        Ok(found)
    }

    async fn find_by_name(
        con: &mut PgConnection,
        name: &GenreName,
    ) -> Result<Option<Genre>, DriverError> {
        let row = sqlx::query_as::<_, GenreRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM genres
            WHERE name = $1
            "#,
        )
        .bind(name.as_ref())
        .fetch_optional(con)
        .await?;
        let found = row.map(Genre::from);
        Ok(found)
    }

    async fn create(con: &mut PgConnection, genre: &Genre) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO genres (id, name)
            VALUES ($1, $2)
            "#,
        )
        .bind(genre.id().as_ref())
        .bind(genre.name().as_ref())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, genre: &Genre) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE genres
            SET name = $2
            WHERE id = $1
            "#,
        )
        .bind(genre.id().as_ref())
        .bind(genre.name().as_ref())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, genre_id: &GenreId) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM genres
            WHERE id = $1
            "#,
        )
        .bind(genre_id.as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::QueryDatabaseConnection;
    use kernel::interface::query::GenreQuery;
    use kernel::interface::update::GenreModifier;
    use kernel::prelude::entity::{Genre, GenreId, GenreName};
    use kernel::KernelError;

    use crate::database::postgres::genre::PostgresGenreRepository;
    use crate::database::postgres::PostgresDatabase;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let id = GenreId::new(uuid::Uuid::new_v4());

        let name = GenreName::new(format!("test-{}", uuid::Uuid::new_v4()));
        let genre = Genre::new(id.clone(), name.clone());
        PostgresGenreRepository.create(&mut con, &genre).await?;

        let found = PostgresGenreRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(genre.clone()));

        let found = PostgresGenreRepository.find_by_name(&mut con, &name).await?;
        assert_eq!(found, Some(genre.clone()));

        let genre = genre.reconstruct(|g| {
            g.name = GenreName::new(format!("test-{}", uuid::Uuid::new_v4()))
        });
        PostgresGenreRepository.update(&mut con, &genre).await?;

        let found = PostgresGenreRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(genre));

        PostgresGenreRepository.delete(&mut con, &id).await?;
        let found = PostgresGenreRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());

        Ok(())
    }
}
