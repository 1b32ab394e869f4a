use uuid::Uuid;

use kernel::interface::database::{DependOnDatabaseConnection, QueryDatabaseConnection};
use kernel::interface::query::{BookQuery, DependOnBookQuery, DependOnGenreQuery, GenreQuery};
use kernel::interface::update::{DependOnGenreModifier, GenreModifier};
use kernel::prelude::entity::{Genre, GenreId, GenreName};
use kernel::KernelError;

use crate::transfer::{
    CreateGenreDto, CreateGenreOutcome, DeleteGenreDto, DeleteGenreOutcome, GenreDetailDto,
    GenreDto, GetGenreDetailDto, UpdateGenreDto, UpdateGenreOutcome,
};
use crate::validate::{required, sanitize};

#[async_trait::async_trait]
pub trait GenreListService<Connection: Send + 'static>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnGenreQuery<Connection>
{
    /// All genres, ordered by name ascending.
    async fn genre_list(&self) -> error_stack::Result<Vec<GenreDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let genres = self.genre_query().find_all(&mut connection).await?;

        Ok(genres.into_iter().map(GenreDto::from).collect())
    }
}

impl<Connection: Send + 'static, T> GenreListService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnGenreQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait GetGenreService<Connection: Send + 'static>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnGenreQuery<Connection>
{
    async fn get_genre(&self, id: Uuid) -> error_stack::Result<Option<GenreDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = GenreId::new(id);
        let genre = self.genre_query().find_by_id(&mut connection, &id).await?;

        Ok(genre.map(GenreDto::from))
    }
}

impl<Connection: Send + 'static, T> GetGenreService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnGenreQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait GenreDetailService<Connection: Send + 'static>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnGenreQuery<Connection>
    + DependOnBookQuery<Connection>
{
    /// Fan-out: the genre and its dependent books are fetched concurrently on
    /// separate connections and joined before the view is built. Either error
    /// aborts the whole operation.
    async fn genre_detail(
        &self,
        dto: GetGenreDetailDto,
    ) -> error_stack::Result<GenreDetailDto, KernelError> {
        let id = GenreId::new(dto.id);

        let (genre, books) = tokio::try_join!(
            async {
                let mut connection = self.database_connection().transact().await?;
                self.genre_query().find_by_id(&mut connection, &id).await
            },
            async {
                let mut connection = self.database_connection().transact().await?;
                self.book_query().find_by_genre_id(&mut connection, &id).await
            },
        )?;

        Ok(GenreDetailDto {
            genre: genre.map(GenreDto::from),
            books: books.into_iter().map(Into::into).collect(),
        })
    }
}

impl<Connection: Send + 'static, T> GenreDetailService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnGenreQuery<Connection>
        + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateGenreService<Connection: Send + 'static>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnGenreQuery<Connection>
    + DependOnGenreModifier<Connection>
{
    /// Check-then-insert: an existing genre with the same name short-circuits
    /// to an idempotent redirect. The window between check and insert is not
    /// closed; concurrent duplicate creates can race.
    async fn create_genre(
        &self,
        dto: CreateGenreDto,
    ) -> error_stack::Result<CreateGenreOutcome, KernelError> {
        let name = sanitize(&dto.name);
        let errors: Vec<_> = required("name", &name, "Genre name required")
            .into_iter()
            .collect();
        if !errors.is_empty() {
            return Ok(CreateGenreOutcome::Invalid { name, errors });
        }

        let mut connection = self.database_connection().transact().await?;

        let name = GenreName::new(name);
        if let Some(found) = self
            .genre_query()
            .find_by_name(&mut connection, &name)
            .await?
        {
            tracing::debug!(genre = %found.id().as_ref(), "genre already exists");
            return Ok(CreateGenreOutcome::Existing {
                genre: found.into(),
            });
        }

        let genre = Genre::new(GenreId::new(Uuid::new_v4()), name);
        self.genre_modifier().create(&mut connection, &genre).await?;

        Ok(CreateGenreOutcome::Created {
            genre: genre.into(),
        })
    }
}

impl<Connection: Send + 'static, T> CreateGenreService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnGenreQuery<Connection>
        + DependOnGenreModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateGenreService<Connection: Send + 'static>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnGenreQuery<Connection>
    + DependOnGenreModifier<Connection>
{
    /// The id is a lookup key only and is never regenerated. On validation
    /// failure the genre is re-fetched by the input id for the error render.
    async fn update_genre(
        &self,
        dto: UpdateGenreDto,
    ) -> error_stack::Result<UpdateGenreOutcome, KernelError> {
        let id = GenreId::new(dto.id);
        let name = sanitize(&dto.name);

        let errors: Vec<_> = required("name", &name, "Name must not be empty.")
            .into_iter()
            .collect();

        let mut connection = self.database_connection().transact().await?;

        if !errors.is_empty() {
            let genre = self.genre_query().find_by_id(&mut connection, &id).await?;
            return Ok(UpdateGenreOutcome::Invalid {
                genre: genre.map(GenreDto::from),
                errors,
            });
        }

        let genre = Genre::new(id, GenreName::new(name));
        self.genre_modifier().update(&mut connection, &genre).await?;

        Ok(UpdateGenreOutcome::Updated {
            genre: genre.into(),
        })
    }
}

impl<Connection: Send + 'static, T> UpdateGenreService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnGenreQuery<Connection>
        + DependOnGenreModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteGenreService<Connection: Send + 'static>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnGenreQuery<Connection>
    + DependOnBookQuery<Connection>
    + DependOnGenreModifier<Connection>
{
    /// Guard: deletion never proceeds while dependent books exist. The
    /// dependent check and the delete are not transactional.
    async fn delete_genre(
        &self,
        dto: DeleteGenreDto,
    ) -> error_stack::Result<DeleteGenreOutcome, KernelError> {
        let id = GenreId::new(dto.id);

        let (genre, books) = tokio::try_join!(
            async {
                let mut connection = self.database_connection().transact().await?;
                self.genre_query().find_by_id(&mut connection, &id).await
            },
            async {
                let mut connection = self.database_connection().transact().await?;
                self.book_query().find_by_genre_id(&mut connection, &id).await
            },
        )?;

        if !books.is_empty() {
            return Ok(DeleteGenreOutcome::Blocked {
                genre: genre.map(GenreDto::from),
                books: books.into_iter().map(Into::into).collect(),
            });
        }

        let mut connection = self.database_connection().transact().await?;
        self.genre_modifier().delete(&mut connection, &id).await?;

        Ok(DeleteGenreOutcome::Deleted)
    }
}

impl<Connection: Send + 'static, T> DeleteGenreService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnGenreQuery<Connection>
        + DependOnBookQuery<Connection>
        + DependOnGenreModifier<Connection>
{
}
